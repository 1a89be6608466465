/// Every user-facing log event the tool can emit.
///
/// Text lives in the `Display` implementation so wording stays in one
/// place; variants carry only the data a message interpolates.
#[derive(Debug, Clone)]
pub enum Message {
    // === RESOLUTION ===
    TargetNotFound(u32),
    ProcessIdentified(u32, String), // pid, name

    // === GRACEFUL PHASE ===
    TermSignalSent(u32),
    GracefulWaitStarted(u32, u64), // pid, timeout seconds
    GracefulExit(u32, f64),        // pid, elapsed seconds
    GracefulTimeout(u32, u64),     // pid, timeout seconds

    // === ESCALATION ===
    DescendantsFound(usize),
    NoDescendants,
    DescendantKilled(u32, String), // pid, name
    KillSignalSent(u32),

    // === CONFIRMATION ===
    ConfirmWaitStarted(usize, u64), // kill-set size, timeout seconds
    KillConfirmed(u32),
    AlreadyGone(u32),
    SignalDeliveryFailed(u32, String), // pid, OS error

    // === SUMMARY ===
    ReapCompleted(usize),
    SurvivorsRemain(Vec<u32>),
}
