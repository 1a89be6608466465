//! Display implementation for all log messages.
//!
//! Single source of truth for user-facing wording. Variants with
//! parameters interpolate them here so call sites never format text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === RESOLUTION ===
            Message::TargetNotFound(pid) => format!("No process with PID {} found", pid),
            Message::ProcessIdentified(pid, name) => format!("Identified process '{}' (PID {})", name, pid),

            // === GRACEFUL PHASE ===
            Message::TermSignalSent(pid) => format!("Sent termination signal to PID {}", pid),
            Message::GracefulWaitStarted(pid, secs) => format!("Waiting up to {}s for PID {} to exit", secs, pid),
            Message::GracefulExit(pid, elapsed) => format!("PID {} exited gracefully after {:.1}s", pid, elapsed),
            Message::GracefulTimeout(pid, secs) => format!("PID {} still running after {}s, escalating to forced kill", pid, secs),

            // === ESCALATION ===
            Message::DescendantsFound(count) => format!("Found {} descendant process(es)", count),
            Message::NoDescendants => "No descendant processes found".to_string(),
            Message::DescendantKilled(pid, name) => format!("Sent kill signal to descendant '{}' (PID {})", name, pid),
            Message::KillSignalSent(pid) => format!("Sent kill signal to PID {}", pid),

            // === CONFIRMATION ===
            Message::ConfirmWaitStarted(count, secs) => format!("Waiting up to {}s for {} process(es) to exit", secs, count),
            Message::KillConfirmed(pid) => format!("PID {} confirmed exited", pid),
            Message::AlreadyGone(pid) => format!("PID {} already gone", pid),
            Message::SignalDeliveryFailed(pid, err) => format!("Failed to signal PID {}: {}", pid, err),

            // === SUMMARY ===
            Message::ReapCompleted(count) => format!("All {} targeted process(es) terminated", count),
            Message::SurvivorsRemain(pids) => {
                let list = pids.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
                format!("Processes still alive after kill: {}", list)
            }
        };

        write!(f, "{}", text)
    }
}
