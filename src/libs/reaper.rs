//! Core teardown sequence: resolve, terminate gracefully, escalate.
//!
//! Control flows linearly through three stages. The resolver turns a PID
//! into a live handle or fails fast. The graceful terminator sends one
//! cooperative signal and waits out the timeout. Only on timeout does the
//! tree reaper run: snapshot the descendant tree, force-kill it highest
//! PID first with the root last, then wait out the same timeout again for
//! confirmation that every member actually exited.
//!
//! Both waits poll liveness through the [`ProcessControl`] capability at a
//! fixed interval bounded by the deadline; there is no second thread and
//! no cancellation. Processes that vanish between steps are treated as
//! already gone at every stage.

use crate::libs::messages::Message;
use crate::libs::process::{ProcessControl, ProcessHandle};
use crate::{msg_error, msg_info, msg_warning};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Timing knobs for one invocation.
///
/// The same `timeout` bounds both the graceful wait and the
/// kill-confirmation wait. `poll_interval` controls how often liveness is
/// rechecked while waiting; tests shrink it to keep wall time down.
#[derive(Debug, Clone, Copy)]
pub struct ReaperConfig {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Fatal resolution failure. Everything past resolution is collected into
/// the [`ReapOutcome`] instead of erroring out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReapError {
    #[error("no process with PID {0} found")]
    ProcessNotFound(u32),
}

/// Per-process classification after the confirmation wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    Gone,
    Alive,
}

/// Final result of one teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReapOutcome {
    /// The target exited on its own within the graceful window. No kill
    /// signal was ever sent.
    GracefulExit { elapsed: Duration },
    /// Escalation ran and every member of the kill set exited in time.
    TreeKilled { reaped: Vec<u32> },
    /// Escalation ran but some PIDs outlived the confirmation wait.
    Survivors { alive: Vec<u32>, gone: Vec<u32> },
}

impl ReapOutcome {
    /// Process exit code: 0 for a full teardown, 1 when anything survived.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReapOutcome::GracefulExit { .. } | ReapOutcome::TreeKilled { .. } => 0,
            ReapOutcome::Survivors { .. } => 1,
        }
    }
}

/// One-shot process reaper.
pub struct Reaper<C: ProcessControl> {
    control: C,
    config: ReaperConfig,
}

impl<C: ProcessControl> Reaper<C> {
    pub fn new(control: C, config: ReaperConfig) -> Self {
        Self { control, config }
    }

    /// Consumes the reaper and returns the underlying capability.
    pub fn into_control(self) -> C {
        self.control
    }

    /// Runs the full sequence against `pid`.
    ///
    /// Fails only when the PID does not resolve at start; from then on
    /// every outcome, including surviving processes, is reported through
    /// [`ReapOutcome`].
    pub fn run(&mut self, pid: u32) -> Result<ReapOutcome, ReapError> {
        let root = self.control.resolve(pid).ok_or(ReapError::ProcessNotFound(pid))?;
        msg_info!(Message::ProcessIdentified(root.pid, root.name.clone()));

        if let Some(elapsed) = self.terminate_gracefully(&root) {
            msg_info!(Message::GracefulExit(root.pid, elapsed.as_secs_f64()));
            return Ok(ReapOutcome::GracefulExit { elapsed });
        }
        Ok(self.reap_tree(root))
    }

    /// Sends exactly one cooperative signal and waits up to the timeout
    /// for a voluntary exit. Returns the elapsed wall-clock time on exit,
    /// `None` when the window closed with the process still alive.
    fn terminate_gracefully(&mut self, root: &ProcessHandle) -> Option<Duration> {
        let started = Instant::now();
        self.control.terminate(root);
        msg_info!(Message::TermSignalSent(root.pid));
        msg_info!(Message::GracefulWaitStarted(root.pid, self.config.timeout.as_secs()));

        if self.await_exit(root.pid) {
            Some(started.elapsed())
        } else {
            msg_warning!(Message::GracefulTimeout(root.pid, self.config.timeout.as_secs()));
            None
        }
    }

    /// Escalation path: snapshot the tree, kill it, confirm the kills.
    ///
    /// The snapshot is fixed at this point; processes the target forks
    /// afterwards are not tracked. Killing highest PID first targets the
    /// most recently spawned descendants before the processes that
    /// spawned them, a race mitigation rather than a guarantee. The root
    /// always goes last.
    fn reap_tree(&mut self, root: ProcessHandle) -> ReapOutcome {
        let mut descendants = self.control.descendants(&root);
        if descendants.is_empty() {
            msg_info!(Message::NoDescendants);
        } else {
            msg_info!(Message::DescendantsFound(descendants.len()));
        }

        descendants.sort_by(|a, b| b.pid.cmp(&a.pid));
        for child in &descendants {
            self.control.kill(child);
            msg_info!(Message::DescendantKilled(child.pid, child.name.clone()));
        }
        self.control.kill(&root);
        msg_info!(Message::KillSignalSent(root.pid));

        let mut kill_set = descendants;
        kill_set.push(root);
        msg_info!(Message::ConfirmWaitStarted(kill_set.len(), self.config.timeout.as_secs()));

        let (gone, alive) = self.confirm_exits(&kill_set);
        if alive.is_empty() {
            msg_info!(Message::ReapCompleted(gone.len()));
            ReapOutcome::TreeKilled { reaped: gone }
        } else {
            msg_error!(Message::SurvivorsRemain(alive.clone()));
            ReapOutcome::Survivors { alive, gone }
        }
    }

    /// Polls a single PID until it disappears or the timeout elapses.
    /// Always checks at least once, so a zero timeout still notices an
    /// instant exit.
    fn await_exit(&mut self, pid: u32) -> bool {
        let deadline = Instant::now() + self.config.timeout;
        loop {
            if !self.control.alive(pid) {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            thread::sleep(self.config.poll_interval.min(remaining));
        }
    }

    /// Waits up to the timeout for every member of the kill set to exit,
    /// emitting a confirmation event per exit as it is observed. Returns
    /// the (gone, alive) partition of the set.
    fn confirm_exits(&mut self, kill_set: &[ProcessHandle]) -> (Vec<u32>, Vec<u32>) {
        let deadline = Instant::now() + self.config.timeout;
        let mut pending: Vec<u32> = kill_set.iter().map(|handle| handle.pid).collect();
        let mut gone = Vec::new();

        loop {
            let mut still_alive = Vec::new();
            for pid in pending {
                match self.classify(pid) {
                    KillOutcome::Gone => {
                        msg_info!(Message::KillConfirmed(pid));
                        gone.push(pid);
                    }
                    KillOutcome::Alive => still_alive.push(pid),
                }
            }
            pending = still_alive;

            if pending.is_empty() {
                break;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            thread::sleep(self.config.poll_interval.min(remaining));
        }
        (gone, pending)
    }

    fn classify(&mut self, pid: u32) -> KillOutcome {
        if self.control.alive(pid) {
            KillOutcome::Alive
        } else {
            KillOutcome::Gone
        }
    }
}
