//! OS process access behind an injectable capability.
//!
//! The reaper core never touches the OS directly; everything it needs -
//! resolution, signal delivery, descendant enumeration, liveness - goes
//! through [`ProcessControl`], so tests can drive the core with a scripted
//! in-memory process table.
//!
//! [`SystemControl`] is the production implementation: process-table
//! snapshots come from `sysinfo`; on Unix, signals are delivered with
//! `kill(2)` via `nix` (ESRCH means the process is already gone and is
//! swallowed); on Windows, delivery goes through sysinfo's signal support,
//! falling back to `TerminateProcess` when a cooperative close is not
//! available.

use std::collections::HashMap;
use sysinfo::{Pid, ProcessesToUpdate, System};

/// A transient reference to a live OS process.
///
/// The `name` is best-effort: a process can exit between enumeration and
/// the name query, and PIDs are reused by the OS, so a handle is only
/// meaningful within the invocation that captured it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    pub pid: u32,
    pub name: String,
}

/// Capability interface over the OS process table.
///
/// Signal delivery is fire-and-forget: delivery to a vanished process is
/// a silent no-op, and other delivery failures are logged, never returned.
/// The confirmation wait is what decides whether a kill actually worked.
pub trait ProcessControl {
    /// Point-in-time lookup. `None` means no such process right now.
    fn resolve(&mut self, pid: u32) -> Option<ProcessHandle>;

    /// Sends the cooperative termination signal (SIGTERM-equivalent).
    fn terminate(&mut self, handle: &ProcessHandle);

    /// Sends the forceful kill signal (SIGKILL-equivalent).
    fn kill(&mut self, handle: &ProcessHandle);

    /// Snapshots every transitive descendant of `handle`, in no
    /// particular order. An empty list when the root has vanished is
    /// valid, not an error.
    fn descendants(&mut self, handle: &ProcessHandle) -> Vec<ProcessHandle>;

    /// Liveness poll for one PID.
    fn alive(&mut self, pid: u32) -> bool;
}

/// Production [`ProcessControl`] backed by the real OS process table.
pub struct SystemControl {
    system: System,
}

impl SystemControl {
    pub fn new() -> Self {
        Self { system: System::new() }
    }
}

impl Default for SystemControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessControl for SystemControl {
    fn resolve(&mut self, pid: u32) -> Option<ProcessHandle> {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        self.system.process(Pid::from_u32(pid)).map(|process| ProcessHandle {
            pid,
            name: process.name().to_string_lossy().into_owned(),
        })
    }

    #[cfg(unix)]
    fn terminate(&mut self, handle: &ProcessHandle) {
        send_signal(handle, nix::sys::signal::Signal::SIGTERM);
    }

    #[cfg(windows)]
    fn terminate(&mut self, handle: &ProcessHandle) {
        self.deliver(handle, sysinfo::Signal::Term);
    }

    #[cfg(unix)]
    fn kill(&mut self, handle: &ProcessHandle) {
        send_signal(handle, nix::sys::signal::Signal::SIGKILL);
    }

    #[cfg(windows)]
    fn kill(&mut self, handle: &ProcessHandle) {
        self.deliver(handle, sysinfo::Signal::Kill);
    }

    fn descendants(&mut self, handle: &ProcessHandle) -> Vec<ProcessHandle> {
        self.system.refresh_processes(ProcessesToUpdate::All, true);

        // Parent -> children index over the whole table, then walk the
        // subtree rooted at the target.
        let mut children_of: HashMap<u32, Vec<ProcessHandle>> = HashMap::new();
        for (pid, process) in self.system.processes() {
            if let Some(parent) = process.parent() {
                children_of.entry(parent.as_u32()).or_default().push(ProcessHandle {
                    pid: pid.as_u32(),
                    name: process.name().to_string_lossy().into_owned(),
                });
            }
        }

        let mut collected = Vec::new();
        let mut queue = vec![handle.pid];
        while let Some(pid) = queue.pop() {
            if let Some(children) = children_of.remove(&pid) {
                for child in children {
                    queue.push(child.pid);
                    collected.push(child);
                }
            }
        }
        collected
    }

    fn alive(&mut self, pid: u32) -> bool {
        let target = Pid::from_u32(pid);
        self.system.refresh_processes(ProcessesToUpdate::Some(&[target]), true);
        self.system.process(target).is_some()
    }
}

#[cfg(windows)]
impl SystemControl {
    /// Delivers `signal` through sysinfo, falling back to a hard
    /// `TerminateProcess` when the signal has no Windows equivalent.
    fn deliver(&mut self, handle: &ProcessHandle, signal: sysinfo::Signal) {
        use crate::libs::messages::Message;
        use crate::msg_debug;

        let target = Pid::from_u32(handle.pid);
        self.system.refresh_processes(ProcessesToUpdate::Some(&[target]), true);
        match self.system.process(target) {
            Some(process) => {
                if process.kill_with(signal).is_none() {
                    process.kill();
                }
            }
            None => msg_debug!(Message::AlreadyGone(handle.pid)),
        }
    }
}

/// Unix signal delivery. ESRCH is the vanished-process race and is
/// swallowed; anything else (EPERM, mostly) is logged and the process is
/// left for the confirmation wait to report as a survivor.
#[cfg(unix)]
fn send_signal(handle: &ProcessHandle, signal: nix::sys::signal::Signal) {
    use crate::libs::messages::Message;
    use crate::{msg_debug, msg_warning};
    use nix::errno::Errno;
    use nix::unistd::Pid;

    match nix::sys::signal::kill(Pid::from_raw(handle.pid as i32), signal) {
        Ok(()) => {}
        Err(Errno::ESRCH) => msg_debug!(Message::AlreadyGone(handle.pid)),
        Err(err) => msg_warning!(Message::SignalDeliveryFailed(handle.pid, err.to_string())),
    }
}
