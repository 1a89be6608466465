//! # Reap - bounded-time process tree teardown
//!
//! A command-line utility that terminates a target process by PID and,
//! when it refuses to exit gracefully, escalates to forcibly killing its
//! entire descendant process tree.
//!
//! ## Behavior
//!
//! - **Graceful first**: a single cooperative termination signal, then a
//!   bounded wait for voluntary exit
//! - **Escalation**: on timeout, the descendant tree is snapshotted and
//!   force-killed, highest PID first, root last
//! - **Confirmation**: a second bounded wait verifies every targeted
//!   process actually exited; survivors are reported by PID
//! - **One shot**: no retries, no supervision - the tool tears down once
//!   and exits with 0 (fully gone) or 1 (target missing or survivors)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reap::commands::Cli;
//!
//! fn main() {
//!     std::process::exit(Cli::menu());
//! }
//! ```

pub mod commands;
pub mod libs;
