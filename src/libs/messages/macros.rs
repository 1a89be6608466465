//! Convenience macros for emitting [`Message`](super::Message) values.
//!
//! Each macro pairs a message with a tracing severity. The subscriber is
//! installed by the CLI before any work starts, so severity filtering and
//! color handling happen in one place.

/// Emits a message at info severity.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("{}", $msg)
    };
}

/// Emits a message at warning severity.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        tracing::warn!("{}", $msg)
    };
}

/// Emits a message at error severity.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        tracing::error!("{}", $msg)
    };
}

/// Emits a message at debug severity.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("{}", $msg)
    };
}
