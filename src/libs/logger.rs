//! Log output configuration for a single invocation.
//!
//! Wraps `tracing-subscriber` to map the repeatable `-v` flag onto a
//! severity filter and honor `--no-color`. Events go to stderr so stdout
//! stays clean.

use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to the default severity directive.
pub fn level_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the `-v` mapping
/// when set. Safe to call once per process; later calls are ignored.
pub fn init(verbosity: u8, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .try_init();
}
