use crate::libs::logger;
use crate::libs::messages::Message;
use crate::libs::process::SystemControl;
use crate::libs::reaper::{ReapError, Reaper, ReaperConfig};
use crate::msg_error;
use clap::{ArgAction, Parser};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target process identifier
    pub pid: u32,
    /// Seconds to wait for graceful exit, and again for kill confirmation
    #[arg(long = "timeout-s", value_name = "SECONDS", default_value_t = 30)]
    pub timeout_s: u64,
    /// Increase log verbosity (-v warnings, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Disable ANSI colors in log output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parses arguments, runs one teardown, and maps the outcome to an
    /// exit code: 0 when the target is fully gone, 1 otherwise.
    pub fn menu() -> i32 {
        let cli = Self::parse();
        logger::init(cli.verbose, cli.no_color);

        let config = ReaperConfig {
            timeout: Duration::from_secs(cli.timeout_s),
            ..Default::default()
        };
        let mut reaper = Reaper::new(SystemControl::new(), config);
        match reaper.run(cli.pid) {
            Ok(outcome) => outcome.exit_code(),
            Err(ReapError::ProcessNotFound(pid)) => {
                msg_error!(Message::TargetNotFound(pid));
                1
            }
        }
    }
}
