pub mod logger;
pub mod messages;
pub mod process;
pub mod reaper;
