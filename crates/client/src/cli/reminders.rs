//! Reminder CLI command.

use clap::Parser;

/// Print reminders for events starting within a window.
#[derive(Debug, Parser)]
pub struct RemindersCommand {
    /// Reminder window before an event starts, e.g. 30m or 24h.
    #[arg(long, env = "REMINDER_BEFORE", default_value = "24h")]
    pub before: String,

    /// Keep polling instead of checking once.
    #[arg(long)]
    pub watch: bool,

    /// Poll interval in seconds when watching.
    #[arg(long, default_value = "1800")]
    pub interval_seconds: u64,
}
