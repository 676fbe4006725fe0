//! CLI command definitions.

pub mod events;
pub mod health;
pub mod register;
pub mod reminders;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the eventdesk API.
#[derive(Debug, Parser)]
#[command(name = "eventdesk-client")]
#[command(about = "CLI client for the eventdesk API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "EVENTDESK_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Event management.
    Events(events::EventsCommand),
    /// Register an attendee for an event.
    Register(register::RegisterCommand),
    /// Print reminders for upcoming events.
    Reminders(reminders::RemindersCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
