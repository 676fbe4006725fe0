//! Registration CLI command.

use clap::Parser;

/// Register an attendee for an event.
#[derive(Debug, Parser)]
pub struct RegisterCommand {
    /// Event id.
    pub event_id: i64,

    /// Attendee name.
    #[arg(long)]
    pub name: String,

    /// Attendee email.
    #[arg(long)]
    pub email: String,
}
