//! Event CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Parses `HH:MM` time arguments, with seconds accepted when given.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{s}', expected HH:MM"))
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List all events.
    List,
    /// Get event by id.
    Get {
        /// Event id.
        id: i64,
    },
    /// Submit a new event.
    Add {
        /// Event id.
        #[arg(long)]
        id: i64,
        /// Event name.
        #[arg(long)]
        name: String,
        /// Event date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:MM).
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// Event location.
        #[arg(long)]
        location: Option<String>,
        /// Event organizer.
        #[arg(long)]
        organizer: Option<String>,
        /// Event description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Submit a batch of events from a JSON file (or stdin with "-").
    Batch {
        /// Path to a JSON array of events.
        file: PathBuf,
    },
    /// Update an event.
    Edit {
        /// Event id.
        id: i64,
        /// New name.
        #[arg(long)]
        name: String,
        /// New date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// New start time (HH:MM).
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// New location.
        #[arg(long)]
        location: Option<String>,
        /// New organizer.
        #[arg(long)]
        organizer: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete event by id.
    Delete {
        /// Event id.
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_without_seconds() {
        let time = parse_time("14:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_time_with_seconds() {
        let time = parse_time("14:30:15").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(14, 30, 15).unwrap());
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(parse_time("half past two").is_err());
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("14").is_err());
    }
}
