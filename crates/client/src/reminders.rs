//! Reminder selection for upcoming events.
//!
//! The reminder window is configured like `90m` or `24h`; events whose
//! start falls inside `[now, now + window]` are due. Events without a
//! start time are treated as starting at midnight.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use eventdesk_core::events::Event;

use crate::error::{ClientError, Result};

/// Parses a reminder window such as `"30s"`, `"90m"` or `"24h"`.
pub fn parse_window(input: &str) -> Result<Duration> {
    let input = input.trim();
    let Some(unit) = input.chars().last() else {
        return Err(ClientError::InvalidInput(
            "Reminder window must not be empty".to_string(),
        ));
    };
    let value = &input[..input.len() - unit.len_utf8()];

    let amount: i64 = value
        .parse()
        .map_err(|_| ClientError::InvalidInput(format!("Invalid reminder window: {input}")))?;
    if amount < 0 {
        return Err(ClientError::InvalidInput(format!(
            "Reminder window must not be negative: {input}"
        )));
    }

    match unit {
        's' => Ok(Duration::seconds(amount)),
        'm' => Ok(Duration::minutes(amount)),
        'h' => Ok(Duration::hours(amount)),
        _ => Err(ClientError::InvalidInput(format!(
            "Invalid reminder window: {input} (expected a number followed by s, m or h)"
        ))),
    }
}

/// The instant an event starts, defaulting to midnight when no time is set.
pub fn event_start(event: &Event) -> NaiveDateTime {
    event
        .date
        .and_time(event.time.unwrap_or(NaiveTime::MIN))
}

/// Returns the events starting within the window, in listing order.
///
/// Events that have already started are never due: a reminder for a past
/// event is noise, not a reminder.
pub fn due_for_reminder(events: &[Event], now: NaiveDateTime, window: Duration) -> Vec<Event> {
    events
        .iter()
        .filter(|event| {
            let start = event_start(event);
            start >= now && start - now <= window
        })
        .cloned()
        .collect()
}
