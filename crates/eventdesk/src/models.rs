//! Request payload types for the event handlers.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use eventdesk_core::events::Event;

/// Payload for updating an event (PUT /events/{id}).
///
/// The edit collaborators submit the full field set; `title` is accepted
/// as an alias for `name`. Any id in the body is ignored in favor of the
/// path id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    #[serde(alias = "title")]
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub description: Option<String>,
}

impl UpdateEvent {
    /// Builds the full event for the given id.
    pub fn into_event(self, id: i64) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            location: self.location,
            organizer: self.organizer,
            description: self.description,
        }
    }
}

/// Payload for registering an attendee (POST /events/{id}/register).
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAttendee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl RegisterAttendee {
    /// Returns true when both required fields are present.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}
