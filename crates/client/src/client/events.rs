//! Event API operations.

use chrono::{NaiveDate, NaiveTime};

use eventdesk_core::events::Event;

use super::{EventdeskClient, MessageResponse};
use crate::error::Result;

/// Request for updating an event.
///
/// Mirrors the server's update payload: name and date are required, the
/// rest are optional and omitted from the body when unset.
#[derive(Debug, serde::Serialize)]
pub struct UpdateEventRequest {
    pub name: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request for registering an attendee.
#[derive(Debug, serde::Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

impl EventdeskClient {
    /// List all events.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self.client.get(self.url("/events")).send().await?;
        self.handle_response(response).await
    }

    /// Submit a new event. The server echoes the submission back.
    pub async fn create_event(&self, event: &Event) -> Result<Event> {
        let response = self
            .client
            .post(self.url("/events"))
            .json(event)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Submit a batch of events. The server echoes the array back.
    pub async fn create_events_batch(&self, events: &[Event]) -> Result<Vec<Event>> {
        let response = self
            .client
            .post(self.url("/events/batch"))
            .json(events)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get event by id.
    pub async fn get_event(&self, id: i64) -> Result<Event> {
        let response = self
            .client
            .get(self.url(&format!("/events/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update an event. Returns the event as the server acknowledged it.
    pub async fn update_event(&self, id: i64, req: UpdateEventRequest) -> Result<Event> {
        let response = self
            .client
            .put(self.url(&format!("/events/{}", id)))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete event by id. Returns the server's confirmation message.
    pub async fn delete_event(&self, id: i64) -> Result<String> {
        let response = self
            .client
            .delete(self.url(&format!("/events/{}", id)))
            .send()
            .await?;
        let body: MessageResponse = self.handle_response(response).await?;
        Ok(body.message)
    }

    /// Register an attendee for an event.
    pub async fn register(&self, id: i64, name: &str, email: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url(&format!("/events/{}/register", id)))
            .json(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
            })
            .send()
            .await?;
        let body: MessageResponse = self.handle_response(response).await?;
        Ok(body.message)
    }
}
