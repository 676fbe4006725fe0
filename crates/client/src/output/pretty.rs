//! Pretty output formatting.

use chrono::Datelike;

use eventdesk_core::events::Event;

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!("{}\n  ID: {}\n  Date: {}", event.name, event.id, event.date);
    if let Some(time) = &event.time {
        output.push_str(&format!("\n  Time: {}", time.format("%H:%M")));
    }
    if let Some(location) = &event.location {
        output.push_str(&format!("\n  Location: {}", location));
    }
    if let Some(organizer) = &event.organizer {
        output.push_str(&format!("\n  Organizer: {}", organizer));
    }
    if let Some(description) = &event.description {
        output.push_str(&format!("\n  Description: {}", description));
    }
    output
}

/// Format events for display, with the contact footer appended.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return format!("No events found.\n\n{}", footer());
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output.push_str(&format!("\n{}", footer()));
    output
}

/// Contact footer, configurable via COMPANY_NAME and CONTACT_EMAIL.
pub fn footer() -> String {
    let company =
        std::env::var("COMPANY_NAME").unwrap_or_else(|_| "Default Company Name".to_string());
    let contact =
        std::env::var("CONTACT_EMAIL").unwrap_or_else(|_| "contact@example.com".to_string());
    let year = chrono::Local::now().year();

    format!("{} (c) {}\nFor inquiries, contact us at {}", company, year, contact)
}
