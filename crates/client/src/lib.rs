//! eventdesk_client - CLI client for the eventdesk API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod reminders;
pub mod validate;

pub use client::EventdeskClient;
pub use error::{ClientError, Result};
