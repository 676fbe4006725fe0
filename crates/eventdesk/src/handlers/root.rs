//! Root welcome endpoint.

/// GET / - Plain-text welcome banner.
#[axum::debug_handler]
pub async fn welcome() -> &'static str {
    "Welcome to the Event Management System!"
}
