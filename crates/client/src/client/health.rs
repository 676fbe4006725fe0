//! Health check operations.

use super::EventdeskClient;
use crate::error::{ClientError, Result};

impl EventdeskClient {
    /// Check server liveness.
    pub async fn health_live(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "Liveness probe failed".to_string(),
            })
        }
    }
}
