use async_trait::async_trait;
use cosmic_toggle_protocol::{toggle_path, ToggleRequest};
use serde_json::Value;

use crate::error::Result;

/// Sends a JSON body and hands back the parsed JSON reply
#[async_trait(?Send)]
pub trait ToggleTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<Value>;
}

/// Flips named commands on the server
pub struct ToggleClient<T> {
    transport: T,
    api_base: String,
}

impl<T: ToggleTransport> ToggleClient<T> {
    pub fn new(transport: T, api_base: impl Into<String>) -> Self {
        Self {
            transport,
            api_base: api_base.into(),
        }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `{"status": status}` to `{api_base}/{command}`
    ///
    /// Returns the reply JSON as sent, whatever its shape or HTTP status.
    /// One request per call; nothing is retried.
    pub async fn set_status(&self, command: &str, status: bool) -> Result<Value> {
        let path = toggle_path(&self.api_base, command);
        let body = serde_json::to_string(&ToggleRequest::new(status))?;

        tracing::debug!(command, status, %path, "sending toggle");
        self.transport.post_json(&path, body).await
    }
}
