//! Client configuration
//!
//! Read from an optional JSON block embedded in the page:
//!
//! ```html
//! <script id="cosmic-config" type="application/json">
//!   { "api_base": "/api/toggle", "toggle_selector": ".command-toggle" }
//! </script>
//! ```

use cosmic_toggle_protocol::DEFAULT_API_BASE;
use serde::Deserialize;

use crate::error::{Result, UiError};

/// Default selector for toggle inputs
pub const DEFAULT_TOGGLE_SELECTOR: &str = ".command-toggle";

/// Full client configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub toggle_selector: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_string(),
        }
    }
}

impl ClientConfig {
    /// Id of the `<script>` element holding the config block
    pub const ELEMENT_ID: &'static str = "cosmic-config";

    /// Parse a config block; absent keys keep their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(text).map_err(UiError::Config)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load from the page's config block, falling back to defaults
    pub fn load(block: Option<&str>) -> Self {
        match block.map(str::trim) {
            None | Some("") => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed config block");
                Self::default()
            }),
        }
    }
}
