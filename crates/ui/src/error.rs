use wasm_bindgen::JsValue;

/// Errors surfaced by the UI crate
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Config error: {0}")]
    Config(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;

/// Best-effort text for a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl UiError {
    pub fn network(value: JsValue) -> Self {
        Self::Network(js_message(&value))
    }

    pub fn decode(value: JsValue) -> Self {
        Self::Decode(js_message(&value))
    }
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Dom(js_message(&value))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        Self::from_str(&err.to_string())
    }
}
