use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST {api_base}/{command}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub status: bool,
}

impl ToggleRequest {
    pub const fn new(status: bool) -> Self {
        Self { status }
    }
}

/// Status word carried in a toggle reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyStatus {
    Success, // success
    Error,   // error

    Unknown(String),
}

impl From<&str> for ReplyStatus {
    fn from(s: &str) -> Self {
        match s {
            "success" => Self::Success,
            "error" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for ReplyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Unknown(s) => s,
        };
        write!(f, "{s}")
    }
}

/// Lenient reading of a toggle reply
///
/// The reply body is never validated; this only recognizes the shapes the
/// command service is known to send:
/// - `{"status": "success", "command": "...", "enabled": true}`
/// - `{"status": "error", "message": "..."}`
///
/// Everything else is `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleReply {
    Accepted {
        command: Option<String>,
        enabled: Option<bool>,
    },
    Rejected {
        message: String,
    },
    Unrecognized,
}

impl ToggleReply {
    pub fn classify(value: &Value) -> Self {
        let Some(status) = value.get("status").and_then(Value::as_str) else {
            return Self::Unrecognized;
        };

        match ReplyStatus::from(status) {
            ReplyStatus::Success => Self::Accepted {
                command: value
                    .get("command")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
                enabled: value.get("enabled").and_then(Value::as_bool),
            },
            ReplyStatus::Error => Self::Rejected {
                message: value
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            },
            ReplyStatus::Unknown(_) => Self::Unrecognized,
        }
    }

    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_true() {
        let body = serde_json::to_string(&ToggleRequest::new(true)).unwrap();
        assert_eq!(body, r#"{"status":true}"#);
    }

    #[test]
    fn test_request_body_false() {
        let body = serde_json::to_value(ToggleRequest::new(false)).unwrap();
        assert_eq!(body, json!({ "status": false }));
    }

    #[test]
    fn test_classify_success() {
        let reply = json!({ "status": "success", "command": "LOOK", "enabled": true });
        assert_eq!(
            ToggleReply::classify(&reply),
            ToggleReply::Accepted {
                command: Some("LOOK".to_string()),
                enabled: Some(true),
            }
        );
    }

    #[test]
    fn test_classify_error() {
        let reply = json!({ "status": "error", "message": "Command 'X' not found" });
        let classified = ToggleReply::classify(&reply);
        assert!(classified.is_rejected());
        assert_eq!(
            classified,
            ToggleReply::Rejected {
                message: "Command 'X' not found".to_string()
            }
        );
    }

    #[test]
    fn test_classify_error_without_message() {
        let reply = json!({ "status": "error" });
        assert_eq!(
            ToggleReply::classify(&reply),
            ToggleReply::Rejected {
                message: "unknown error".to_string()
            }
        );
    }

    #[test]
    fn test_classify_arbitrary_json() {
        assert_eq!(ToggleReply::classify(&json!({ "ok": true })), ToggleReply::Unrecognized);
        assert_eq!(ToggleReply::classify(&json!([1, 2, 3])), ToggleReply::Unrecognized);
        assert_eq!(ToggleReply::classify(&json!({ "status": true })), ToggleReply::Unrecognized);
        assert_eq!(ToggleReply::classify(&json!({ "status": "pending" })), ToggleReply::Unrecognized);
    }

    #[test]
    fn test_reply_status_roundtrip_display() {
        assert_eq!(ReplyStatus::from("success").to_string(), "success");
        assert_eq!(ReplyStatus::from("weird").to_string(), "weird");
    }
}
