use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============= Domain Types =============

/// Server-assigned conversation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub i64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, timestamped thread of messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub name: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A single message within a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: Option<i64>,
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub is_user: bool,
}

impl Message {
    /// Locally authored message, not yet persisted by the server
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            timestamp: Utc::now(),
            is_user: true,
        }
    }

    /// Assistant reply as returned by the send endpoint
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            timestamp: Utc::now(),
            is_user: false,
        }
    }
}

/// Accepts RFC 3339 or the backend's zone-less local date-time, read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Parse a timestamp in either of the formats the API emits
pub fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp '{}': {}", raw, e))
}

// ============= API Request/Response Types =============

/// Response wrapper used by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub message: Option<String>,
    pub data: Option<T>,
    pub status: u16,
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload of a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    pub token: String,
}

// ============= Error Types =============

/// Everything that can go wrong on the client side of an API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// The text shown to the user: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Rejected {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_conversation_from_backend_json() {
        let json = r#"{"id": 7, "name": "Trip ideas", "createdAt": "2024-03-05T14:30:00"}"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();

        assert_eq!(conv.id, ConversationId(7));
        assert_eq!(conv.name, "Trip ideas");
        assert_eq!(
            conv.created_at,
            Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp("2024-03-05T14:30:00+02:00").unwrap();
        assert_eq!(rfc, Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap());

        let fractional = parse_timestamp("2024-03-05T14:30:00.123456").unwrap();
        assert_eq!(fractional.timestamp(), rfc.timestamp() + 2 * 3600);

        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_message_wire_names() {
        let json = r#"{"id": 1, "content": "hi", "timestamp": "2024-01-01T00:00:00Z", "isUser": true}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.is_user);
        assert_eq!(msg.id, Some(1));
    }

    #[test]
    fn test_envelope_without_data() {
        let env: ApiEnvelope<TokenData> =
            serde_json::from_str(r#"{"message": "Invalid credentials", "status": 401}"#).unwrap();
        assert_eq!(env.status, 401);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let rejected = ClientError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(rejected.user_message("Login failed"), "Invalid credentials");

        let silent = ClientError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(silent.user_message("Login failed"), "Login failed");

        let network = ClientError::Network("connection refused".to_string());
        assert_eq!(network.user_message("Login failed"), "Login failed");
    }
}
