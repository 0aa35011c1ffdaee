use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ANONYMOUS_USERNAME: &str = "Anonymous";

/// A single chat line, user-authored or bot-authored. The same record is
/// served over the REST history endpoint and pushed over the websocket,
/// so the wire name of the bot flag is the socket one (`isBot`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub username: String,
    pub message: String,
    #[serde(rename = "isBot")]
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_user(username: Option<String>, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.unwrap_or_else(|| ANONYMOUS_USERNAME.to_string()),
            message,
            is_bot: false,
            timestamp: Utc::now(),
        }
    }

    pub fn from_bot(bot_name: &str, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: bot_name.to_string(),
            message,
            is_bot: true,
            timestamp: Utc::now(),
        }
    }
}

impl Default for ChatMessage {
    fn default() -> Self {
        ChatMessage {
            id: Default::default(),
            username: "".to_string(),
            message: "".to_string(),
            is_bot: false,
            timestamp: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_username_defaults_to_anonymous() {
        let msg = ChatMessage::from_user(None, "hi".into());
        assert_eq!(msg.username, ANONYMOUS_USERNAME);
        assert!(!msg.is_bot);
    }

    #[test]
    fn bot_flag_uses_socket_wire_name() {
        let msg = ChatMessage::from_bot("DevPortal Bot", "reply".into());
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["isBot"], serde_json::json!(true));
        assert!(value.get("is_bot").is_none());
    }
}
