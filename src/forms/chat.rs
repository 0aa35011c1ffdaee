use serde::{Deserialize, Serialize};

/// Inbound chat payload, shared by POST /api/chat and the websocket frames.
/// An absent username resolves to "Anonymous" when the message is recorded.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub username: Option<String>,
}
