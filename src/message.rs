// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /message/`. Exactly these three keys, nothing sanitized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    pub session_id: String,
    pub user_message: String,
    pub persona_name: String,
}

/// Body of a successful `POST /start_session/`.
#[derive(Debug, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
}

/// Body of a successful `POST /message/`.
///
/// `reply`, `model` and `session_id` are required; any other top-level
/// fields the backend sends (e.g. `prompt_used`) are kept verbatim in
/// `extra` rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReply {
    pub reply: String,
    pub model: String,
    pub session_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
