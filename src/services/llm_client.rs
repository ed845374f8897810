// src/services/llm_client.rs
use tracing::debug;

use crate::config::Config;
use crate::error::ClientError;
use crate::message::{MessagePayload, MessageReply, StartSessionResponse};

/// Thin wrapper over the two backend endpoints. Holds no session state;
/// callers keep the session id and pass it back on every message.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: Config) -> Self {
        Self {
            // No timeout: a hung request hangs until the caller gives up.
            http: reqwest::Client::new(),
            base_url: config.backend_url().to_string(),
        }
    }

    /// `POST /start_session/` with an empty body. Returns the new session
    /// id exactly as the backend sent it.
    pub async fn start_session(&self) -> Result<String, ClientError> {
        let url = format!("{}/start_session/", self.base_url);
        debug!(%url, "starting session");

        let resp = self.http.post(&url).send().await?;
        if !resp.status().is_success() {
            // Body is intentionally not read on this path.
            return Err(ClientError::SessionStart);
        }

        let body: StartSessionResponse =
            resp.json().await.map_err(ClientError::Malformed)?;
        debug!(session_id = %body.session_id, "session started");
        Ok(body.session_id)
    }

    /// `POST /message/` with the three fixed payload fields. Inputs are
    /// forwarded as-is, nothing is validated client-side.
    pub async fn send_message(
        &self,
        session_id: &str,
        user_message: &str,
        persona_name: &str,
    ) -> Result<MessageReply, ClientError> {
        let url = format!("{}/message/", self.base_url);
        let payload = MessagePayload {
            session_id: session_id.to_string(),
            user_message: user_message.to_string(),
            persona_name: persona_name.to_string(),
        };
        debug!(%url, session_id, persona_name, "sending message");

        let resp = self.http.post(&url).json(&payload).send().await?;
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::MessageSend { body });
        }

        resp.json().await.map_err(ClientError::Malformed)
    }
}
