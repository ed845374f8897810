// src/error.rs
use thiserror::Error;

/// Errors surfaced by the backend client.
///
/// The two endpoint failures are deliberately asymmetric: session start
/// reports a fixed message without reading the body, message send embeds
/// the raw body text.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to start session")]
    SessionStart,

    #[error("LLM error: {body}")]
    MessageSend { body: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed backend response: {0}")]
    Malformed(#[source] reqwest::Error),

    /// Network-level failures (DNS, refused connection), passed through
    /// without translation.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
