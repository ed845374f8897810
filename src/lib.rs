pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::ClientError;
pub use message::{MessagePayload, MessageReply};
pub use services::llm_client::BackendClient;
