// src/services/mod.rs
pub mod llm_client;
