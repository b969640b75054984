use serde::{Deserialize, Serialize};

pub mod applications;
pub mod auth;
pub mod chatbot;
pub mod config;
pub mod events;
pub mod filter;
pub mod jobs;
pub mod listing;
pub mod mentors;
pub mod profile;
pub mod resources;
pub mod seed_data;
pub mod storage;
pub mod validation;

/// Body of the outbound chat call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from the chat endpoint. Rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
