//! Boundary DTOs and configuration
//!
//! Defines the request/response shapes for the `/api/chat` endpoint and the
//! environment-backed configuration for reaching the Gemini API.

use serde::{Deserialize, Serialize};

/// Body of an inbound `POST /api/chat` request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned to the client. Always present, even for failed calls.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}
