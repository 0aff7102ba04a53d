//! Error handling and custom error types
//!
//! Keeps the four failure kinds distinct internally (validation, no-answer,
//! transport, parse) even though the chat boundary collapses them into a
//! handful of fixed user-facing messages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {0}")]
    Api(String),

    #[error("Failed to parse Gemini response: {0}")]
    Parse(String),

    #[error("Response contained no candidates")]
    NoCandidates,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
