//! Backend for a small Gemini-powered chatbot.
//!
//! Exposes a single `POST /api/chat` endpoint and forwards each user message,
//! together with the accumulated conversation history and a fixed system
//! instruction, to the Gemini `generateContent` API.

pub mod chat;
pub mod error;
pub mod gemini;
pub mod history;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
