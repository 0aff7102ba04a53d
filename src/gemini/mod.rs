//! Gemini API integration
//!
//! Provides the transport seam used by the chat orchestrator: a trait for
//! issuing `generateContent` calls, the real reqwest-backed client, and a
//! mock for tests.

pub mod client;
pub mod mock;
pub mod types;

pub use client::GeminiClient;
pub use mock::MockGenerateClient;
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GenerateService: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}
