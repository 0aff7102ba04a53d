//! Chat orchestration: validate, build, send, extract, update-or-fail.
//!
//! Every failure kind is mapped to one of three fixed user-facing strings and
//! the endpoint never propagates an error. History is only touched on the
//! success path, so a failed call leaves it exactly as it was.

use crate::gemini::{Content, GenerateContentRequest, GenerateContentResponse, GenerateService};
use crate::history::ConversationHistory;
use crate::{prompts, Error, Result};
use tracing::{debug, error};

/// Returned when the incoming message is empty or whitespace-only.
pub const VALIDATION_REPLY: &str = "Please provide a message.";

/// Returned when the API answered 2xx but produced no candidates.
pub const NO_ANSWER_REPLY: &str = "Failed to obtain a valid response from the API.";

/// Returned for transport and parse failures. Detail goes to the log only.
pub const SERVER_ERROR_REPLY: &str =
    "A server error occurred while communicating with the AI. Check the API key and logs.";

/// Drives one chat turn end to end and owns the conversation history.
pub struct ChatService {
    generate: Box<dyn GenerateService>,
    history: ConversationHistory,
}

impl ChatService {
    pub fn new(generate: Box<dyn GenerateService>) -> Self {
        Self {
            generate,
            history: ConversationHistory::new(),
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Handle one user message. Always returns a textual reply.
    pub async fn respond(&self, message: &str) -> String {
        match self.run_turn(message).await {
            Ok(reply) => reply,
            Err(Error::EmptyMessage) => VALIDATION_REPLY.to_string(),
            Err(Error::NoCandidates) => {
                debug!("Gemini returned no candidates");
                NO_ANSWER_REPLY.to_string()
            }
            Err(e) => {
                error!("Chat turn failed: {}", e);
                SERVER_ERROR_REPLY.to_string()
            }
        }
    }

    async fn run_turn(&self, message: &str) -> Result<String> {
        if message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }

        let request =
            GenerateContentRequest::new(message, &self.history.snapshot(), prompts::SYSTEM);

        let response = self.generate.generate_content(&request).await?;
        let reply = extract_reply(&response)?;

        // Reached only on success: a failed call never mutates history.
        self.history
            .append_exchange(Content::user(message), Content::model(reply.as_str()));

        Ok(reply)
    }
}

/// Flatten a response into reply text.
///
/// Parts concatenate within each candidate, then candidates concatenate in
/// sequence, both in order and with no separator. That double concatenation
/// is what multi-candidate output depends on.
pub fn extract_reply(response: &GenerateContentResponse) -> Result<String> {
    if response.candidates.is_empty() {
        return Err(Error::NoCandidates);
    }

    Ok(response
        .candidates
        .iter()
        .flat_map(|candidate| candidate.content.parts.iter())
        .map(|part| part.text.as_str())
        .collect())
}
