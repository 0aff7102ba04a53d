//! Gemini wire types shared by the client and the chat orchestrator.

use serde::{Deserialize, Serialize};

/// Smallest unit of message content. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Gemini content container used in both requests and responses.
///
/// `role` is `"user"` or `"model"` for conversation turns and absent for the
/// system instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self::turn(Some("user".to_string()), text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::turn(Some("model".to_string()), text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::turn(None, text)
    }

    fn turn(role: Option<String>, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Body of a `generateContent` call.
///
/// Serializes `system_instruction` in snake case, which is what the API
/// expects despite the rest of its surface using camel case.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    /// Build the outbound request for one chat turn: a copy of the history
    /// with the new user turn appended, plus the system instruction.
    ///
    /// The supplied history is not mutated; emptiness validation of the
    /// message happens earlier, at the orchestrator boundary.
    pub fn new(user_message: &str, history: &[Content], system_prompt: &str) -> Self {
        let mut contents = history.to_vec();
        contents.push(Content::user(user_message));

        Self {
            contents,
            system_instruction: Content::system(system_prompt),
        }
    }
}

/// Top-level `generateContent` response envelope.
///
/// An absent `candidates` array is the same no-answer case as an empty one,
/// so it defaults instead of failing deserialization. A candidate missing
/// `content` or `parts` is a structural error and does fail.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}
