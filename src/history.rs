//! In-memory conversation history.
//!
//! A single ordered sequence of turns shared by every call to the process.
//! Unbounded by design: this backend serves one conversation at a time and
//! does not persist across restarts.

use crate::gemini::Content;
use std::sync::Mutex;

/// Mutex-guarded, append-only sequence of conversation turns.
///
/// The lock is only held for snapshot and append; never across an await.
/// Each successful chat call appends its user/model pair under one lock
/// acquisition, so the sequence always contains complete pairs in turn order.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    turns: Mutex<Vec<Content>>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current turns, for building the next request.
    pub fn snapshot(&self) -> Vec<Content> {
        self.turns.lock().unwrap().clone()
    }

    /// Append one completed exchange, user turn strictly before model turn.
    pub fn append_exchange(&self, user: Content, model: Content) {
        let mut turns = self.turns.lock().unwrap();
        turns.push(user);
        turns.push(model);
    }

    pub fn len(&self) -> usize {
        self.turns.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
