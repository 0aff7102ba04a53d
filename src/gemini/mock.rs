use super::types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse};
use super::GenerateService;
use crate::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the Gemini client.
///
/// Queued outcomes are consumed in order; once the queue is empty a canned
/// single-candidate reply is returned. Every request is recorded so tests can
/// assert on the outbound contents. Clones share state, so tests can keep a
/// handle after boxing one into the chat service.
#[derive(Clone)]
pub struct MockGenerateClient {
    outcomes: Arc<Mutex<VecDeque<Result<GenerateContentResponse>>>>,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl MockGenerateClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful single-candidate, single-part reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.with_response(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content::model(text),
            }],
        })
    }

    /// Queue an arbitrary response envelope.
    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a failed transport call.
    pub fn with_error(self, error: crate::Error) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests seen so far, in call order.
    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockGenerateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerateService for MockGenerateClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request.clone());

        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(GenerateContentResponse {
                candidates: vec![Candidate {
                    content: Content::model("Mock reply"),
                }],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn test_mock_returns_queued_replies_in_order() {
        let mock = MockGenerateClient::new()
            .with_reply("first")
            .with_reply("second");
        let request = GenerateContentRequest::new("hi", &[], "prompt");

        let first = mock.generate_content(&request).await.unwrap();
        assert_eq!(first.candidates[0].content.parts[0].text, "first");

        let second = mock.generate_content(&request).await.unwrap();
        assert_eq!(second.candidates[0].content.parts[0].text, "second");

        // Queue exhausted, falls back to the canned reply.
        let third = mock.generate_content(&request).await.unwrap();
        assert_eq!(third.candidates[0].content.parts[0].text, "Mock reply");
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockGenerateClient::new().with_error(Error::Api("boom".to_string()));
        let request = GenerateContentRequest::new("hi", &[], "prompt");

        assert_eq!(mock.call_count(), 0);
        mock.generate_content(&request).await.unwrap_err();

        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.requests()[0].contents[0].parts[0].text, "hi");
    }
}
