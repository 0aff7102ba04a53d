use super::types::{GenerateContentRequest, GenerateContentResponse};
use super::GenerateService;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Reqwest-backed Gemini REST client.
///
/// Posts to `<base_url><model>:generateContent?key=<api_key>`, so `base_url`
/// is expected to end with the `models/` path segment.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self::new_with_client(api_key, model, base_url, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        base_url: String,
        client: Client,
    ) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerateService for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let response = self
            .client
            .post(self.url())
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::Api(format!(
                "Gemini API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::Parse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-2.5-flash";

    fn make_client(server: &MockServer, api_key: &str) -> GeminiClient {
        GeminiClient::new(
            api_key.to_string(),
            MODEL.to_string(),
            format!("{}/v1beta/models/", server.uri()),
        )
    }

    #[tokio::test]
    async fn test_generate_content_posts_to_model_endpoint_with_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "hi!" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");
        let request = GenerateContentRequest::new("hello", &[], "be brief");

        let response = client.generate_content(&request).await.unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].content.parts[0].text, "hi!");
    }

    #[tokio::test]
    async fn test_non_2xx_status_returns_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"error": "API key is invalid"}"#),
            )
            .mount(&server)
            .await;

        let client = make_client(&server, "bad-key");
        let request = GenerateContentRequest::new("hello", &[], "be brief");

        let err = client.generate_content(&request).await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");
        let request = GenerateContentRequest::new("hello", &[], "be brief");

        let err = client.generate_content(&request).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn test_candidate_missing_content_returns_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "candidates": [{}] })),
            )
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");
        let request = GenerateContentRequest::new("hello", &[], "be brief");

        let err = client.generate_content(&request).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
