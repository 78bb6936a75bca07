//! Language model client used for build recommendations.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Sends a prompt to a language model and returns its raw reply.
#[automock]
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Completes `prompt`. `None` when the model produced no content.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, RecommenderError>;
}

/// Configuration for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// API base URL, e.g. `"https://api.openai.com/v1"`.
    pub base_url: String,

    /// Bearer token, when the endpoint requires one.
    pub api_key: Option<String>,

    /// Model name sent with every request.
    pub model: String,
}

/// HTTP client for chat completions.
#[derive(Debug, Clone)]
pub struct ChatCompletionsRecommender {
    config: RecommenderConfig,
    http: Client,
}

impl ChatCompletionsRecommender {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Recommender for ChatCompletionsRecommender {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, RecommenderError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut request = self.http.post(&url).json(&body);

        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(RecommenderError::UnexpectedResponse(format!(
                "completion request failed with status {status}: {text}"
            )));
        }

        let parsed: ChatResponse = response.json().await?;

        debug!(choices = parsed.choices.len(), "received completion");

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

/// Recommender used when no language model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRecommender;

#[async_trait]
impl Recommender for DisabledRecommender {
    async fn complete(&self, _prompt: &str) -> Result<Option<String>, RecommenderError> {
        Err(RecommenderError::NotConfigured)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Errors that can occur when asking the language model.
#[derive(Debug, Error)]
pub enum RecommenderError {
    /// No language model endpoint is configured.
    #[error("recommender is not configured")]
    NotConfigured,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx response.
    #[error("unexpected response from recommender: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn request_body_has_single_user_message() -> TestResult {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: [ChatMessage {
                role: "user",
                content: "pick parts",
            }],
        };

        assert_eq!(
            serde_json::to_value(&body)?,
            json!({
                "model": "gpt-4o-mini",
                "messages": [{ "role": "user", "content": "pick parts" }],
            })
        );

        Ok(())
    }

    #[test]
    fn response_content_may_be_null() -> TestResult {
        let parsed: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))?;

        assert!(parsed.choices.into_iter().next().and_then(|c| c.message.content).is_none());

        Ok(())
    }

    #[tokio::test]
    async fn disabled_recommender_reports_not_configured() {
        let result = DisabledRecommender.complete("prompt").await;

        assert!(matches!(result, Err(RecommenderError::NotConfigured)));
    }
}
