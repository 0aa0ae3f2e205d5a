use crate::core::template::build_prompt;
use crate::domain::model::{GenerateRequest, InferenceReply};
use crate::utils::error::{PromptizerError, Result};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "gemma3:4b";

/// Talks to the Ollama `/api/generate` endpoint. One call is one POST; nothing is retried.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: String,
}

impl OllamaClient {
    /// `timeout` of `None` leaves reqwest's default in place.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| PromptizerError::RequestFailed {
            cause: format!("HTTP client error: {}", e),
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get_reply(&self, user_prompt: &str, model: &str) -> Result<InferenceReply> {
        let body = generate_request(user_prompt, model);

        tracing::debug!(
            "POST {} (model: {}, prompt: {} bytes)",
            self.endpoint,
            body.model,
            body.prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        tracing::debug!("Backend response status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail = detail.trim();
            let cause = if detail.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, detail)
            };
            tracing::warn!("Backend returned an error status: {}", cause);
            return Err(PromptizerError::RequestFailed { cause });
        }

        let text = response.text().await.map_err(|e| self.classify(e))?;
        serde_json::from_str::<InferenceReply>(&text).map_err(|e| {
            tracing::warn!("Backend reply is not valid JSON: {}", e);
            PromptizerError::RequestFailed {
                cause: format!("Invalid JSON in backend reply: {}", e),
            }
        })
    }

    fn classify(&self, err: reqwest::Error) -> PromptizerError {
        if err.is_connect() {
            tracing::warn!("Could not connect to {}: {}", self.endpoint, err);
            PromptizerError::BackendUnreachable {
                endpoint: self.endpoint.clone(),
            }
        } else if err.is_timeout() {
            PromptizerError::RequestFailed {
                cause: format!("Request timed out: {}", err),
            }
        } else {
            PromptizerError::RequestFailed {
                cause: err.to_string(),
            }
        }
    }
}

pub fn generate_request(user_prompt: &str, model: &str) -> GenerateRequest {
    GenerateRequest {
        model: model.to_string(),
        prompt: build_prompt(user_prompt),
        stream: false,
    }
}

/// One-shot call against the default local endpoint.
pub async fn get_reply(user_prompt: &str, model: &str) -> Result<InferenceReply> {
    OllamaClient::new(DEFAULT_ENDPOINT, None)?
        .get_reply(user_prompt, model)
        .await
}
