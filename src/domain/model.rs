use crate::utils::error::{PromptizerError, Result};
use serde::{Deserialize, Serialize};

/// One conversion request as collected by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub user_prompt: String,
    pub model_name: String,
}

impl PromptRequest {
    pub fn new(user_prompt: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            model_name: model_name.into(),
        }
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Parsed body of a successful `/api/generate` call.
///
/// Only `response` matters for conversion; the remaining fields the server sends are kept in
/// `extra` so nothing in the reply is silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl InferenceReply {
    pub fn text(&self) -> Result<&str> {
        self.response
            .as_deref()
            .ok_or(PromptizerError::MalformedReply)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedOutput {
    pub xml_text: String,
}

/// What the load stage did with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Saved { path: String },
    Inline { xml_text: String },
}
