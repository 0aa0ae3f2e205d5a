use crate::core::client::OllamaClient;
use crate::core::extractor::has_fenced_block;
use crate::core::{
    ConfigProvider, Delivery, ExtractedOutput, InferenceReply, Pipeline, PromptRequest, Storage,
};
use crate::utils::error::Result;

pub struct PromptizerPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: OllamaClient,
}

impl<S: Storage, C: ConfigProvider> PromptizerPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = OllamaClient::new(config.endpoint(), config.timeout())?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PromptizerPipeline<S, C> {
    async fn extract(&self, request: &PromptRequest) -> Result<InferenceReply> {
        self.client
            .get_reply(&request.user_prompt, &request.model_name)
            .await
    }

    async fn transform(&self, reply: InferenceReply) -> Result<ExtractedOutput> {
        let text = reply.text()?;

        if self.config.raw_output() {
            tracing::debug!("Raw output requested, skipping fence extraction");
            return Ok(ExtractedOutput {
                xml_text: text.to_string(),
            });
        }

        if has_fenced_block(text) {
            tracing::debug!("Reply wraps its XML in a fenced block, unwrapping");
        }

        Ok(ExtractedOutput::from_raw(text))
    }

    async fn load(&self, output: ExtractedOutput) -> Result<Delivery> {
        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing {} bytes to {}", output.xml_text.len(), path);
                self.storage
                    .write_file(path, output.xml_text.as_bytes())
                    .await?;
                Ok(Delivery::Saved {
                    path: path.to_string(),
                })
            }
            None => Ok(Delivery::Inline {
                xml_text: output.xml_text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PromptizerError;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        endpoint: String,
        output_path: Option<String>,
        raw_output: bool,
    }

    impl MockConfig {
        fn new(endpoint: String) -> Self {
            Self {
                endpoint,
                output_path: None,
                raw_output: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn model(&self) -> &str {
            "gemma3:4b"
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }

        fn timeout(&self) -> Option<Duration> {
            None
        }

        fn raw_output(&self) -> bool {
            self.raw_output
        }
    }

    fn reply(text: Option<&str>) -> InferenceReply {
        InferenceReply {
            response: text.map(str::to_string),
            model: None,
            created_at: None,
            done: Some(true),
            extra: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn test_extract_calls_backend_with_request_model() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .json_body_partial(r#"{"model": "llama3.2", "stream": false}"#);
            then.status(200)
                .json_body(serde_json::json!({"response": "```xml\n<a/>\n```"}));
        });

        let config = MockConfig::new(server.url("/api/generate"));
        let pipeline = PromptizerPipeline::new(MockStorage::new(), config).unwrap();

        let reply = pipeline
            .extract(&PromptRequest::new("anything", "llama3.2"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(reply.text().unwrap(), "```xml\n<a/>\n```");
    }

    #[tokio::test]
    async fn test_transform_unwraps_fenced_block() {
        let pipeline = PromptizerPipeline::new(
            MockStorage::new(),
            MockConfig::new("http://localhost:11434/api/generate".to_string()),
        )
        .unwrap();

        let output = pipeline
            .transform(reply(Some("Sure!\n```xml\n<context/>\n```")))
            .await
            .unwrap();

        assert_eq!(output.xml_text, "<context/>");
    }

    #[tokio::test]
    async fn test_transform_raw_output_keeps_reply() {
        let mut config = MockConfig::new("http://localhost:11434/api/generate".to_string());
        config.raw_output = true;
        let pipeline = PromptizerPipeline::new(MockStorage::new(), config).unwrap();

        let raw = "Sure!\n```xml\n<context/>\n```";
        let output = pipeline.transform(reply(Some(raw))).await.unwrap();

        assert_eq!(output.xml_text, raw);
    }

    #[tokio::test]
    async fn test_transform_missing_response_is_malformed() {
        let pipeline = PromptizerPipeline::new(
            MockStorage::new(),
            MockConfig::new("http://localhost:11434/api/generate".to_string()),
        )
        .unwrap();

        let result = pipeline.transform(reply(None)).await;

        assert!(matches!(result, Err(PromptizerError::MalformedReply)));
    }

    #[tokio::test]
    async fn test_load_inline_without_output_path() {
        let storage = MockStorage::new();
        let pipeline = PromptizerPipeline::new(
            storage.clone(),
            MockConfig::new("http://localhost:11434/api/generate".to_string()),
        )
        .unwrap();

        let delivery = pipeline
            .load(ExtractedOutput {
                xml_text: "<a/>".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            delivery,
            Delivery::Inline {
                xml_text: "<a/>".to_string()
            }
        );
        assert!(storage.files.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_writes_to_storage() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new("http://localhost:11434/api/generate".to_string());
        config.output_path = Some("prompt.xml".to_string());
        let pipeline = PromptizerPipeline::new(storage.clone(), config).unwrap();

        let delivery = pipeline
            .load(ExtractedOutput {
                xml_text: "<task_instructions/>".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            delivery,
            Delivery::Saved {
                path: "prompt.xml".to_string()
            }
        );
        assert_eq!(
            storage.get_file("prompt.xml").await.unwrap(),
            b"<task_instructions/>".to_vec()
        );
    }
}
