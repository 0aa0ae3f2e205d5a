use crate::core::{Delivery, Pipeline, PromptRequest};
use crate::utils::error::{PromptizerError, Result};

/// The empty check lives here rather than in the client: the client accepts any string.
pub fn ensure_prompt(request: &PromptRequest) -> Result<()> {
    if request.user_prompt.is_empty() {
        return Err(PromptizerError::EmptyPrompt);
    }
    Ok(())
}

pub struct PromptizerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PromptizerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, request: &PromptRequest) -> Result<Delivery> {
        if let Err(e) = ensure_prompt(request) {
            tracing::warn!("Refusing to call the backend: {}", e);
            return Err(e);
        }

        tracing::info!(
            "Converting prompt to XML format using {}...",
            request.model_name
        );
        tracing::info!("Original prompt: {}", request.user_prompt);

        tracing::info!("Generating XML prompt...");
        let reply = self.pipeline.extract(request).await?;

        let output = self.pipeline.transform(reply).await?;
        tracing::debug!("Extracted {} bytes of XML", output.xml_text.len());

        let delivery = self.pipeline.load(output).await?;
        if let Delivery::Saved { path } = &delivery {
            tracing::info!("XML prompt saved to {}", path);
        }

        Ok(delivery)
    }
}
