use crate::domain::model::{Delivery, ExtractedOutput, InferenceReply, PromptRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    /// `None` means the result is handed back inline instead of being written to a file.
    fn output_path(&self) -> Option<&str>;
    fn timeout(&self) -> Option<Duration>;
    fn raw_output(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, request: &PromptRequest) -> Result<InferenceReply>;
    async fn transform(&self, reply: InferenceReply) -> Result<ExtractedOutput>;
    async fn load(&self, output: ExtractedOutput) -> Result<Delivery>;
}
