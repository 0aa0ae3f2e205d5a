pub mod client;
pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod template;

pub use crate::domain::model::{
    Delivery, ExtractedOutput, GenerateRequest, InferenceReply, PromptRequest,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
