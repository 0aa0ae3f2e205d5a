pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{settings::Settings, storage::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{
    client::{get_reply, OllamaClient},
    engine::PromptizerEngine,
    extractor::extract_xml,
    pipeline::PromptizerPipeline,
};
pub use crate::domain::model::{Delivery, ExtractedOutput, InferenceReply, PromptRequest};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{PromptizerError, Result};
