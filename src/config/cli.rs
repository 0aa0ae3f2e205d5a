use crate::config::settings::Settings;
use crate::config::toml_config::TomlConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "promptizer")]
#[command(
    about = "Convert simple text prompts into XML-formatted prompts using a local Ollama model"
)]
#[command(
    after_help = "Example usage:\n  promptizer \"Analyze customer reviews and extract sentiment\""
)]
pub struct CliConfig {
    /// The simple text prompt to convert to XML format
    pub prompt: String,

    /// Ollama model to use (default: gemma3:4b)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output file to save the XML prompt (optional)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate endpoint of the Ollama server
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Give up on the backend after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep the model reply as-is instead of unwrapping fenced XML
    #[arg(long)]
    pub raw: bool,

    /// Print the request that would be sent without calling the backend
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn settings(&self, file: Option<&TomlConfig>) -> Settings {
        let mut settings = match file {
            Some(file) => Settings::default().with_file(file),
            None => Settings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = Some(output.clone());
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = Some(timeout);
        }
        if self.raw {
            settings.raw_output = true;
        }
        settings
    }
}
