use clap::Parser;
use promptizer::core::{client::generate_request, engine::ensure_prompt};
use promptizer::utils::{logger, validation::Validate};
use promptizer::{
    CliConfig, ConfigProvider, Delivery, LocalStorage, PromptRequest, PromptizerEngine,
    PromptizerError, PromptizerPipeline, TomlConfig,
};

fn exit_with(e: &PromptizerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(config) => Some(config),
                Err(e) => exit_with(&e),
            }
        }
        None => None,
    };

    let settings = cli.settings(file_config.as_ref());
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    let request = PromptRequest::new(cli.prompt.clone(), settings.model());

    if cli.dry_run {
        if let Err(e) = ensure_prompt(&request) {
            exit_with(&e);
        }
        tracing::info!("🔍 DRY RUN MODE - the backend will not be called");
        let body = generate_request(&request.user_prompt, &request.model_name);
        println!("POST {}", settings.endpoint());
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = match PromptizerPipeline::new(storage, settings) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(&e),
    };
    let engine = PromptizerEngine::new(pipeline);

    match engine.run(&request).await {
        Ok(Delivery::Saved { path }) => {
            println!("XML prompt saved to {}", path);
        }
        Ok(Delivery::Inline { xml_text }) => {
            println!("=== Generated XML Prompt ===");
            println!("{}", xml_text);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
