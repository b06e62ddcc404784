//! NaviSenpai application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Load the topic catalog (built-in or from a file)
//! 4. Answer a single `--ask` query, or start the axum API server

mod cli;

use std::sync::Arc;

use clap::Parser;
use navi_api::state::AppState;
use navi_chat::{ChatEngine, ChatRequest, KnowledgeBase};
use navi_core::config::NaviConfig;
use navi_core::types::Language;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing starts so the configured level applies.
    let config_file = args.resolve_config_path();
    let loaded = if config_file.exists() {
        Some(NaviConfig::load(&config_file))
    } else {
        None
    };
    let mut config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => NaviConfig::default(),
    };

    config.general.log_level = args.resolve_log_level(&config.general.log_level);
    config.server.port = args.resolve_port(config.server.port);
    config.server.host = args.resolve_host(&config.server.host);
    config.knowledge.path = args
        .resolve_knowledge_path(config.knowledge.path.as_deref())
        .map(|p| p.to_string_lossy().to_string());

    // Tracing. RUST_LOG wins over the configured level. Logs go to stderr
    // so `--ask` output stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting NaviSenpai v{}", env!("CARGO_PKG_VERSION"));

    match loaded {
        Some(Ok(_)) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(Err(e)) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
        None => tracing::info!(
            path = %config_file.display(),
            "No config file found, using defaults"
        ),
    }

    // Catalog. A configured catalog that fails validation aborts startup.
    let knowledge = match config.knowledge.path.as_deref() {
        Some(path) => KnowledgeBase::load(std::path::Path::new(path))?,
        None => KnowledgeBase::builtin()?,
    };
    tracing::info!(topics = knowledge.len(), "Topic catalog ready");

    let engine = ChatEngine::new(Arc::new(knowledge));

    // One-shot mode.
    if let Some(message) = args.ask.as_deref() {
        let mut request = ChatRequest::new(message)
            .with_language(Language::from_code(Some(args.lang.as_str())));
        if let Some(context) = args.context.as_deref() {
            request = request.with_context(context);
        }
        let reply = engine.find_best_answer(&request);
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    // API server.
    let server_config = config.server.clone();
    let state = AppState::new(config, engine);
    if let Err(e) = navi_api::start_server(&server_config, state).await {
        tracing::error!(error = %e, "API server failed");
        return Err(e.into());
    }

    Ok(())
}
