use anyhow::Result;
use mercado_assistant::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: its log level seeds the subscriber
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match logging::env_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let effective_filter = filter.to_string();
    logging::init(filter);

    info!(
        filter = %effective_filter,
        model = %config.llm.model,
        "Mercado Clone assistant starting"
    );

    server::run(config).await?;

    Ok(())
}
