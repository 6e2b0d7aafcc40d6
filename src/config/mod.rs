mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const API_KEY_VAR: &str = "API_KEY";

/// Loads `$CONFIG_PATH` (default `config.yaml`) and applies `API_KEY`.
pub async fn load() -> Result<Config> {
    let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.yaml".to_string());
    let api_key = env::var(API_KEY_VAR).ok();

    load_from(&config_path, api_key).await
}

/// A missing file falls back to defaults; a present but malformed file is an error.
pub async fn load_from(config_path: impl AsRef<Path>, api_key: Option<String>) -> Result<Config> {
    let config_path = config_path.as_ref();

    let mut config = if tokio::fs::try_exists(config_path).await? {
        debug!("Loading configuration from: {}", config_path.display());
        let config_str = tokio::fs::read_to_string(config_path).await?;
        serde_yaml::from_str::<Config>(&config_str)?
    } else {
        debug!(
            "No configuration file at {}, using defaults",
            config_path.display()
        );
        Config::default()
    };

    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = key;
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "missing API key: set the {API_KEY_VAR} environment variable"
        )));
    }

    Ok(config)
}
