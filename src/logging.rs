use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Picks the log filter: a `RUST_LOG` directive string wins when present,
/// otherwise the configured level. Only the configured level must be a bare
/// level name; `RUST_LOG` may carry per-target directives.
pub fn env_filter(rust_log: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    config_level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "invalid log level '{config_level}'. Valid levels: error, warn, info, debug, trace"
        ))
    })?;

    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| Error::config(format!("invalid RUST_LOG '{directives}': {e}"))),
        None => Ok(EnvFilter::new(config_level)),
    }
}

/// Installs the JSON subscriber for the process.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();
}
