mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // The API key in the file is a fallback; the environment wins
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            config.provider.api_key = key;
        }
    }

    if config.provider.api_key.is_empty() {
        return Err(Error::config(
            "Provider API key is empty; set provider.api_key or GEMINI_API_KEY",
        ));
    }

    Ok(config)
}
