mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file named by `CONFIG_PATH`, or `config.yaml` when
/// present, then applies environment overrides.
///
/// Without any file the built-in defaults are used unchanged.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_file(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_env_overrides(|name| env::var(name).ok())?;
    config.validate()?;

    Ok(config)
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl Config {
    /// Overrides selected fields from the environment. `lookup` is injected so
    /// tests do not touch the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bucket) = lookup("DOCUMENT_BUCKET") {
            self.storage.bucket = bucket;
        }
        if let Some(key) = lookup("DOCUMENT_KEY") {
            self.storage.key = key;
        }
        if let Some(model_id) = lookup("BEDROCK_MODEL_ID") {
            self.inference.model_id = model_id;
        }
        if let Some(region) = lookup("BEDROCK_REGION") {
            self.inference.region = region;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("PORT is not a valid port: '{}'", port)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.bucket.trim().is_empty() {
            return Err(Error::config("storage.bucket must not be empty"));
        }
        if self.storage.key.trim().is_empty() {
            return Err(Error::config("storage.key must not be empty"));
        }
        if self.storage.backend == StorageBackend::Local && self.storage.local_root.is_none() {
            return Err(Error::config(
                "storage.local_root is required for the local backend",
            ));
        }
        if self.server.max_body_bytes == Some(0) {
            return Err(Error::config("server.max_body_bytes must be positive"));
        }
        if self.inference.model_id.trim().is_empty() {
            return Err(Error::config("inference.model_id must not be empty"));
        }
        if self.inference.max_attempts == 0 {
            return Err(Error::config("inference.max_attempts must be at least 1"));
        }

        let generation = &self.inference.generation;
        if generation.max_tokens == 0 {
            return Err(Error::config("inference.generation.max_tokens must be positive"));
        }
        if !(0.0..=1.0).contains(&generation.temperature) {
            return Err(Error::config(
                "inference.generation.temperature must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(Error::config("inference.generation.top_p must be within [0, 1]"));
        }

        self.server
            .logs
            .level
            .parse::<tracing_subscriber::filter::LevelFilter>()
            .map_err(|_| {
                Error::config(format!(
                    "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                    self.server.logs.level
                ))
            })?;

        Ok(())
    }
}
