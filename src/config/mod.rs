mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads `CONFIG_PATH` (or `config.yaml`) and applies environment overrides.
///
/// The default file is optional; a path named explicitly through
/// `CONFIG_PATH` must exist.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match load_from(&config_path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    config.apply_env(|key| env::var(key).ok())?;

    Ok(config)
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overrides file values with `GEMINI_API_KEY`, `GEMINI_MODEL`,
    /// `GEMINI_BASE_URL`, `HOST` and `PORT`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(api_key) = lookup("GEMINI_API_KEY") {
            self.gemini.api_key = Some(api_key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.gemini.base_url = base_url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        Ok(())
    }
}
