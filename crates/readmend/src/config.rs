//! Project configuration file support for readmend.
//!
//! Loads configuration from `readmend.toml` in the repository directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Project-level configuration loaded from `readmend.toml`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Default model name (e.g. "llama3")
    pub model: Option<String>,
    /// Ollama base URL
    pub ollama_url: Option<String>,
    /// Retry budget for the enhance command
    pub max_attempts: Option<usize>,
}

/// The config file name
pub const CONFIG_FILE_NAME: &str = "readmend.toml";

impl ProjectConfig {
    /// Load configuration from the repository directory.
    ///
    /// Returns:
    /// - `Ok(Some(config))` if file exists and parses successfully
    /// - `Ok(None)` if file does not exist
    /// - `Err(...)` if file exists but fails to parse (hard error)
    pub fn load(repo_dir: &Path) -> Result<Option<Self>> {
        let config_path = repo_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }
}
