//! Client configuration
//!
//! Loaded from a TOML file (`chatbot.toml`) with environment overrides:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [session]
//! storage_key = "chatbot_token"
//! ```
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `CHATBOT_API_BASE` | `api.base_url` |
//! | `CHATBOT_STORAGE_KEY` | `session.storage_key` |

use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

// ============= API Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

// ============= Session Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key the token is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "chatbot_token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(std::path::PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ClientConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: ClientConfig = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        dotenvy::dotenv().ok();

        let content = std::fs::read_to_string(path)?;
        let mut config: ClientConfig = toml::from_str(&content)?;
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.normalize();
        config.validate()?;

        tracing::info!("Loaded client configuration from {}", path.display());
        Ok(config)
    }

    /// Override fields from variables supplied by `lookup`
    ///
    /// Taking a lookup function keeps this usable from the browser, where the
    /// values come from `option_env!` at build time.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup("CHATBOT_API_BASE").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = base;
        }
        if let Some(key) = lookup("CHATBOT_STORAGE_KEY").filter(|v| !v.trim().is_empty()) {
            self.session.storage_key = key;
        }
    }

    fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim().trim_end_matches('/').to_string();
        self.api.base_url = trimmed;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.api.base_url;
        if base.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                base
            )));
        }
        if self.session.storage_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "session.storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
