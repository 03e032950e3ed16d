//! Service configuration.
//!
//! Loaded from an optional YAML file, then overridden by environment
//! variables. Every field has a default, so an empty file is valid.
//!
//! # Example YAML
//!
//! ```yaml
//! server:
//!   host: "127.0.0.1"
//!   port: 9000
//! lexicon:
//!   extra_words:
//!     cozy: 0.6
//!     meh: -0.2
//! responses:
//!   fallback: "Be gentle with yourself."
//! ```
//!
//! # Environment Variables
//!
//! - `MOOD_CONFIG` — path of the YAML file (optional)
//! - `HOST` — overrides `server.host`
//! - `PORT` — overrides `server.port`

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lexicon::LexiconAnalyzer;
use crate::responses::ResponseCatalog;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    pub server: ServerConfig,
    pub lexicon: LexiconConfig,
    pub responses: ResponsesConfig,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Words merged over the built-in polarity lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub extra_words: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsesConfig {
    pub fallback: Option<String>,
}

impl MoodConfig {
    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// File at `$MOOD_CONFIG` (or defaults), then `HOST`/`PORT` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("MOOD_CONFIG") {
            Ok(path) if !path.trim().is_empty() => {
                log::info!("loading configuration from {}", path);
                Self::from_yaml_file(path.trim())?
            }
            _ => Self::default(),
        };
        config.apply_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())?;
        Ok(config)
    }

    /// Apply host/port overrides given as raw strings.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT '{}' is not a valid port", port)))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        for (word, polarity) in &self.lexicon.extra_words {
            if !polarity.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "lexicon word '{}' has non-finite polarity",
                    word
                )));
            }
        }
        Ok(())
    }

    /// The built-in lexicon extended with `lexicon.extra_words`.
    pub fn build_analyzer(&self) -> LexiconAnalyzer {
        LexiconAnalyzer::default().with_words(&self.lexicon.extra_words)
    }

    /// The suggestion catalog with the configured fallback, if any.
    pub fn build_catalog(&self) -> ResponseCatalog {
        match &self.responses.fallback {
            Some(fallback) => ResponseCatalog::with_fallback(fallback.clone()),
            None => ResponseCatalog::default(),
        }
    }
}
