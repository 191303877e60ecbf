//! Application configuration
//!
//! Configuration is an optional JSON file. Every field has a default, so an
//! empty object (or no file at all) is a valid configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Runtime settings of the demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Requested UI locale (BCP 47 tag)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Title shown for destinations without a label
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_locale() -> String {
    i18n::DEFAULT_LOCALE.to_string()
}

fn default_title() -> String {
    "Default Title".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            default_title: default_title(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Read a configuration file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_slice(&bytes)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Read `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Replace the locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}
