//! Optional TOML configuration for the demo binaries.
//!
//! ```toml
//! log_filter = "info"
//!
//! [exchange_rates]
//! EUR = 0.92
//! CHF = 0.88
//! ```
//!
//! Every key is optional. Exchange rates are merged over the built-in table.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::adapter::ExchangeRates;
use crate::error::{PatternError, Result};

/// Names the config file to load, when set.
pub const CONFIG_ENV_VAR: &str = "PATTERN_CATALOG_CONFIG";

// Conversion notes from the adapter are part of the demo output.
const DEFAULT_LOG_FILTER: &str = "warn,pattern_catalog=info";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub log_filter: String,
    pub exchange_rates: ExchangeRates,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            exchange_rates: ExchangeRates::default(),
        }
    }
}

// What's actually on disk, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    log_filter: Option<String>,
    exchange_rates: BTreeMap<String, f64>,
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self {
            log_filter: raw
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            exchange_rates: ExchangeRates::with_overrides(raw.exchange_rates)?,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or fall back to defaults.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
