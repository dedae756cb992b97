use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while exercising the catalog.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("No prototype registered with name: {0}")]
    UnknownPrototype(String),

    #[error("Invalid value for attribute '{name}': expected {expected}")]
    InvalidAttribute { name: String, expected: &'static str },

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Unknown GUI platform: '{0}'")]
    UnknownPlatform(String),

    #[error("Unknown notification channel: '{0}'")]
    UnknownChannel(String),

    #[error("Exchange rate for {currency} must be a positive number, got {rate}")]
    InvalidRate { currency: String, rate: f64 },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PatternError {
    pub fn invalid_attribute(name: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            expected,
        }
    }

    pub fn invalid_rate(currency: impl Into<String>, rate: f64) -> Self {
        Self::InvalidRate {
            currency: currency.into(),
            rate,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
