//! Error types for the storefront controller.

use shopfront_cache::CacheError;
use shopfront_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur while building or driving the storefront.
#[derive(Error, Debug)]
pub enum InteractError {
    /// Configuration could not be parsed or is out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage adapter error.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// Cart or money error.
    #[error("Commerce error: {0}")]
    Commerce(#[from] CommerceError),
}

impl From<serde_json::Error> for InteractError {
    fn from(e: serde_json::Error) -> Self {
        InteractError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for InteractError {
    fn from(e: toml::de::Error) -> Self {
        InteractError::Config(e.to_string())
    }
}
