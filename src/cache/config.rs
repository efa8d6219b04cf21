//! Cache configuration.

use super::pool::DEFAULT_MAX_IDLE;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings used by [`CachedProviderBuilder`](super::CachedProviderBuilder)
/// to assemble the default key generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Namespace prepended to every key (e.g. "v2:" or "tenant-a/").
    pub key_prefix: Option<String>,
    /// Also hash the parameters so each variant of a source gets its own key.
    pub hash_parameters: bool,
    /// Idle hash accumulators kept for reuse.
    pub hasher_pool_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key_prefix: None,
            hash_parameters: false,
            hasher_pool_size: DEFAULT_MAX_IDLE,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    pub fn with_hash_parameters(mut self, enabled: bool) -> Self {
        self.hash_parameters = enabled;
        self
    }

    pub fn with_hasher_pool_size(mut self, size: usize) -> Self {
        self.hasher_pool_size = size;
        self
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, or YAML for any other extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.hasher_pool_size == 0 {
            return Err(Error::configuration_with_context(
                "hasher pool size must be at least 1",
                ErrorContext::new()
                    .field("cache.hasher_pool_size")
                    .component("cache_config"),
            ));
        }
        Ok(())
    }
}
