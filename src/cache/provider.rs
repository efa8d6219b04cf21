//! Cache-aside provider.

use super::backend::Cache;
use super::config::CacheConfig;
use super::key::{
    JoinKeyGenerator, KeyGenerator, ParametersHashKeyGenerator, PrefixKeyGenerator,
    SourceHashKeyGenerator,
};
use crate::provider::Provider;
use crate::types::{Image, Parameters, Source};
use crate::Result;
use async_trait::async_trait;
use sha2::Sha256;
use tracing::{debug, warn};

/// Wraps a [`Provider`] with a [`Cache`].
///
/// A lookup that fails for any reason is treated as a miss. On a miss the
/// inner provider is called and its image stored before being returned;
/// a failed store fails the whole call. Nothing is retried, and concurrent
/// misses on the same key each reach the inner provider.
pub struct CachedProvider<P, C, K = Box<dyn KeyGenerator>> {
    provider: P,
    cache: C,
    key_generator: K,
}

impl<P, C, K> CachedProvider<P, C, K>
where
    P: Provider,
    C: Cache,
    K: KeyGenerator,
{
    pub fn new(provider: P, cache: C, key_generator: K) -> Self {
        Self {
            provider,
            cache,
            key_generator,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn key_generator(&self) -> &K {
        &self.key_generator
    }
}

impl<P, C> CachedProvider<P, C>
where
    P: Provider,
    C: Cache,
{
    pub fn builder(provider: P, cache: C) -> CachedProviderBuilder<P, C> {
        CachedProviderBuilder::new(provider, cache)
    }
}

#[async_trait]
impl<P, C, K> Provider for CachedProvider<P, C, K>
where
    P: Provider,
    C: Cache,
    K: KeyGenerator,
{
    async fn get(&self, source: &Source, parameters: &Parameters) -> Result<Image> {
        let key = self.key_generator.key(source, parameters);

        match self.cache.get(&key, parameters).await {
            Ok(image) => {
                debug!(key = key.as_str(), cache = self.cache.name(), "cache hit");
                return Ok(image);
            }
            Err(e) if e.is_cache_miss() => {
                debug!(key = key.as_str(), cache = self.cache.name(), "cache miss");
            }
            Err(e) => {
                warn!(
                    key = key.as_str(),
                    cache = self.cache.name(),
                    error = %e,
                    "cache lookup failed, falling back to provider"
                );
            }
        }

        let image = self.provider.get(source, parameters).await?;
        self.cache.set(&key, &image, parameters).await?;
        debug!(
            key = key.as_str(),
            cache = self.cache.name(),
            bytes = image.len(),
            "cached image"
        );
        Ok(image)
    }
}

/// Assembles a [`CachedProvider`] from a [`CacheConfig`].
pub struct CachedProviderBuilder<P, C> {
    provider: P,
    cache: C,
    config: CacheConfig,
    key_generator: Option<Box<dyn KeyGenerator>>,
}

impl<P, C> CachedProviderBuilder<P, C>
where
    P: Provider,
    C: Cache,
{
    pub fn new(provider: P, cache: C) -> Self {
        Self {
            provider,
            cache,
            config: CacheConfig::default(),
            key_generator: None,
        }
    }

    pub fn with_config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.key_prefix = Some(prefix.into());
        self
    }

    /// Replace the hash-based default. The configured prefix still applies.
    pub fn with_key_generator(mut self, generator: impl KeyGenerator + 'static) -> Self {
        self.key_generator = Some(Box::new(generator));
        self
    }

    pub fn build(self) -> Result<CachedProvider<P, C>> {
        self.config.validate()?;

        let pool_size = self.config.hasher_pool_size;
        let base: Box<dyn KeyGenerator> = match self.key_generator {
            Some(generator) => generator,
            None if self.config.hash_parameters => Box::new(
                JoinKeyGenerator::default()
                    .with(SourceHashKeyGenerator::<Sha256>::with_pool_size(pool_size))
                    .with(ParametersHashKeyGenerator::<Sha256>::with_pool_size(pool_size)),
            ),
            None => Box::new(SourceHashKeyGenerator::<Sha256>::with_pool_size(pool_size)),
        };
        let key_generator: Box<dyn KeyGenerator> = match self.config.key_prefix {
            Some(prefix) => Box::new(PrefixKeyGenerator::new(prefix, base)),
            None => base,
        };

        Ok(CachedProvider::new(self.provider, self.cache, key_generator))
    }
}
