//! Cache backend implementations.

use crate::types::{Image, Parameters};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Image storage addressed by cache key.
///
/// `get` reports a missing entry as an error; callers of the cache-aside
/// flow do not distinguish it from a backend failure.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str, parameters: &Parameters) -> Result<Image>;
    async fn set(&self, key: &str, image: &Image, parameters: &Parameters) -> Result<()>;
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<C: Cache + ?Sized> Cache for Arc<C> {
    async fn get(&self, key: &str, parameters: &Parameters) -> Result<Image> {
        (**self).get(key, parameters).await
    }
    async fn set(&self, key: &str, image: &Image, parameters: &Parameters) -> Result<()> {
        (**self).set(key, image, parameters).await
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Unbounded in-process cache. Entries live until [`MemoryCache::clear`].
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Image>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    // Every write is a single insert or clear, so the map is consistent even
    // if a holder panicked.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Image>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Image>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str, _: &Parameters) -> Result<Image> {
        self.read()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::cache_miss(key))
    }
    async fn set(&self, key: &str, image: &Image, _: &Parameters) -> Result<()> {
        self.write().insert(key.to_string(), image.clone());
        Ok(())
    }
    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Cache that stores nothing; every lookup misses.
pub struct NullCache;
impl NullCache {
    pub fn new() -> Self {
        Self
    }
}
impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for NullCache {
    async fn get(&self, key: &str, _: &Parameters) -> Result<Image> {
        Err(Error::cache_miss(key))
    }
    async fn set(&self, _: &str, _: &Image, _: &Parameters) -> Result<()> {
        Ok(())
    }
    fn name(&self) -> &'static str {
        "null"
    }
}
