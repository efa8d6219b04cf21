//! 缓存模块：为图像提供者增加旁路缓存（cache-aside）与缓存键生成。
//!
//! # Image Caching Module
//!
//! This module puts a cache in front of any [`Provider`](crate::provider::Provider):
//! a request is answered from the cache when possible, and otherwise handed to
//! the inner provider whose result is then written back.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CachedProvider`] | Cache-aside wrapper around a provider |
//! | [`CachedProviderBuilder`] | Assembles a cached provider from a [`CacheConfig`] |
//! | [`Cache`] | Trait for implementing cache backends |
//! | [`MemoryCache`] | Unbounded in-memory backend |
//! | [`NullCache`] | No-op backend for disabling caching |
//! | [`KeyGenerator`] | Strategy mapping a request to its cache key |
//! | [`HasherPool`] | Reusable hash accumulators for key derivation |
//!
//! ## Example
//!
//! ```rust
//! use image_provider_cache::cache::{CacheConfig, CachedProvider, MemoryCache};
//! use image_provider_cache::provider::{Provider, ProviderFunc};
//! use image_provider_cache::types::{Image, Parameters, Source};
//!
//! # tokio_test::block_on(async {
//! let origin = ProviderFunc::new(|_: &Source, _: &Parameters| {
//!     Ok(Image::new("png", vec![0x89u8, 0x50, 0x4e, 0x47]))
//! });
//! let cached = CachedProvider::builder(origin, MemoryCache::new())
//!     .with_config(CacheConfig::new().with_key_prefix("thumbs:"))
//!     .build()?;
//!
//! let params = Parameters::new().with("width", 200);
//! let image = cached.get(&Source::from("cat.png"), &params).await?;
//! assert_eq!(image.format, "png");
//! assert_eq!(cached.cache().len(), 1);
//! # Ok::<(), image_provider_cache::Error>(())
//! # }).unwrap();
//! ```
//!
//! ## Cache Key Generation
//!
//! The default key is the SHA-256 hex digest of the source's display form,
//! so every parameter variant of a source shares one entry. Enable
//! [`CacheConfig::hash_parameters`] (or compose a [`JoinKeyGenerator`]) to
//! give each variant its own key, and use [`PrefixKeyGenerator`] to
//! namespace keys by tenant or schema version.

mod backend;
mod config;
mod key;
mod pool;
mod provider;

pub use backend::{Cache, MemoryCache, NullCache};
pub use config::CacheConfig;
pub use key::{
    JoinKeyGenerator, KeyGenerator, KeyGeneratorFunc, ParametersHashKeyGenerator,
    PrefixKeyGenerator, SourceHashKeyGenerator,
};
pub use pool::{HasherPool, PooledHasher, DEFAULT_MAX_IDLE};
pub use provider::{CachedProvider, CachedProviderBuilder};
