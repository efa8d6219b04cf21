//! # image-provider-cache
//!
//! 图像提供者的旁路缓存层：先查缓存，未命中时调用底层提供者并回写结果。
//!
//! Cache-aside layer for image providers: a request for a source and its
//! processing parameters is answered from a cache when possible, and
//! otherwise delegated to an underlying provider whose result is written
//! back for later requests.
//!
//! ## Overview
//!
//! - **Pluggable keys**: cache keys come from a [`cache::KeyGenerator`]
//!   strategy; the default hashes the source with pooled SHA-256 accumulators
//! - **Composable namespaces**: [`cache::PrefixKeyGenerator`] wraps any
//!   generator, to any depth
//! - **Transparent failures**: provider and cache write errors always reach
//!   the caller; a failed cache read is handled as a miss
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use image_provider_cache::cache::{CachedProvider, MemoryCache};
//! use image_provider_cache::provider::{Provider, ProviderFunc};
//! use image_provider_cache::types::{Image, Parameters, Source};
//!
//! #[tokio::main]
//! async fn main() -> image_provider_cache::Result<()> {
//!     let origin = ProviderFunc::new(|source: &Source, _: &Parameters| {
//!         let data = std::fs::read(source.to_string())?;
//!         Ok(Image::new("png", data))
//!     });
//!     let cached = CachedProvider::builder(origin, MemoryCache::new()).build()?;
//!
//!     let image = cached
//!         .get(&Source::from("images/cat.png"), &Parameters::new())
//!         .await?;
//!     println!("{}", image);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Source, parameters and image values |
//! | [`provider`] | Provider trait and closure adapter |
//! | [`cache`] | Cache backends, key generation and the cached provider |
//! | [`error`] | Unified error type |

pub mod cache;
pub mod error;
pub mod provider;
pub mod types;

pub use cache::{Cache, CacheConfig, CachedProvider, KeyGenerator};
pub use error::{Error, ErrorContext};
pub use provider::Provider;
pub use types::{Image, Parameters, Source};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
