//! 数据模型模块：定义图像、来源与处理参数等核心类型。
//!
//! # Types Module
//!
//! This module defines the values that flow between callers, providers and caches.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Source`] | Opaque locator of the image to retrieve |
//! | [`Parameters`] | Processing options (e.g. resize dimensions) |
//! | [`Image`] | Immutable binary payload plus its format |
//!
//! ## Example
//!
//! ```rust
//! use image_provider_cache::types::{Image, Parameters, Source};
//!
//! let source = Source::parse_url("https://example.com/cat.png").unwrap();
//! let params = Parameters::new().with("width", 200).with("format", "webp");
//! let image = Image::new("png", vec![0x89u8, 0x50, 0x4e, 0x47]);
//!
//! assert_eq!(params.get_u64("width").unwrap(), 200);
//! assert_eq!(image.len(), 4);
//! assert!(matches!(source, Source::Url(_)));
//! assert!(matches!(Source::from("https://example.com/cat.png"), Source::Raw(_)));
//! ```

pub mod image;
pub mod parameters;
pub mod source;

pub use image::Image;
pub use parameters::Parameters;
pub use source::Source;
