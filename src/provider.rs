//! 图像提供者接口：按来源与参数获取图像。
//!
//! # Provider Module
//!
//! A [`Provider`] retrieves (and possibly processes) an image for a
//! [`Source`] and a set of [`Parameters`]. Providers are stacked: the
//! caching layer in [`crate::cache`] is itself a provider wrapping another.

use crate::types::{Image, Parameters, Source};
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Provider: Send + Sync {
    async fn get(&self, source: &Source, parameters: &Parameters) -> Result<Image>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Arc<P> {
    async fn get(&self, source: &Source, parameters: &Parameters) -> Result<Image> {
        (**self).get(source, parameters).await
    }
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Box<P> {
    async fn get(&self, source: &Source, parameters: &Parameters) -> Result<Image> {
        (**self).get(source, parameters).await
    }
}

/// Adapts a synchronous closure into a [`Provider`].
pub struct ProviderFunc<F>(F);

impl<F> ProviderFunc<F>
where
    F: Fn(&Source, &Parameters) -> Result<Image> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> Provider for ProviderFunc<F>
where
    F: Fn(&Source, &Parameters) -> Result<Image> + Send + Sync,
{
    async fn get(&self, source: &Source, parameters: &Parameters) -> Result<Image> {
        (self.0)(source, parameters)
    }
}
