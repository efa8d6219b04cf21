//! Cache key generation.

use super::pool::HasherPool;
use crate::types::{Parameters, Source};
use sha2::digest::{Digest, FixedOutputReset};
use sha2::Sha256;
use std::sync::Arc;

/// Derives the cache key for a request.
///
/// Derivation is infallible and must be a pure function of its inputs.
pub trait KeyGenerator: Send + Sync {
    fn key(&self, source: &Source, parameters: &Parameters) -> String;
}

impl<K: KeyGenerator + ?Sized> KeyGenerator for Arc<K> {
    fn key(&self, source: &Source, parameters: &Parameters) -> String {
        (**self).key(source, parameters)
    }
}

impl<K: KeyGenerator + ?Sized> KeyGenerator for Box<K> {
    fn key(&self, source: &Source, parameters: &Parameters) -> String {
        (**self).key(source, parameters)
    }
}

/// Adapts a closure into a [`KeyGenerator`].
pub struct KeyGeneratorFunc<F>(F);

impl<F> KeyGeneratorFunc<F>
where
    F: Fn(&Source, &Parameters) -> String + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> KeyGenerator for KeyGeneratorFunc<F>
where
    F: Fn(&Source, &Parameters) -> String + Send + Sync,
{
    fn key(&self, source: &Source, parameters: &Parameters) -> String {
        (self.0)(source, parameters)
    }
}

/// Hex digest of the source's display form. Parameters are ignored.
pub struct SourceHashKeyGenerator<D = Sha256>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    pool: HasherPool<D>,
}

impl<D> SourceHashKeyGenerator<D>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    pub fn new() -> Self {
        Self {
            pool: HasherPool::new(),
        }
    }

    pub fn with_pool_size(max_idle: usize) -> Self {
        Self {
            pool: HasherPool::with_max_idle(max_idle),
        }
    }

    pub fn pool(&self) -> &HasherPool<D> {
        &self.pool
    }
}

impl<D> Default for SourceHashKeyGenerator<D>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D> KeyGenerator for SourceHashKeyGenerator<D>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    fn key(&self, source: &Source, _parameters: &Parameters) -> String {
        let mut hasher = self.pool.acquire();
        hasher.update(source.to_string());
        hasher.finalize_hex()
    }
}

/// Hex digest of the parameters' canonical form. The source is ignored.
pub struct ParametersHashKeyGenerator<D = Sha256>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    pool: HasherPool<D>,
}

impl<D> ParametersHashKeyGenerator<D>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    pub fn new() -> Self {
        Self {
            pool: HasherPool::new(),
        }
    }

    pub fn with_pool_size(max_idle: usize) -> Self {
        Self {
            pool: HasherPool::with_max_idle(max_idle),
        }
    }
}

impl<D> Default for ParametersHashKeyGenerator<D>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D> KeyGenerator for ParametersHashKeyGenerator<D>
where
    D: Digest + FixedOutputReset + Default + Send,
{
    fn key(&self, _source: &Source, parameters: &Parameters) -> String {
        let mut hasher = self.pool.acquire();
        hasher.update(parameters.to_canonical_string());
        hasher.finalize_hex()
    }
}

/// Joins the keys of several generators with a separator.
pub struct JoinKeyGenerator {
    parts: Vec<Box<dyn KeyGenerator>>,
    separator: String,
}

impl JoinKeyGenerator {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            parts: Vec::new(),
            separator: separator.into(),
        }
    }

    pub fn with(mut self, generator: impl KeyGenerator + 'static) -> Self {
        self.parts.push(Box::new(generator));
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Default for JoinKeyGenerator {
    fn default() -> Self {
        Self::new(":")
    }
}

impl KeyGenerator for JoinKeyGenerator {
    fn key(&self, source: &Source, parameters: &Parameters) -> String {
        self.parts
            .iter()
            .map(|g| g.key(source, parameters))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

/// Namespaces the keys of an inner generator with a fixed prefix.
pub struct PrefixKeyGenerator<K> {
    prefix: String,
    inner: K,
}

impl<K: KeyGenerator> PrefixKeyGenerator<K> {
    pub fn new(prefix: impl Into<String>, inner: K) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }
}

impl<K: KeyGenerator> KeyGenerator for PrefixKeyGenerator<K> {
    fn key(&self, source: &Source, parameters: &Parameters) -> String {
        let mut key = self.prefix.clone();
        key.push_str(&self.inner.key(source, parameters));
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha512;

    const SHA256_ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn params() -> Parameters {
        Parameters::new().with("width", 100).with("height", 50)
    }

    #[test]
    fn test_source_hash_matches_reference_digest() {
        let generator = SourceHashKeyGenerator::<Sha256>::new();
        let key = generator.key(&Source::from("abc"), &Parameters::new());
        assert_eq!(key, SHA256_ABC);
        assert_eq!(
            generator.key(&Source::from("a.png"), &Parameters::new()),
            "7f071235805fbf58a2524f77bff76e1391d0d1cfe2f4c190d73054495e05b460"
        );
    }

    #[test]
    fn test_source_hash_is_deterministic_and_ignores_parameters() {
        let generator: SourceHashKeyGenerator = SourceHashKeyGenerator::new();
        let source = Source::from("https://example.com/cat.png");
        let first = generator.key(&source, &Parameters::new());
        let second = generator.key(&source, &params());
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        let other = Source::from("https://example.com/dog.png");
        assert_ne!(first, generator.key(&other, &Parameters::new()));
    }

    #[test]
    fn test_other_digests() {
        let generator = SourceHashKeyGenerator::<Sha512>::with_pool_size(1);
        assert_eq!(
            generator.key(&Source::from("abc"), &Parameters::new()),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
        assert_eq!(generator.pool().idle(), 1);
    }

    #[test]
    fn test_parameters_hash() {
        let generator: ParametersHashKeyGenerator = ParametersHashKeyGenerator::new();
        let key = generator.key(&Source::from("ignored"), &params());
        assert_eq!(
            key,
            "db727bdb6e1f134cb5026a62941a67ea587bb2b2a31d32a7dcd749ede395d8c5"
        );
        assert_ne!(
            key,
            generator.key(&Source::from("ignored"), &Parameters::new())
        );
    }

    #[test]
    fn test_prefix_composition() {
        let inner = KeyGeneratorFunc::new(|s: &Source, _: &Parameters| s.to_string());
        let generator = PrefixKeyGenerator::new("v2:", PrefixKeyGenerator::new("thumb:", inner));
        assert_eq!(
            generator.key(&Source::from("a.png"), &params()),
            "v2:thumb:a.png"
        );
        assert_eq!(generator.prefix(), "v2:");
        assert_eq!(generator.inner().prefix(), "thumb:");
    }

    #[test]
    fn test_prefix_over_hash() {
        let hash: Arc<SourceHashKeyGenerator> = Arc::new(SourceHashKeyGenerator::new());
        let prefixed = PrefixKeyGenerator::new("tenant-a/", hash.clone());
        let source = Source::from("abc");
        assert_eq!(
            prefixed.key(&source, &params()),
            format!("tenant-a/{}", hash.key(&source, &params()))
        );
    }

    #[test]
    fn test_join_makes_keys_parameter_sensitive() {
        let generator = JoinKeyGenerator::default()
            .with(SourceHashKeyGenerator::<Sha256>::new())
            .with(ParametersHashKeyGenerator::<Sha256>::new());
        assert_eq!(generator.len(), 2);

        let source = Source::from("abc");
        let small = generator.key(&source, &params());
        let large = generator.key(&source, &Parameters::new().with("width", 800));
        assert_ne!(small, large);
        assert!(small.starts_with(&format!("{}:", SHA256_ABC)));
    }

    #[test]
    fn test_empty_join() {
        let generator = JoinKeyGenerator::new("-");
        assert!(generator.is_empty());
        assert_eq!(generator.key(&Source::from("abc"), &Parameters::new()), "");
    }
}
