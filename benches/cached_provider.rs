//! Benchmarks for the cache-aside path
//!
//! This benchmark measures:
//! - Hit latency through `CachedProvider`
//! - Miss latency with a `NullCache` (provider call plus discarded write)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image_provider_cache::cache::{CachedProvider, MemoryCache, NullCache};
use image_provider_cache::provider::{Provider, ProviderFunc};
use image_provider_cache::types::{Image, Parameters, Source};

fn origin() -> ProviderFunc<fn(&Source, &Parameters) -> image_provider_cache::Result<Image>> {
    fn fetch(_: &Source, _: &Parameters) -> image_provider_cache::Result<Image> {
        Ok(Image::new("png", vec![0u8; 16 * 1024]))
    }
    ProviderFunc::new(fetch as fn(&Source, &Parameters) -> image_provider_cache::Result<Image>)
}

fn bench_cached_provider(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let source = Source::from("https://img.example.com/photos/cat.png");
    let params = Parameters::new().with("width", 256);

    let warm = CachedProvider::builder(origin(), MemoryCache::new())
        .build()
        .unwrap();
    rt.block_on(warm.get(&source, &params)).unwrap();

    let cold = CachedProvider::builder(origin(), NullCache::new())
        .build()
        .unwrap();

    let mut group = c.benchmark_group("cached_provider");
    group.bench_function("hit", |b| {
        b.to_async(&rt)
            .iter(|| async { warm.get(black_box(&source), black_box(&params)).await })
    });
    group.bench_function("miss", |b| {
        b.to_async(&rt)
            .iter(|| async { cold.get(black_box(&source), black_box(&params)).await })
    });
    group.finish();
}

criterion_group!(benches, bench_cached_provider);
criterion_main!(benches);
