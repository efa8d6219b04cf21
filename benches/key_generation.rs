//! Benchmarks for cache key derivation
//!
//! This benchmark measures:
//! - Pooled SHA-256 source hashing vs. a fresh accumulator per key
//! - Prefix and parameter-hash composition overhead

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image_provider_cache::cache::{
    JoinKeyGenerator, KeyGenerator, ParametersHashKeyGenerator, PrefixKeyGenerator,
    SourceHashKeyGenerator,
};
use image_provider_cache::types::{Parameters, Source};
use sha2::{Digest, Sha256, Sha512};

fn sample_params() -> Parameters {
    Parameters::new()
        .with("width", 640)
        .with("height", 480)
        .with("format", "webp")
        .with("quality", 85)
}

fn bench_source_hash(c: &mut Criterion) {
    let source = Source::from("https://img.example.com/photos/2024/summer/beach.jpg");
    let params = sample_params();
    let mut group = c.benchmark_group("source_hash");

    let pooled: SourceHashKeyGenerator<Sha256> = SourceHashKeyGenerator::new();
    group.bench_function("pooled_sha256", |b| {
        b.iter(|| pooled.key(black_box(&source), black_box(&params)))
    });

    group.bench_function("fresh_sha256", |b| {
        b.iter(|| {
            let digest = Sha256::digest(black_box(&source).to_string().as_bytes());
            digest
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<String>()
        })
    });

    let pooled512: SourceHashKeyGenerator<Sha512> = SourceHashKeyGenerator::new();
    group.bench_function("pooled_sha512", |b| {
        b.iter(|| pooled512.key(black_box(&source), black_box(&params)))
    });

    group.finish();
}

fn bench_composition(c: &mut Criterion) {
    let source = Source::from("https://img.example.com/photos/2024/summer/beach.jpg");
    let params = sample_params();
    let mut group = c.benchmark_group("key_composition");

    for depth in [1usize, 4, 16] {
        let mut generator: Box<dyn KeyGenerator> =
            Box::new(SourceHashKeyGenerator::<Sha256>::new());
        for level in 0..depth {
            generator = Box::new(PrefixKeyGenerator::new(format!("ns{}:", level), generator));
        }
        group.bench_with_input(BenchmarkId::new("prefix_depth", depth), &depth, |b, _| {
            b.iter(|| generator.key(black_box(&source), black_box(&params)))
        });
    }

    let joined = JoinKeyGenerator::default()
        .with(SourceHashKeyGenerator::<Sha256>::new())
        .with(ParametersHashKeyGenerator::<Sha256>::new());
    group.bench_function("source_and_parameters", |b| {
        b.iter(|| joined.key(black_box(&source), black_box(&params)))
    });

    group.finish();
}

criterion_group!(benches, bench_source_hash, bench_composition);
criterion_main!(benches);
