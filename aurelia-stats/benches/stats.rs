use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aurelia_stats::{comprehensive_stats, melting_temp, StatsEngine};

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    // Deterministic pseudo-random for reproducibility
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn bench_comprehensive(c: &mut Criterion) {
    let mut group = c.benchmark_group("comprehensive_stats");
    for &len in &[100, 10_000] {
        let seq = random_dna(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| comprehensive_stats(black_box(&seq)))
        });
    }
    group.finish();
}

fn bench_melting(c: &mut Criterion) {
    let seq = random_dna(1000);
    c.bench_function("melting_temp_1k", |b| {
        b.iter(|| melting_temp(black_box(&seq)))
    });
}

fn bench_cached_engine(c: &mut Criterion) {
    let seq = random_dna(10_000);
    let mut engine = StatsEngine::new();
    engine.stats(&seq).unwrap();
    c.bench_function("stats_engine_hit_10k", |b| {
        b.iter(|| engine.stats(black_box(&seq)))
    });
}

criterion_group!(benches, bench_comprehensive, bench_melting, bench_cached_engine);
criterion_main!(benches);
