use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aurelia_align::{local_align, local_align_score, AlignParams};

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

fn mutate_dna(seq: &[u8], rate: f64) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut out = seq.to_vec();
    let mut state: u64 = 137;
    for b in out.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = (state >> 33) as f64 / (u32::MAX as f64);
        if r < rate {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *b = bases[((state >> 33) % 4) as usize];
        }
    }
    out
}

fn bench_local(c: &mut Criterion) {
    let params = AlignParams::default();
    let mut group = c.benchmark_group("local_align");

    for &len in &[100, 500] {
        let q = random_dna(len);
        let t = mutate_dna(&q, 0.1);

        group.bench_with_input(BenchmarkId::new("full", len), &len, |b, _| {
            b.iter(|| local_align(black_box(&q), black_box(&t), &params))
        });

        group.bench_with_input(BenchmarkId::new("score_only", len), &len, |b, _| {
            b.iter(|| local_align_score(black_box(&q), black_box(&t), &params))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_local);
criterion_main!(benches);
