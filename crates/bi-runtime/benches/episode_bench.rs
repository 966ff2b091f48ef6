use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_episodes(c: &mut Criterion) {
    let params = bi_runtime::MarlParams::default();
    let start = bi_core::MarlState::default();
    c.bench_function("advance 100 episodes", |b| {
        b.iter(|| {
            let mut sampler = bi_runtime::ContributionSampler::seeded(42);
            black_box(bi_runtime::run_episodes(100, &start, &mut sampler, &params))
        })
    });
    let contributions = bi_runtime::ContributionSampler::seeded(7).sample();
    c.bench_function("single episode", |b| {
        b.iter(|| bi_runtime::advance_episode(0, black_box(&start), black_box(&contributions)))
    });
}

criterion_group!(benches, bench_episodes);
criterion_main!(benches);
