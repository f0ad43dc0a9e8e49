use criterion::{black_box, criterion_group, criterion_main, Criterion};
use path_fuzzy_match::{fuzzy_match, rank, segments, FuzzyMatcher};

const TARGET: &str = "projects/agent-tasks/src/worktree/checkout.rs";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("single_early_match", |b| {
        b.iter(|| fuzzy_match(black_box("proj"), black_box(TARGET)))
    });
    c.bench_function("single_late_match", |b| {
        b.iter(|| fuzzy_match(black_box("checkout"), black_box(TARGET)))
    });
    c.bench_function("single_no_match", |b| {
        b.iter(|| fuzzy_match(black_box("zzz"), black_box(TARGET)))
    });
    c.bench_function("single_long_matching_query", |b| {
        b.iter(|| fuzzy_match(black_box("agtwrkchck"), black_box(TARGET)))
    });
    c.bench_function("single_long_no_match_query", |b| {
        b.iter(|| fuzzy_match(black_box("agtwrkchckz"), black_box(TARGET)))
    });

    c.bench_function("batch_early_match", |b| {
        let mut matcher = FuzzyMatcher::new();
        b.iter(|| matcher.fuzzy_match(black_box("proj"), black_box(TARGET)))
    });
    c.bench_function("batch_late_match", |b| {
        let mut matcher = FuzzyMatcher::new();
        b.iter(|| matcher.fuzzy_match(black_box("checkout"), black_box(TARGET)))
    });
    c.bench_function("batch_no_match", |b| {
        let mut matcher = FuzzyMatcher::new();
        b.iter(|| matcher.fuzzy_match(black_box("zzz"), black_box(TARGET)))
    });
    c.bench_function("batch_long_matching_query", |b| {
        let mut matcher = FuzzyMatcher::new();
        b.iter(|| matcher.fuzzy_match(black_box("agtwrkchck"), black_box(TARGET)))
    });

    c.bench_function("rank_host_list", |b| {
        let hosts = [
            "bastion-01.internal",
            "build-runner-a",
            "build-runner-b",
            "ci.example.com",
            "db-primary",
            "db-replica-1",
            "db-replica-2",
            "edge-proxy",
            "git.example.com",
            "worker-pool-03",
        ];
        b.iter(|| rank(black_box("br"), black_box(hosts)))
    });

    c.bench_function("segment_matched_path", |b| {
        let result = fuzzy_match("checkout", TARGET).unwrap();
        b.iter(|| segments(black_box(TARGET), black_box(&result.matched_indices)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
