use criterion::{criterion_group, criterion_main};
use elimination::{criterion_benchmark_closures, criterion_benchmark_elimination};


criterion_group!(
    benches,
    criterion_benchmark_elimination,
    criterion_benchmark_closures,
);
criterion_main!(benches);
