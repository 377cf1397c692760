use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use par_simpson::{integrate, integrate_with_fixed_pool};

fn bench_parallelism(c: &mut Criterion) {
    let mut group = c.benchmark_group("simpson_fixed_pool");
    group.sample_size(20);

    let f = |x: f64| 1.0 / (1.0 + x * x);
    for parallelism in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(parallelism),
            &parallelism,
            |b, &parallelism| {
                b.iter(|| {
                    integrate_with_fixed_pool(&f, black_box(-5.0), black_box(5.0), 2_000_000, parallelism)
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_auto_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("simpson_integrate");

    let f = |x: f64| x.sin() * (1.0 + x * x).ln();
    for n in [1_000, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| integrate(&f, black_box(0.1), black_box(5.0), n).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parallelism, bench_auto_dispatch);
criterion_main!(benches);
