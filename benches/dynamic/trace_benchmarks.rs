use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dptrace::cs::dynamic::{build_coin_change_trace, build_fibonacci_trace};

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci_trace");
    for n in [8i64, 30, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| build_fibonacci_trace(black_box(n)))
        });
    }
    group.finish();
}

fn bench_coin_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin_change_trace");
    let coin_sets: [(&str, &[usize]); 3] = [
        ("1-2-5", &[1, 2, 5]),
        ("1-6-10", &[1, 6, 10]),
        ("us", &[1, 5, 10, 25, 50]),
    ];
    for (name, coins) in coin_sets {
        group.bench_with_input(BenchmarkId::new(name, 100), &coins, |b, coins| {
            b.iter(|| build_coin_change_trace(black_box(100), coins))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fibonacci, bench_coin_change);
criterion_main!(benches);
