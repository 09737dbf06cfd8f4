// benches/integer_search.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathkit::integer_search::{factorize, mersenne_search, perfect_numbers, prime_range};
use mathkit::root_finder::{bisection, newton_iteration, SolverConfig};

fn bench_integer_search(c: &mut Criterion) {
    c.bench_function("prime_range 1..10_000", |b| b.iter(|| prime_range(1, black_box(10_000))));
    c.bench_function("factorize 2^31 - 1", |b| b.iter(|| factorize(black_box(2_147_483_647))));
    c.bench_function("perfect_numbers 1_000", |b| b.iter(|| perfect_numbers(black_box(1_000))));
    c.bench_function("mersenne_search 31", |b| b.iter(|| mersenne_search(black_box(31))));
}

fn bench_root_finder(c: &mut Criterion) {
    let config = SolverConfig::new(1e-12, Some(10_000));
    let f = |x: f64| x * x - 4.0 * x + (-x).exp();
    let dfdx = |x: f64| 2.0 * x - 4.0 - (-x).exp();

    c.bench_function("bisection 1e-12", |b| b.iter(|| bisection(f, black_box(-0.5), 1.0, &config)));
    c.bench_function("newton 1e-12", |b| b.iter(|| newton_iteration(f, dfdx, black_box(0.0), &config)));
}

criterion_group!(benches, bench_integer_search, bench_root_finder);
criterion_main!(benches);
