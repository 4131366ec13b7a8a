use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mpnum::{FloatBig, FloatContext, RationalBig, RoundingRule, SignedBig, UnsignedBig};

fn wide_signed(words: usize) -> SignedBig {
    let pattern: Vec<u64> = (0..words as u64)
        .map(|i| 0x9e37_79b9_7f4a_7c15u64.wrapping_mul(i + 1))
        .collect();
    -SignedBig::from(UnsignedBig::from_words(&pattern))
}

fn integer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed");

    for words in [1, 16, 256] {
        let a = wide_signed(words);
        let b = wide_signed(words / 2 + 1);
        group.bench_with_input(BenchmarkId::new("mul", words), &words, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b));
        });
        group.bench_with_input(BenchmarkId::new("div_rem", words), &words, |bench, _| {
            bench.iter(|| black_box(&a).quotient_and_remainder(black_box(&b)));
        });
        group.bench_with_input(BenchmarkId::new("words", words), &words, |bench, _| {
            bench.iter(|| black_box(&a).words());
        });
        group.bench_with_input(BenchmarkId::new("to_string", words), &words, |bench, _| {
            bench.iter(|| black_box(&a).to_string());
        });
    }

    group.finish();
}

fn unsigned_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("unsigned");
    let negative = UnsignedBig::from_truncating(wide_signed(64));
    let positive = UnsignedBig::from_words(&[u64::MAX; 64]);

    group.bench_function("wrapping_eq", |b| {
        b.iter(|| black_box(&negative) == black_box(&positive));
    });
    group.bench_function("try_sub", |b| {
        b.iter(|| black_box(&positive).try_sub(black_box(&negative)));
    });

    group.finish();
}

fn rational_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational");

    group.bench_function("harmonic_100", |b| {
        b.iter(|| {
            let mut sum = RationalBig::default();
            for k in 1..=black_box(100i64) {
                sum += RationalBig::new(1, k).unwrap();
            }
            sum
        });
    });

    group.finish();
}

fn float_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("float");

    for precision in [53, 256, 4096] {
        let ctx = FloatContext::new(precision, RoundingRule::NearestEven).unwrap();
        let x = FloatBig::from_source(RationalBig::new(3, 7).unwrap(), ctx);
        group.bench_with_input(BenchmarkId::new("sin", precision), &precision, |b, _| {
            b.iter(|| black_box(&x).sin());
        });
        group.bench_with_input(BenchmarkId::new("pi", precision), &precision, |b, _| {
            b.iter(|| FloatBig::pi(black_box(ctx)));
        });
        group.bench_with_input(BenchmarkId::new("describe", precision), &precision, |b, _| {
            b.iter(|| black_box(&x).to_string());
        });
    }

    let ties = FloatContext::new(200, RoundingRule::NearestTiesAway).unwrap();
    let a = FloatBig::from_source(1, ties);
    let b = FloatBig::from_source(3, ties);
    group.bench_function("div_ties_away", |bench| {
        bench.iter(|| black_box(&a) / black_box(&b));
    });

    group.finish();
}

criterion_group!(
    benches,
    integer_benchmark,
    unsigned_benchmark,
    rational_benchmark,
    float_benchmark
);
criterion_main!(benches);
