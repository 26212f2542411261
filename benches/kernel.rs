//! Benchmarks for the transcendental kernel, bitwise logic and hex conversion

extern crate criterion;
extern crate bigdecimal_ext;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bigdecimal_ext::{BigDecimal, Number};

criterion_main!(
    transcendental,
    integer_logic,
);

criterion_group!(
    name = transcendental;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(100);
    targets =
        bench_exp,
        bench_ln,
        bench_fractional_pow,
);

criterion_group!(
    name = integer_logic;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_bit_and,
        bench_hex,
);


/// Decimals in (-range, range) with two to six fractional digits
fn make_random_decimals(count: usize, range: i32, seed: u64) -> Vec<Number> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count).map(|_| {
        let scale = rng.rand_range(2..7) as i64;
        let limit = range as i64 * 10i64.pow(scale as u32);
        let digits = rng.rand_i32() as i64 % limit;
        Number::new(BigDecimal::new(digits.into(), scale))
    }).collect()
}

/// Integers of up to `bytes` random bytes, some negative
fn make_random_integers(count: usize, bytes: usize, seed: u64) -> Vec<Number> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count).map(|_| {
        let hex: String = (0..bytes).map(|_| format!("{:02x}", rng.rand_range(0..256))).collect();
        let n = Number::from_hex(&hex).unwrap();
        if rng.rand_u32() % 4 == 0 { -n } else { n }
    }).collect()
}

fn bench_cycling<F>(name: &str, c: &mut Criterion, inputs: &[Number], op: F)
where
    F: Fn(&Number),
{
    let mut idx = 0;
    c.bench_function(
        name,
        |b| b.iter_batched(
            || {
                idx = (idx + 1) % inputs.len();
                &inputs[idx]
            },
            |x| op(x),
            criterion::BatchSize::SmallInput));
}

fn bench_exp(c: &mut Criterion) {
    let inputs = make_random_decimals(200, 40, 7238269155957952517);
    bench_cycling("exp", c, &inputs, |x| { black_box(x.exp()); });
}

fn bench_ln(c: &mut Criterion) {
    let inputs: Vec<Number> = make_random_decimals(200, 1000, 1593064197605931042)
                                .into_iter()
                                .map(|n| n.abs())
                                .filter(|n| !n.is_zero())
                                .collect();
    bench_cycling("ln", c, &inputs, |x| { black_box(x.ln()); });
}

fn bench_fractional_pow(c: &mut Criterion) {
    let inputs: Vec<Number> = make_random_decimals(200, 100, 9436158080694931627)
                                .into_iter()
                                .map(|n| n.abs())
                                .filter(|n| !n.is_zero())
                                .collect();
    bench_cycling("pow-fractional", c, &inputs, |x| { black_box(x.pow("1.5").unwrap()); });
}

fn bench_bit_and(c: &mut Criterion) {
    let lhs = make_random_integers(100, 32, 2919026355136817843);
    let rhs = make_random_integers(100, 24, 5154212473036704325);
    let pairs: Vec<(Number, Number)> = lhs.into_iter().zip(rhs).collect();

    let mut idx = 0;
    c.bench_function(
        "bit-and-256bit",
        |b| b.iter_batched(
            || {
                idx = (idx + 1) % pairs.len();
                &pairs[idx]
            },
            |(x, y)| {
                black_box(x.bit_and(y).unwrap());
            },
            criterion::BatchSize::SmallInput));
}

fn bench_hex(c: &mut Criterion) {
    let inputs: Vec<Number> = make_random_integers(200, 64, 3121374489147389017)
                                .into_iter()
                                .map(|n| n.abs())
                                .collect();
    bench_cycling("to-hex-512bit", c, &inputs, |x| { black_box(x.to_hex().unwrap()); });
}
