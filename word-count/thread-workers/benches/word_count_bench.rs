// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use word_count_core::{primes::nth_prime_task, utils::generate_corpus};
use word_count_threads::{dispatcher, word_count, CrossbeamResultChannel, CrossbeamResultSender};

const CORPUS_WORDS: usize = 200_000;
const PRIME_N: u64 = 5_000;

fn bench_word_count(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let corpus = generate_corpus(&mut rng, CORPUS_WORDS, 12);

    let mut group = c.benchmark_group("word_count/threads");
    group.throughput(Throughput::Bytes(corpus.len() as u64));

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| black_box(word_count(black_box(&corpus), workers).unwrap()));
        });
    }
    group.finish();
}

/// One nth-prime unit alone vs. two dispatched together; on a parallel
/// runtime the two lines should be close.
fn bench_nth_prime_overlap(c: &mut Criterion) {
    let dispatcher = dispatcher();
    let mut group = c.benchmark_group("nth_prime/threads");

    for units in [1usize, 2] {
        group.bench_with_input(BenchmarkId::new("units", units), &units, |b, &units| {
            b.iter(|| {
                let jobs = std::iter::repeat(PRIME_N).take(units);
                let primes = dispatcher
                    .fan_out::<_, u64, CrossbeamResultChannel<u64>, _>(
                        jobs,
                        units,
                        nth_prime_task::<CrossbeamResultSender<u64>>,
                    )
                    .unwrap();
                black_box(primes)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_word_count, bench_nth_prime_overlap);
criterion_main!(benches);
