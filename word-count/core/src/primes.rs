// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! CPU-bound reference work: trial-division primality, the n-th prime and
//! unique prime factors. These are the units used to check that workers
//! really run in parallel.

use crate::result_channel::ResultSender;

/// A number paired with its unique prime factors, ascending.
pub type Factorization = (u64, Vec<u64>);

/// `divisor * divisor <= n` without overflowing for divisors past 2^32.
fn within_square_root(divisor: u64, n: u64) -> bool {
    divisor <= n / divisor
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while within_square_root(divisor, n) {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Returns the `n`-th prime (1-based), by trial division.
/// `nth_prime(0)` is 1: the search starts at 2 and reports one below the
/// first unchecked candidate.
pub fn nth_prime(n: u64) -> u64 {
    let mut found = 0;
    let mut candidate = 2;
    while found < n {
        if is_prime(candidate) {
            found += 1;
        }
        candidate += 1;
    }
    candidate - 1
}

/// Unique prime factors of `n`, ascending. 0 and 1 have none.
pub fn unique_prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut divisor = 2;
    while within_square_root(divisor, n) {
        if n % divisor == 0 {
            factors.push(divisor);
            while n % divisor == 0 {
                n /= divisor;
            }
        }
        divisor += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Worker body for the parallelism probe.
pub fn nth_prime_task<S>(worker_id: usize, n: u64, sender: S)
where
    S: ResultSender<u64>,
{
    let prime = nth_prime(n);
    if !sender.send(prime) {
        tracing::warn!(worker_id, "result channel closed before prime was sent");
    }
}

/// Worker body for batch factorization: one message per batch.
pub fn factorize_task<S>(worker_id: usize, numbers: Vec<u64>, sender: S)
where
    S: ResultSender<Vec<Factorization>>,
{
    let factored: Vec<Factorization> = numbers
        .into_iter()
        .map(|n| (n, unique_prime_factors(n)))
        .collect();
    tracing::debug!(worker_id, numbers = factored.len(), "batch factorized");

    if !sender.send(factored) {
        tracing::warn!(worker_id, "result channel closed before factors were sent");
    }
}
