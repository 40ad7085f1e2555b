// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Thread-based entry points: one native OS thread per worker, results
//! returned over a bounded crossbeam channel.

mod channel_wrappers;
pub use channel_wrappers::{CrossbeamResultChannel, CrossbeamResultSender};

mod thread_runtime;
pub use thread_runtime::{ThreadRuntime, ThreadWorkerError};

use std::collections::BTreeMap;
use word_count_core::{Dispatcher, ParallelismProbe, Result, TimingReport};

pub fn dispatcher() -> Dispatcher<ThreadRuntime> {
    Dispatcher::new(ThreadRuntime::new())
}

/// Counts the words of `text` on up to `workers` threads.
///
/// Fails with `InvalidArgument` when `workers` is zero.
pub fn word_count(text: &str, workers: usize) -> Result<u64> {
    dispatcher().word_count::<CrossbeamResultChannel<_>>(text, workers)
}

pub fn compute_prime_factors(numbers: &[u64], workers: usize) -> Result<BTreeMap<u64, Vec<u64>>> {
    dispatcher().prime_factors::<CrossbeamResultChannel<_>>(numbers, workers)
}

pub fn probe_parallelism(prime_n: u64, executions: u32) -> Result<TimingReport> {
    ParallelismProbe::new(prime_n, executions)?
        .measure::<_, CrossbeamResultChannel<_>>(&dispatcher())
}
