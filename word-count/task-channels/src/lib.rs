// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Task-based entry points: workers run on Tokio's blocking thread pool and
//! report through a bounded Tokio mpsc channel.

mod channel_wrappers;
pub use channel_wrappers::{TokioResultChannel, TokioResultSender};

mod tokio_runtime;
pub use tokio_runtime::TokioRuntime;

use std::collections::BTreeMap;
use tokio::sync::mpsc;
use word_count_core::{
    split_into_chunks, word_count_task, Chunk, Dispatcher, ParallelismProbe, PartialCount, Result,
    TimingReport, WordCountError,
};

pub fn dispatcher() -> Result<Dispatcher<TokioRuntime>> {
    Ok(Dispatcher::new(TokioRuntime::new()?))
}

/// Counts the words of `text` on up to `workers` blocking tasks.
///
/// Builds its own runtime, so it must not be called from inside an async
/// context; use [`word_count_async`] there.
pub fn word_count(text: &str, workers: usize) -> Result<u64> {
    dispatcher()?.word_count::<TokioResultChannel<_>>(text, workers)
}

/// Same contract as [`word_count`], for callers already running on a
/// multi-threaded Tokio runtime.
pub async fn word_count_async(text: &str, workers: usize) -> Result<u64> {
    let chunks: Vec<Chunk> = split_into_chunks(text, workers)?.collect();
    let (tx, mut rx) = mpsc::channel::<PartialCount>(chunks.len().max(1));

    let mut handles = Vec::with_capacity(chunks.len());
    for (worker_id, chunk) in chunks.into_iter().enumerate() {
        let sender = TokioResultSender { tx: tx.clone() };
        let handle = tokio::task::spawn_blocking(move || word_count_task(worker_id, chunk, sender));
        handles.push((worker_id, handle));
    }
    drop(tx);

    let launched = handles.len();
    let mut join_error = None;
    for (worker_id, handle) in handles {
        if let Err(e) = handle.await {
            tracing::warn!(worker_id, error = %e, "task failed");
            join_error.get_or_insert(WordCountError::worker_failed(worker_id, e));
        }
    }
    if let Some(error) = join_error {
        return Err(error);
    }

    let mut received = 0;
    let mut total = 0;
    while let Some(partial) = rx.recv().await {
        tracing::trace!(worker_id = partial.worker_id, words = partial.value, "partial count");
        received += 1;
        total += partial.value;
    }
    if received < launched {
        return Err(WordCountError::MissingPartialCount {
            expected: launched,
            received,
        });
    }

    tracing::info!(workers, chunks = launched, total, "word count complete");
    Ok(total)
}

pub fn compute_prime_factors(numbers: &[u64], workers: usize) -> Result<BTreeMap<u64, Vec<u64>>> {
    dispatcher()?.prime_factors::<TokioResultChannel<_>>(numbers, workers)
}

pub fn probe_parallelism(prime_n: u64, executions: u32) -> Result<TimingReport> {
    let probe = ParallelismProbe::new(prime_n, executions)?;
    probe.measure::<_, TokioResultChannel<_>>(&dispatcher()?)
}
