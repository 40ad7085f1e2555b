// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::chunk::{Chunk, PartialCount};
use crate::count_worker::word_count_task;
use crate::error::{Result, WordCountError};
use crate::primes::{factorize_task, Factorization};
use crate::result_channel::ResultChannel;
use crate::splitter::split_into_chunks;
use crate::worker_runtime::WorkerRuntime;
use std::collections::BTreeMap;

/// Dispatcher coordinates the launch-all / join-all / drain workflow.
/// Generic over the worker runtime; the result channel is picked per call
/// since each workload carries its own result type.
pub struct Dispatcher<R: WorkerRuntime> {
    runtime: R,
}

impl<R: WorkerRuntime> Dispatcher<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    /// Launches one worker per job, joins every launched worker, then drains
    /// exactly one result per worker.
    ///
    /// `capacity` bounds both the result channel and the number of workers.
    /// A worker that fails to start or to finish, or one that never sends its
    /// result, fails the whole call.
    pub fn fan_out<J, T, C, F>(
        &self,
        jobs: impl IntoIterator<Item = J>,
        capacity: usize,
        task: F,
    ) -> Result<Vec<T>>
    where
        J: Send + 'static,
        T: Send + 'static,
        C: ResultChannel<T>,
        F: Fn(usize, J, C::Sender) + Clone + Send + 'static,
    {
        let mut channel = C::bounded(capacity);
        let mut handles = Vec::with_capacity(capacity);
        let mut launch_error = None;

        for (worker_id, job) in jobs.into_iter().enumerate() {
            if worker_id >= capacity {
                launch_error = Some(WordCountError::invalid_argument(format!(
                    "more jobs than the {capacity} available workers"
                )));
                break;
            }

            let sender = channel.sender();
            let task = task.clone();
            match self
                .runtime
                .spawn(worker_id, move || task(worker_id, job, sender))
            {
                Ok(handle) => handles.push((worker_id, handle)),
                Err(e) => {
                    launch_error = Some(WordCountError::worker_failed(worker_id, e));
                    break;
                }
            }
        }

        let launched = handles.len();
        tracing::debug!(launched, capacity, "workers launched");

        // Every launched worker is joined, even after a launch failure
        let mut join_error = None;
        for (worker_id, handle) in handles {
            if let Err(e) = self.runtime.join(handle) {
                tracing::warn!(worker_id, error = %e, "worker failed");
                join_error.get_or_insert(WordCountError::worker_failed(worker_id, e));
            }
        }
        if let Some(error) = launch_error.or(join_error) {
            return Err(error);
        }

        let results: Vec<T> = std::iter::from_fn(|| channel.try_next())
            .take(launched)
            .collect();
        if results.len() < launched {
            return Err(WordCountError::MissingPartialCount {
                expected: launched,
                received: results.len(),
            });
        }
        Ok(results)
    }

    /// Counts the whitespace-delimited words of `text` using up to `workers`
    /// workers.
    pub fn word_count<C>(&self, text: &str, workers: usize) -> Result<u64>
    where
        C: ResultChannel<PartialCount>,
    {
        // Channel and handles are sized by the chunks that exist, not by the
        // requested worker count, which may exceed the word count by far
        let chunks: Vec<Chunk> = split_into_chunks(text, workers)?.collect();
        let capacity = chunks.len();
        let partials = self.fan_out::<_, _, C, _>(chunks, capacity, word_count_task::<C::Sender>)?;

        let mut total: u64 = 0;
        for partial in &partials {
            tracing::trace!(worker_id = partial.worker_id, words = partial.value, "partial count");
            total += partial.value;
        }
        tracing::info!(workers, chunks = partials.len(), total, "word count complete");
        Ok(total)
    }

    /// Maps every number to its unique prime factors, splitting the list into
    /// at most `workers` contiguous batches.
    pub fn prime_factors<C>(
        &self,
        numbers: &[u64],
        workers: usize,
    ) -> Result<BTreeMap<u64, Vec<u64>>>
    where
        C: ResultChannel<Vec<Factorization>>,
    {
        if workers == 0 {
            return Err(WordCountError::invalid_argument(
                "number of workers must be greater than 0",
            ));
        }
        if numbers.is_empty() {
            return Ok(BTreeMap::new());
        }

        let per_worker = numbers.len().div_ceil(workers);
        let batches = numbers.chunks(per_worker).map(<[u64]>::to_vec);
        let capacity = workers.min(numbers.len());
        let factored = self.fan_out::<_, _, C, _>(batches, capacity, factorize_task::<C::Sender>)?;

        Ok(factored.into_iter().flatten().collect())
    }
}
