// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use word_count_core::{Result, WordCountError, WorkerRuntime};

/// Tokio task-based runtime
///
/// Workers are CPU-bound, so they go to the blocking pool of an owned
/// multi-threaded runtime rather than to its async worker threads. Joining
/// blocks the caller, so this runtime must be driven from synchronous code.
pub struct TokioRuntime {
    runtime: Runtime,
}

impl TokioRuntime {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("word-count-task")
            .build()
            .map_err(|e| WordCountError::Runtime(e.to_string()))?;
        Ok(Self { runtime })
    }
}

impl WorkerRuntime for TokioRuntime {
    type Handle = JoinHandle<()>;
    type Error = tokio::task::JoinError;

    fn spawn<F>(&self, worker_id: usize, f: F) -> std::result::Result<Self::Handle, Self::Error>
    where
        F: FnOnce() + Send + 'static,
    {
        tracing::trace!(worker_id, "spawning blocking task");
        Ok(self.runtime.spawn_blocking(f))
    }

    fn join(&self, handle: Self::Handle) -> std::result::Result<(), Self::Error> {
        self.runtime.block_on(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_task_runs_and_joins() {
        let runtime = TokioRuntime::new().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        let handle = runtime.spawn(0, move || tx.send(42).unwrap()).unwrap();
        runtime.join(handle).unwrap();

        assert_eq!(rx.recv().unwrap(), 42);
    }

    #[test]
    fn test_panicking_task_is_a_join_error() {
        let runtime = TokioRuntime::new().unwrap();
        let handle = runtime.spawn(0, || panic!("boom")).unwrap();

        let error = runtime.join(handle).unwrap_err();
        assert!(error.is_panic());
    }
}
