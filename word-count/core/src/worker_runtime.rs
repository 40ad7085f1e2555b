// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Trait for abstracting the worker primitive (OS threads, blocking tasks)
///
/// Implementations must run independent workers in parallel: no global lock
/// may serialize two CPU-bound workers.
pub trait WorkerRuntime: Send + Sync {
    type Handle: Send;
    type Error: std::fmt::Display + Send;

    /// Spawn a worker running `f`
    fn spawn<F>(&self, worker_id: usize, f: F) -> Result<Self::Handle, Self::Error>
    where
        F: FnOnce() + Send + 'static;

    /// Wait for the worker to complete
    fn join(&self, handle: Self::Handle) -> Result<(), Self::Error>;
}
