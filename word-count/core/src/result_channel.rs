// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Producer half of a result channel, handed to each worker.
/// Different implementations for crossbeam, tokio mpsc, etc.
pub trait ResultSender<T>: Clone + Send + 'static {
    /// Push one result.
    /// Returns true if the result was accepted, false if the consumer is gone
    fn send(&self, value: T) -> bool;
}

/// Multi-producer/single-consumer channel that carries worker results back
/// to the dispatcher.
pub trait ResultChannel<T>: Sized {
    /// The sender type cloned into every worker
    type Sender: ResultSender<T>;

    /// Create a channel able to hold `capacity` results without blocking
    fn bounded(capacity: usize) -> Self;

    /// Get a new sender handle for a worker
    fn sender(&self) -> Self::Sender;

    /// Take the next buffered result without waiting.
    /// Returns None once nothing is buffered
    fn try_next(&mut self) -> Option<T>;
}
