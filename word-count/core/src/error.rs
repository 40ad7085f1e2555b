// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Result alias used across the word-count crates.
pub type Result<T, E = WordCountError> = std::result::Result<T, E>;

/// All error variants the word-count engine can emit.
#[derive(Debug, Error)]
pub enum WordCountError {
    /// A caller-supplied argument violated a precondition (e.g. zero workers).
    /// Raised before any worker is launched.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A launched worker could not be started or did not finish cleanly.
    #[error("worker {worker_id} failed: {reason}")]
    WorkerFailed { worker_id: usize, reason: String },

    /// Fewer results were drained than workers were launched.
    #[error("expected {expected} partial results but only {received} arrived")]
    MissingPartialCount { expected: usize, received: usize },

    /// The worker runtime itself could not be built.
    #[error("worker runtime unavailable: {0}")]
    Runtime(String),

    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl WordCountError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn worker_failed(worker_id: usize, reason: impl std::fmt::Display) -> Self {
        Self::WorkerFailed {
            worker_id,
            reason: reason.to_string(),
        }
    }
}
