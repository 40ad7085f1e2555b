// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::any::Any;
use std::thread::{self, JoinHandle};
use thiserror::Error;
use word_count_core::WorkerRuntime;

#[derive(Debug, Error)]
pub enum ThreadWorkerError {
    #[error("failed to spawn thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("thread panicked: {0}")]
    Panicked(String),
}

/// Thread-based runtime: every worker is its own named OS thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRuntime;

impl ThreadRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl WorkerRuntime for ThreadRuntime {
    type Handle = JoinHandle<()>;
    type Error = ThreadWorkerError;

    fn spawn<F>(&self, worker_id: usize, f: F) -> Result<Self::Handle, Self::Error>
    where
        F: FnOnce() + Send + 'static,
    {
        let builder = thread::Builder::new().name(format!("word-count-{worker_id}"));
        tracing::trace!(worker_id, "spawning worker thread");
        Ok(builder.spawn(f)?)
    }

    fn join(&self, handle: Self::Handle) -> Result<(), Self::Error> {
        handle
            .join()
            .map_err(|payload| ThreadWorkerError::Panicked(panic_message(payload.as_ref())))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
