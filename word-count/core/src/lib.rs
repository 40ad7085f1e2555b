// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod chunk;
pub use chunk::{Chunk, PartialCount};

mod error;
pub use error::{Result, WordCountError};

pub mod splitter;
pub use splitter::{split_into_chunks, Chunks};

pub mod count_worker;
pub use count_worker::{count_words, word_count_task};

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;

pub mod result_channel;
pub use result_channel::{ResultChannel, ResultSender};

mod dispatcher;
pub use dispatcher::Dispatcher;

pub mod primes;
pub use primes::{is_prime, nth_prime, unique_prime_factors, Factorization};

pub mod parallelism_probe;
pub use parallelism_probe::{ParallelismProbe, TimingReport};

pub mod config;
pub use config::{Config, RuntimeKind};

pub mod utils;
