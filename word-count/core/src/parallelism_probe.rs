// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timing harness checking that a worker runtime runs CPU-bound workers in
//! parallel.
//!
//! One nth-prime unit is dispatched alone `executions` times, then two equal
//! units are dispatched together and joined `executions` times. On a runtime
//! with real parallelism the two averages are close; a runtime that
//! serializes its workers shows the concurrent average at roughly twice the
//! single one.

use crate::dispatcher::Dispatcher;
use crate::error::{Result, WordCountError};
use crate::primes::nth_prime_task;
use crate::result_channel::ResultChannel;
use crate::worker_runtime::WorkerRuntime;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct ParallelismProbe {
    prime_n: u64,
    executions: u32,
}

impl ParallelismProbe {
    pub fn new(prime_n: u64, executions: u32) -> Result<Self> {
        if executions == 0 {
            return Err(WordCountError::invalid_argument(
                "number of executions must be greater than 0",
            ));
        }
        Ok(Self {
            prime_n,
            executions,
        })
    }

    pub fn measure<R, C>(&self, dispatcher: &Dispatcher<R>) -> Result<TimingReport>
    where
        R: WorkerRuntime,
        C: ResultChannel<u64>,
    {
        // Warm-up so thread creation and caches don't skew the first sample
        self.round::<R, C>(dispatcher, 1)?;

        let serial = self.average::<R, C>(dispatcher, 1)?;
        let concurrent = self.average::<R, C>(dispatcher, 2)?;

        let report = TimingReport {
            prime_n: self.prime_n,
            executions: self.executions,
            serial,
            concurrent,
        };
        tracing::info!(%report, "parallelism probe finished");
        Ok(report)
    }

    fn average<R, C>(&self, dispatcher: &Dispatcher<R>, units: usize) -> Result<Duration>
    where
        R: WorkerRuntime,
        C: ResultChannel<u64>,
    {
        let start = Instant::now();
        for _ in 0..self.executions {
            self.round::<R, C>(dispatcher, units)?;
        }
        Ok(start.elapsed() / self.executions)
    }

    fn round<R, C>(&self, dispatcher: &Dispatcher<R>, units: usize) -> Result<()>
    where
        R: WorkerRuntime,
        C: ResultChannel<u64>,
    {
        let jobs = std::iter::repeat(self.prime_n).take(units);
        let primes = dispatcher.fan_out::<_, _, C, _>(jobs, units, nth_prime_task::<C::Sender>)?;
        std::hint::black_box(primes);
        Ok(())
    }
}

/// Average wall time of one unit alone vs. two units run together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingReport {
    pub prime_n: u64,
    pub executions: u32,
    pub serial: Duration,
    pub concurrent: Duration,
}

impl TimingReport {
    /// Concurrent average divided by the single-unit average.
    pub fn slowdown(&self) -> f64 {
        let serial = self.serial.as_secs_f64();
        if serial == 0.0 {
            return 1.0;
        }
        self.concurrent.as_secs_f64() / serial
    }

    /// Symmetric relative closeness: `|a - b| <= rel_tol * max(a, b)`.
    pub fn is_close(&self, rel_tol: f64) -> bool {
        let serial = self.serial.as_secs_f64();
        let concurrent = self.concurrent.as_secs_f64();
        (serial - concurrent).abs() <= rel_tol * serial.max(concurrent)
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nth_prime({}) x{}: serial {:?}, concurrent {:?} ({:.2}x)",
            self.prime_n,
            self.executions,
            self.serial,
            self.concurrent,
            self.slowdown()
        )
    }
}
