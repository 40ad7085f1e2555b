// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{Result, WordCountError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which worker primitive runs the workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeKind {
    /// One native OS thread per worker
    #[default]
    Threads,
    /// Blocking tasks on a multi-threaded Tokio runtime
    Tasks,
}

impl FromStr for RuntimeKind {
    type Err = WordCountError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "threads" => Ok(Self::Threads),
            "tasks" => Ok(Self::Tasks),
            other => Err(WordCountError::invalid_argument(format!(
                "unknown runtime '{other}', expected 'threads' or 'tasks'"
            ))),
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Threads => f.write_str("threads"),
            Self::Tasks => f.write_str("tasks"),
        }
    }
}

/// Settings read from a JSON file; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workers: usize,
    pub runtime: RuntimeKind,
    pub prime_n: u64,
    pub probe_executions: u32,
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            runtime: RuntimeKind::Threads,
            prime_n: 20_000,
            probe_executions: 5,
            tolerance: 0.10,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to [`Config::default`] when the file is
    /// absent. A file that exists but is malformed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(WordCountError::ConfigIo(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(WordCountError::invalid_argument(
                "config: workers must be greater than 0",
            ));
        }
        if self.probe_executions == 0 {
            return Err(WordCountError::invalid_argument(
                "config: probe_executions must be greater than 0",
            ));
        }
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(WordCountError::invalid_argument(
                "config: tolerance must be in (0, 1)",
            ));
        }
        Ok(())
    }
}
