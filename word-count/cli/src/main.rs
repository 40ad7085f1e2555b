// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use word_count_core::{utils::generate_corpus, Config, RuntimeKind, TimingReport, WordCountError};

#[derive(Debug, Parser)]
#[command(name = "word-count", version, about = "Parallel word counting")]
struct Cli {
    /// JSON configuration file; defaults apply when it does not exist
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Worker primitive: `threads` or `tasks`
    #[arg(long)]
    runtime: Option<RuntimeKind>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count the words of a file, of stdin, or of a generated corpus
    Count {
        #[arg(long, conflicts_with = "generate")]
        file: Option<PathBuf>,

        /// Generate a random corpus with this many words instead of reading input
        #[arg(long)]
        generate: Option<usize>,

        #[arg(long, short, allow_negative_numbers = true)]
        workers: Option<i64>,
    },
    /// Check that two CPU-bound workers overlap in time
    Probe {
        #[arg(long)]
        prime_n: Option<u64>,

        #[arg(long)]
        executions: Option<u32>,
    },
    /// Print the unique prime factors of each number
    Factors {
        #[arg(long, short, allow_negative_numbers = true)]
        workers: Option<i64>,

        #[arg(required = true)]
        numbers: Vec<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(runtime) = cli.runtime {
        config.runtime = runtime;
    }

    match cli.command {
        Command::Count {
            file,
            generate,
            workers,
        } => {
            let workers = worker_count(workers, &config)?;
            let text = read_text(file, generate)?;
            run_count(&config, &text, workers)
        }
        Command::Probe {
            prime_n,
            executions,
        } => {
            if let Some(prime_n) = prime_n {
                config.prime_n = prime_n;
            }
            if let Some(executions) = executions {
                config.probe_executions = executions;
            }
            run_probe(&config)
        }
        Command::Factors { workers, numbers } => {
            let workers = worker_count(workers, &config)?;
            let factors = match config.runtime {
                RuntimeKind::Threads => word_count_threads::compute_prime_factors(&numbers, workers)?,
                RuntimeKind::Tasks => {
                    word_count_task_channels::compute_prime_factors(&numbers, workers)?
                }
            };
            for (number, primes) in factors {
                println!("{number}: {primes:?}");
            }
            Ok(())
        }
    }
}

/// Negative and zero counts are rejected with the same error the engine uses.
fn worker_count(requested: Option<i64>, config: &Config) -> word_count_core::Result<usize> {
    match requested {
        None => Ok(config.workers),
        Some(n) if n <= 0 => Err(WordCountError::invalid_argument(format!(
            "number of workers must be greater than 0, got {n}"
        ))),
        Some(n) => usize::try_from(n)
            .map_err(|_| WordCountError::invalid_argument(format!("too many workers: {n}"))),
    }
}

fn read_text(file: Option<PathBuf>, generate: Option<usize>) -> anyhow::Result<String> {
    if let Some(words) = generate {
        let mut rng = rand::rng();
        return Ok(generate_corpus(&mut rng, words, 12));
    }

    match file {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn run_count(config: &Config, text: &str, workers: usize) -> anyhow::Result<()> {
    tracing::info!(runtime = %config.runtime, workers, bytes = text.len(), "counting words");

    let start = Instant::now();
    let total = match config.runtime {
        RuntimeKind::Threads => word_count_threads::word_count(text, workers)?,
        RuntimeKind::Tasks => word_count_task_channels::word_count(text, workers)?,
    };

    println!("{total}");
    tracing::info!(elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn run_probe(config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    let report: TimingReport = match config.runtime {
        RuntimeKind::Threads => {
            word_count_threads::probe_parallelism(config.prime_n, config.probe_executions)?
        }
        RuntimeKind::Tasks => {
            word_count_task_channels::probe_parallelism(config.prime_n, config.probe_executions)?
        }
    };

    println!("{report}");
    if !report.is_close(config.tolerance) {
        bail!(
            "concurrent workers did not overlap: {:.2}x slowdown exceeds tolerance {}",
            report.slowdown(),
            config.tolerance
        );
    }
    println!("workers overlap within {:.0}%", config.tolerance * 100.0);
    Ok(())
}
