// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::rngs::StdRng;
use rand::SeedableRng;
use word_count_core::{utils::generate_corpus, WordCountError};
use word_count_task_channels::{compute_prime_factors, word_count, word_count_async};

// ============================================================
// blocking entry point
// ============================================================

#[test]
fn test_word_count_scenarios() {
    assert_eq!(word_count("hello world", 1).unwrap(), 2);
    assert_eq!(word_count("hello world", 2).unwrap(), 2);
    assert_eq!(word_count(&"hello world ".repeat(1000), 2).unwrap(), 2000);
    assert_eq!(word_count("hello world", 10).unwrap(), 2);
    assert_eq!(word_count("hello world", 1 << 36).unwrap(), 2);
}

#[test]
fn test_empty_text_counts_zero() {
    assert_eq!(word_count("", 4).unwrap(), 0);
}

#[test]
fn test_zero_workers_is_invalid_argument() {
    assert!(matches!(
        word_count("hello world", 0),
        Err(WordCountError::InvalidArgument { .. })
    ));
}

#[test]
fn test_tasks_and_threads_agree() {
    let mut rng = StdRng::seed_from_u64(99);
    let corpus = generate_corpus(&mut rng, 10_000, 10);

    for workers in [1, 2, 5, 32] {
        let tasks = word_count(&corpus, workers).unwrap();
        let threads = word_count_threads::word_count(&corpus, workers).unwrap();
        assert_eq!(tasks, threads, "workers = {workers}");
        assert_eq!(tasks, 10_000);
    }
}

#[test]
fn test_compute_prime_factors() {
    let factors = compute_prime_factors(&[6, 7, 8, 9, 10, 0], 3).unwrap();
    assert_eq!(factors[&6], vec![2, 3]);
    assert_eq!(factors[&8], vec![2]);
    assert_eq!(factors[&10], vec![2, 5]);
    assert!(factors[&0].is_empty());
}

// ============================================================
// async entry point
// ============================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_word_count_scenarios() {
    assert_eq!(word_count_async("hello world", 1).await.unwrap(), 2);
    assert_eq!(word_count_async("hello world", 2).await.unwrap(), 2);
    assert_eq!(
        word_count_async(&"hello world ".repeat(1000), 2).await.unwrap(),
        2000
    );
    assert_eq!(word_count_async("hello world", 10).await.unwrap(), 2);
    assert_eq!(word_count_async("hello world", 1 << 36).await.unwrap(), 2);
    assert_eq!(word_count_async("", 3).await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_zero_workers_is_invalid_argument() {
    assert!(matches!(
        word_count_async("hello", 0).await,
        Err(WordCountError::InvalidArgument { .. })
    ));
}

#[tokio::test]
async fn test_async_runs_on_current_thread_runtime() {
    let text = "one two three four five six seven";
    for workers in 1..10 {
        assert_eq!(word_count_async(text, workers).await.unwrap(), 7);
    }
}
