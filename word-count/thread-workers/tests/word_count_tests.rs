// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use word_count_core::{utils::generate_corpus, WordCountError};
use word_count_threads::{compute_prime_factors, word_count};

// ============================================================
// word_count scenarios
// ============================================================

#[test]
fn test_word_count_single_worker() {
    assert_eq!(word_count("hello world", 1).unwrap(), 2);
}

#[test]
fn test_word_count_multiple_workers() {
    assert_eq!(word_count("hello world", 2).unwrap(), 2);
}

#[test]
fn test_word_count_multiple_workers_long_text() {
    let text = "hello world ".repeat(1000);
    assert_eq!(word_count(&text, 2).unwrap(), 2000);
}

#[test]
fn test_more_workers_than_words() {
    assert_eq!(word_count("hello world", 10).unwrap(), 2);
    assert_eq!(word_count("hello world", 1 << 36).unwrap(), 2);
}

#[test]
fn test_empty_text_counts_zero() {
    for workers in [1, 2, 16] {
        assert_eq!(word_count("", workers).unwrap(), 0);
    }
}

#[test]
fn test_whitespace_only_text_counts_zero() {
    assert_eq!(word_count(" \t\n  ", 3).unwrap(), 0);
}

#[test]
fn test_zero_workers_is_invalid_argument() {
    assert!(matches!(
        word_count("hello world", 0),
        Err(WordCountError::InvalidArgument { .. })
    ));
}

#[test]
fn test_large_generated_corpus() {
    let mut rng = StdRng::seed_from_u64(2025);
    let corpus = generate_corpus(&mut rng, 50_000, 15);

    for workers in [1, 3, 8, 64] {
        assert_eq!(word_count(&corpus, workers).unwrap(), 50_000, "workers = {workers}");
    }
}

#[test]
fn test_unicode_text() {
    let text = "zażółć gęślą jaźń «naïve» café 日本語 テキスト";
    let expected = text.split_whitespace().count() as u64;
    for workers in 1..12 {
        assert_eq!(word_count(text, workers).unwrap(), expected, "workers = {workers}");
    }
}

// ============================================================
// prime factors
// ============================================================

#[test]
fn test_compute_prime_factors() {
    let numbers: Vec<u64> = (0..200).collect();
    let factors = compute_prime_factors(&numbers, 4).unwrap();

    assert_eq!(factors.len(), 200);
    assert_eq!(factors[&84], vec![2, 3, 7]);
    assert_eq!(factors[&199], vec![199]);
    assert!(factors[&1].is_empty());
}

#[test]
fn test_compute_prime_factors_more_workers_than_numbers() {
    let factors = compute_prime_factors(&[30, 49], 16).unwrap();
    assert_eq!(factors[&30], vec![2, 3, 5]);
    assert_eq!(factors[&49], vec![7]);
}

// ============================================================
// chunking never changes the total
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_worker_count_does_not_change_total(
        words in prop::collection::vec("[a-z]{1,8}", 0..200),
        separator in prop::sample::select(vec![" ", "\n", "\t ", "   "]),
        workers in 1usize..24,
    ) {
        let text = words.join(separator);
        let baseline = word_count(&text, 1).unwrap();

        prop_assert_eq!(baseline, words.len() as u64);
        prop_assert_eq!(word_count(&text, workers).unwrap(), baseline);
    }
}
