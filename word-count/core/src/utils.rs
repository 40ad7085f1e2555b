// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::Rng;

/// Builds a text of exactly `words` lowercase ASCII words of 1 to
/// `max_word_length` letters, separated by a mix of spaces, tabs and newlines.
pub fn generate_corpus(rng: &mut impl Rng, words: usize, max_word_length: usize) -> String {
    let max_word_length = max_word_length.max(1);
    let mut corpus = String::new();
    for i in 0..words {
        if i > 0 {
            corpus.push_str(match rng.random_range(0..20) {
                0 => "\n",
                1 => "\t",
                2 => "  ",
                _ => " ",
            });
        }
        let letters = rng.random_range(1..=max_word_length);
        corpus.extend((0..letters).map(|_| char::from(rng.random_range(b'a'..=b'z'))));
    }
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_corpus_has_requested_word_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let corpus = generate_corpus(&mut rng, 500, 12);
        assert_eq!(corpus.split_whitespace().count(), 500);
    }

    #[test]
    fn test_words_are_bounded_lowercase_ascii() {
        let mut rng = StdRng::seed_from_u64(7);
        let corpus = generate_corpus(&mut rng, 300, 8);
        for word in corpus.split_whitespace() {
            assert!(!word.is_empty() && word.len() <= 8);
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_zero_max_length_still_yields_words() {
        let mut rng = StdRng::seed_from_u64(1);
        let corpus = generate_corpus(&mut rng, 5, 0);
        assert_eq!(corpus.split_whitespace().count(), 5);
    }
}
