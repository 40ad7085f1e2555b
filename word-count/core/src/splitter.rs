// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Whitespace-respecting partitioning of a text into at most `n` chunks.
//!
//! The target chunk length is `text.len() / n` bytes. Each chunk boundary is
//! pushed forward to the next whitespace character so that no word is ever
//! split across two chunks. Pieces are trimmed; a piece that is only
//! whitespace is dropped, but still uses up one of the `n` slots.

use crate::chunk::Chunk;
use crate::error::{Result, WordCountError};

/// Splits `text` into at most `n` chunks, lazily.
///
/// Fails with [`WordCountError::InvalidArgument`] when `n` is zero. The check
/// happens here, before the iterator exists, so no chunk is ever produced for
/// an invalid request.
pub fn split_into_chunks(text: &str, n: usize) -> Result<Chunks<'_>> {
    if n == 0 {
        return Err(WordCountError::invalid_argument(
            "number of chunks must be greater than 0",
        ));
    }

    Ok(Chunks {
        text,
        target: text.len() / n,
        cursor: 0,
        remaining: n,
    })
}

/// Single-pass iterator over the chunks of a text.
#[derive(Debug)]
pub struct Chunks<'a> {
    text: &'a str,
    target: usize,
    cursor: usize,
    remaining: usize,
}

impl<'a> Chunks<'a> {
    /// Produces the next untrimmed piece, consuming one of the `n` slots.
    fn next_piece(&mut self) -> Option<&'a str> {
        let text = self.text;
        if self.remaining == 0 || self.cursor >= text.len() {
            return None;
        }
        self.remaining -= 1;

        let mut end = self.cursor + self.target;
        if end >= text.len() {
            return Some(self.take_rest());
        }

        // The tentative end may land inside a multi-byte character
        while !text.is_char_boundary(end) {
            end += 1;
        }

        match text[end..].char_indices().find(|(_, c)| c.is_whitespace()) {
            Some((offset, boundary)) => {
                let end = end + offset;
                let piece = &text[self.cursor..end];
                self.cursor = end + boundary.len_utf8();
                Some(piece)
            }
            None => Some(self.take_rest()),
        }
    }

    fn take_rest(&mut self) -> &'a str {
        let rest = &self.text[self.cursor..];
        self.cursor = self.text.len();
        self.remaining = 0;
        rest
    }
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(piece) = self.next_piece() {
            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                return Some(Chunk::new(trimmed));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor >= self.text.len() {
            (0, Some(0))
        } else {
            (0, Some(self.remaining))
        }
    }
}
