// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::chunk::{Chunk, PartialCount};
use crate::result_channel::ResultSender;

/// Counts whitespace-delimited words.
pub fn count_words(chunk: &str) -> usize {
    chunk.split_whitespace().count()
}

/// Worker body: counts the words of `chunk` and pushes exactly one
/// [`PartialCount`] through `sender`.
pub fn word_count_task<S>(worker_id: usize, chunk: Chunk, sender: S)
where
    S: ResultSender<PartialCount>,
{
    let value = count_words(chunk.as_str()) as u64;
    tracing::debug!(worker_id, words = value, bytes = chunk.len(), "chunk counted");

    if !sender.send(PartialCount { worker_id, value }) {
        tracing::warn!(worker_id, "result channel closed before partial count was sent");
    }
}
