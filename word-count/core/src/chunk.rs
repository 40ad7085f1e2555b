// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// An owned, trimmed, non-empty slice of the input text.
///
/// A chunk is moved into exactly one worker, so two workers can never observe
/// the same chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    text: String,
}

impl Chunk {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// One worker's word count for its chunk, consumed once by aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialCount {
    pub worker_id: usize,
    pub value: u64,
}
