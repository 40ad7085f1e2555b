// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crossbeam_channel::{Receiver, Sender};
use word_count_core::{ResultChannel, ResultSender};

pub struct CrossbeamResultChannel<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
}

pub struct CrossbeamResultSender<T> {
    tx: Sender<T>,
}

impl<T> Clone for CrossbeamResultSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Send + 'static> ResultSender<T> for CrossbeamResultSender<T> {
    fn send(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

impl<T: Send + 'static> ResultChannel<T> for CrossbeamResultChannel<T> {
    type Sender = CrossbeamResultSender<T>;

    fn bounded(capacity: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        Self { tx, rx }
    }

    fn sender(&self) -> Self::Sender {
        CrossbeamResultSender {
            tx: self.tx.clone(),
        }
    }

    fn try_next(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}
