// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::sync::mpsc;
use word_count_core::{ResultChannel, ResultSender};

pub struct TokioResultChannel<T> {
    tx: mpsc::Sender<T>,
    rx: mpsc::Receiver<T>,
}

pub struct TokioResultSender<T> {
    pub(crate) tx: mpsc::Sender<T>,
}

impl<T> Clone for TokioResultSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Send + 'static> ResultSender<T> for TokioResultSender<T> {
    // Never waits: the channel is sized for one result per worker and may be
    // called from outside any async context
    fn send(&self, value: T) -> bool {
        self.tx.try_send(value).is_ok()
    }
}

impl<T: Send + 'static> ResultChannel<T> for TokioResultChannel<T> {
    type Sender = TokioResultSender<T>;

    fn bounded(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self { tx, rx }
    }

    fn sender(&self) -> Self::Sender {
        TokioResultSender {
            tx: self.tx.clone(),
        }
    }

    fn try_next(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}
