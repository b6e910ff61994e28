// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Transfer progress accounting and the observer interface for displaying it.

/// Per-file progress of one transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferProgress {
    /// File size, known before the first byte is sent.
    pub total: u64,
    /// Bytes accepted by the data connection so far.
    pub transferred: u64,
}

impl TransferProgress {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            transferred: 0,
        }
    }

    pub fn advance(&mut self, bytes: u64) {
        self.transferred = self.transferred.saturating_add(bytes);
    }

    pub fn is_complete(&self) -> bool {
        self.transferred == self.total
    }
}

/// How a transfer ended, as far as the display is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed,
    Failed,
}

/// Observer notified while a file is being stored.
///
/// Reporters only display; they cannot fail a transfer.
pub trait ProgressReporter {
    /// A transfer of `total` bytes named `name` is starting.
    fn begin(&mut self, name: &str, total: u64);

    /// `bytes` more bytes were sent. Not cumulative.
    fn on_bytes_sent(&mut self, bytes: u64);

    fn finish(&mut self, outcome: TransferOutcome);
}

/// Reporter that shows nothing.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn begin(&mut self, _name: &str, _total: u64) {}

    fn on_bytes_sent(&mut self, _bytes: u64) {}

    fn finish(&mut self, _outcome: TransferOutcome) {}
}

/// Event seen by a [`RecordingReporter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    Begin { name: String, total: u64 },
    BytesSent(u64),
    Finish(TransferOutcome),
}

/// Reporter that records every notification, for tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ProgressEvent>,
}

impl RecordingReporter {
    /// Chunk sizes in the order they were reported.
    pub fn chunks(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ProgressEvent::BytesSent(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Running total after each chunk.
    pub fn cumulative(&self) -> Vec<u64> {
        self.chunks()
            .into_iter()
            .scan(0u64, |sum, n| {
                *sum += n;
                Some(*sum)
            })
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn begin(&mut self, name: &str, total: u64) {
        self.events.push(ProgressEvent::Begin {
            name: name.to_string(),
            total,
        });
    }

    fn on_bytes_sent(&mut self, bytes: u64) {
        self.events.push(ProgressEvent::BytesSent(bytes));
    }

    fn finish(&mut self, outcome: TransferOutcome) {
        self.events.push(ProgressEvent::Finish(outcome));
    }
}
