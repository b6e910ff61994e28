// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Terminal progress bar for transfers.

use std::io::{self, Write};

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing_subscriber::fmt::MakeWriter;

use fwpush_common::{ProgressReporter, TransferOutcome};

/// Draws one bar per file: bytes sent, total, rate and ETA.
pub struct BarReporter {
    bars: MultiProgress,
    style: ProgressStyle,
    bar: Option<ProgressBar>,
}

impl BarReporter {
    pub fn new() -> Result<Self> {
        let style = ProgressStyle::default_bar()
            .template(
                "{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({binary_bytes_per_sec}, {eta})",
            )?
            .progress_chars("#>-");
        Ok(Self {
            bars: MultiProgress::new(),
            style,
            bar: None,
        })
    }

    /// Console writer for log lines that clears the bars while it prints.
    pub fn console(&self) -> BarConsole {
        BarConsole {
            bars: self.bars.clone(),
        }
    }
}

/// Writes to stderr with the progress bars suspended.
#[derive(Clone)]
pub struct BarConsole {
    bars: MultiProgress,
}

impl Write for BarConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bars.suspend(|| io::stderr().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for BarConsole {
    type Writer = BarConsole;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl ProgressReporter for BarReporter {
    fn begin(&mut self, name: &str, total: u64) {
        let bar = self.bars.add(ProgressBar::new(total));
        bar.set_style(self.style.clone());
        bar.set_message(name.to_string());
        self.bar = Some(bar);
    }

    fn on_bytes_sent(&mut self, bytes: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(bytes);
        }
    }

    fn finish(&mut self, outcome: TransferOutcome) {
        if let Some(bar) = self.bar.take() {
            match outcome {
                TransferOutcome::Completed => bar.finish(),
                TransferOutcome::Failed => bar.abandon(),
            }
        }
    }
}
