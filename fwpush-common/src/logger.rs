// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Event log shared by every stage of a run.
//!
//! A [`Logger`] is built once at startup and handed to each component by
//! reference. It owns a `tracing` dispatcher instead of installing a global
//! one, so tests can run side by side with their own capture. Every event
//! becomes one line of the form `<timestamp> - <LEVEL> - <message>`, in
//! practice on the console and appended to a log file. Tests capture lines
//! with a [`MemoryLog`] instead.

use std::fmt::{self, Display};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::dispatcher::{self, Dispatch};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Timestamp layout of each line, e.g. `2026-10-18 14:03:27,512`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Local wall-clock time in [`TIMESTAMP_FORMAT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// `<timestamp> - <LEVEL> - <message>` event layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineFormat<T = LocalTime> {
    timer: T,
}

impl<S, N, T> FormatEvent<S, N> for LineFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        write!(writer, " - {} - ", level_name(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: &Level) -> &'static str {
    if *level == Level::WARN {
        "WARNING"
    } else {
        level.as_str()
    }
}

/// Process-scoped logging handle.
pub struct Logger {
    dispatch: Dispatch,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger without output; events are dropped.
    pub fn new() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Logger writing every line through `writer`.
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(line_layer(writer));
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Logger writing to `console` and appending to the file at `path`.
    pub fn console_and_file<W>(console: W, path: &Path) -> io::Result<Self>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(line_layer(console))
            .with(line_layer(Mutex::new(file)));
        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// Logger writing into a buffer readable through the returned handle.
    pub fn memory() -> (Self, MemoryLog) {
        let log = MemoryLog::default();
        (Self::with_writer(log.clone()), log)
    }

    pub fn info(&self, message: impl Display) {
        dispatcher::with_default(&self.dispatch, || tracing::info!("{}", message));
    }

    pub fn warn(&self, message: impl Display) {
        dispatcher::with_default(&self.dispatch, || tracing::warn!("{}", message));
    }

    pub fn error(&self, message: impl Display) {
        dispatcher::with_default(&self.dispatch, || tracing::error!("{}", message));
    }
}

fn line_layer<S, W>(writer: W) -> impl tracing_subscriber::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'a> MakeWriter<'a> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(LineFormat::<LocalTime>::default())
        .with_writer(writer)
}

/// Log lines captured in memory.
#[derive(Clone, Default)]
pub struct MemoryLog(Arc<Mutex<Vec<u8>>>);

impl MemoryLog {
    pub fn contents(&self) -> String {
        match self.0.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => String::new(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Lines logged at `level`.
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        let marker = format!(" - {} - ", level_name(&level));
        self.lines()
            .into_iter()
            .filter(|line| line.contains(&marker))
            .collect()
    }
}

impl Write for MemoryLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryLog {
    type Writer = MemoryLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
