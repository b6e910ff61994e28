// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::MakeWriter;

use fwpush_common::{
    Logger, ProgressReporter, SilentReporter, DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH,
};

use crate::ftp::FtpConnector;
use crate::progress::BarReporter;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "fwpush-upload")]
#[command(about = "Upload firmware and storage images to an FTP server")]
pub struct Cli {
    /// Configuration file with host, credentials, remote folder and image paths
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log file, appended to on every run
    #[arg(short, long, default_value = DEFAULT_LOG_PATH)]
    pub log_file: PathBuf,

    /// Do not draw progress bars
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the upload run.
///
/// Upload failures are reported through the log only; the process still exits
/// successfully. Errors returned here come from setting up the log file or the
/// progress display.
pub fn run(cli: Cli) -> Result<()> {
    let (log, mut reporter): (Logger, Box<dyn ProgressReporter>) = if cli.quiet {
        (open_log(io::stderr, &cli.log_file)?, Box::new(SilentReporter))
    } else {
        let bars = BarReporter::new()?;
        (open_log(bars.console(), &cli.log_file)?, Box::new(bars))
    };

    fwpush_common::run(&cli.config, &FtpConnector, reporter.as_mut(), &log);
    Ok(())
}

fn open_log<W>(console: W, path: &Path) -> Result<Logger>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    Logger::console_and_file(console, path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
