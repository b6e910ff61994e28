// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Uploads a firmware image and a storage image to an FTP server.
//!
//! Usage:
//!   fwpush-upload
//!   fwpush-upload --config bench.json --log-file bench.log
//!   fwpush-upload --quiet

mod cli;
mod ftp;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
