// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and upload pipeline for fwpush.
//!
//! The library holds everything that does not need a real FTP client:
//! configuration loading, pre-flight checks, the session state machine, the
//! chunked uploader and the run orchestration. The `fwpush-upload` binary plugs
//! a concrete control connection and progress bar into it through the
//! [`control`] and [`progress`] traits.

pub mod config;
pub mod control;
pub mod error;
pub mod logger;
pub mod probe;
pub mod progress;
pub mod run;
pub mod session;
pub mod session_fsm;
pub mod upload;
pub mod validate;

// Re-export commonly used types
pub use config::{Config, DEFAULT_PORT, REQUIRED_KEYS};
pub use control::{Connector, FtpControl};
pub use error::{BoxError, CommandError, ErrorScope, UploadError};
pub use logger::{Logger, MemoryLog};
pub use progress::{ProgressReporter, SilentReporter, TransferOutcome, TransferProgress};
pub use run::{run, run_with_config, FileReport, RunReport, Stage, PROBE_TIMEOUT};
pub use session::{FtpSession, CONNECT_TIMEOUT};
pub use session_fsm::{Operation, SessionState};
pub use upload::{upload, CHUNK_SIZE};
pub use validate::{validate, FileRole};

/// Configuration file read when no other path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Log file appended to when no other path is given.
pub const DEFAULT_LOG_PATH: &str = "upload.log";
