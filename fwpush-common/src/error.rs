// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error taxonomy for the upload pipeline.
//!
//! Every failure carries a [`ErrorScope`] so the orchestrator can tell an error
//! that ends the whole run from one that only skips the current file.

use std::path::PathBuf;

use thiserror::Error;

use crate::session_fsm::{Operation, SessionState};
use crate::validate::FileRole;

/// Boxed error returned by control-connection backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// How far a failure reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// The run stops (after closing any open session).
    Run,
    /// Only the current file is skipped; the run continues.
    File,
}

/// Failure of a single command on the control connection.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The server answered with a permanent negative reply (5xx).
    #[error("{0}")]
    Rejected(String),
    /// No usable reply: I/O error, timeout or a closed connection.
    #[error(transparent)]
    Connection(BoxError),
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("cannot read configuration file {path}: {reason}")]
    ConfigMissing { path: PathBuf, reason: String },

    #[error("configuration file {path} is missing required keys: {}", .missing.join(", "))]
    ConfigIncomplete {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    #[error("{role} file {path} not found")]
    FileNotFound { role: FileRole, path: PathBuf },

    #[error("{role} file {path} is not readable: {reason}")]
    FileUnreadable {
        role: FileRole,
        path: PathBuf,
        reason: String,
    },

    #[error("FTP server {host}:{port} is unreachable")]
    Unreachable { host: String, port: u16 },

    #[error("failed to connect to FTP server {host}:{port}: {reason}")]
    Connect {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("login as '{user}' rejected: {reason}")]
    Auth { user: String, reason: String },

    #[error("cannot change to remote folder {folder}: {reason}")]
    Permission { folder: String, reason: String },

    #[error("failed to upload {file}: {reason}")]
    Transfer { file: String, reason: String },

    #[error("control connection lost: {reason}")]
    ConnectionLost { reason: String },

    #[error("failed to close FTP session: {reason}")]
    Close { reason: String },

    #[error("{operation:?} is not allowed while the session is {state:?}")]
    InvalidState {
        operation: Operation,
        state: SessionState,
    },
}

impl UploadError {
    /// Whether this failure ends the run or only the current file.
    pub fn scope(&self) -> ErrorScope {
        match self {
            Self::Permission { .. } | Self::Transfer { .. } => ErrorScope::File,
            _ => ErrorScope::Run,
        }
    }

    pub(crate) fn transfer(file: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transfer {
            file: file.into(),
            reason: reason.to_string(),
        }
    }
}
