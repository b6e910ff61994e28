// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! End-to-end upload run: configuration, pre-flight checks, session, uploads.
//!
//! Each step gates the next. Configuration, validation, reachability and
//! session failures end the run; a failed upload only affects its own file
//! unless the control connection itself was lost.
//! Nothing here returns an error to the caller: failures are logged and
//! summarised in a [`RunReport`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Config;
use crate::control::{Connector, FtpControl};
use crate::error::{ErrorScope, UploadError};
use crate::logger::Logger;
use crate::progress::{ProgressReporter, TransferProgress};
use crate::session::{FtpSession, CONNECT_TIMEOUT};
use crate::upload::upload;
use crate::validate::{validate, FileRole};

/// Timeout of the reachability probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Step at which a run was aborted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Config,
    Validation,
    Reachability,
    Session,
}

/// Result of uploading one file.
#[derive(Debug)]
pub struct FileReport {
    pub role: FileRole,
    pub path: PathBuf,
    pub result: Result<TransferProgress, UploadError>,
}

/// What happened during a run.
#[derive(Debug)]
pub enum RunReport {
    /// The run stopped before any file was uploaded.
    Aborted { stage: Stage, error: UploadError },
    /// The session was set up and uploads were attempted in order. A
    /// run-scoped failure stops the remaining uploads, so `files` can be short.
    Finished { files: Vec<FileReport> },
}

impl RunReport {
    /// Number of files stored successfully.
    pub fn uploaded(&self) -> usize {
        match self {
            Self::Aborted { .. } => 0,
            Self::Finished { files } => files.iter().filter(|f| f.result.is_ok()).count(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Finished { files } if files.iter().all(|f| f.result.is_ok()))
    }
}

/// Load the configuration at `config_path` and run the upload.
pub fn run<K: Connector>(
    config_path: &Path,
    connector: &K,
    reporter: &mut dyn ProgressReporter,
    log: &Logger,
) -> RunReport {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            log.error(&e);
            log.error(format!(
                "Failed to load configuration from {}.",
                config_path.display()
            ));
            return RunReport::Aborted {
                stage: Stage::Config,
                error: e,
            };
        }
    };
    run_with_config(&config, connector, reporter, log)
}

/// Upload the firmware and storage files named by `config`.
pub fn run_with_config<K: Connector>(
    config: &Config,
    connector: &K,
    reporter: &mut dyn ProgressReporter,
    log: &Logger,
) -> RunReport {
    let files = [
        (FileRole::Firmware, config.firmware_file.as_path()),
        (FileRole::Storage, config.storage_file.as_path()),
    ];

    for (role, path) in files {
        if let Err(e) = validate(path, role) {
            log.error(&e);
            return RunReport::Aborted {
                stage: Stage::Validation,
                error: e,
            };
        }
    }

    if !connector.is_reachable(&config.host, config.port, PROBE_TIMEOUT) {
        let e = UploadError::Unreachable {
            host: config.host.clone(),
            port: config.port,
        };
        log.error(&e);
        return RunReport::Aborted {
            stage: Stage::Reachability,
            error: e,
        };
    }

    let connected = FtpSession::connect(connector, &config.host, config.port, CONNECT_TIMEOUT);
    let mut session = match connected {
        Ok(session) => session,
        Err(e) => {
            log.error(&e);
            return RunReport::Aborted {
                stage: Stage::Session,
                error: e,
            };
        }
    };

    let report = match session.authenticate(&config.user, &config.password) {
        Ok(()) => {
            log.info(format!("Connection to {} established.", config.host));
            let mut reports = Vec::with_capacity(files.len());
            for (role, path) in files {
                let result = upload(&mut session, path, &config.remote_folder, reporter, log);
                let fatal = matches!(&result, Err(e) if e.scope() == ErrorScope::Run);
                reports.push(FileReport {
                    role,
                    path: path.to_path_buf(),
                    result,
                });
                if fatal {
                    break;
                }
            }
            RunReport::Finished { files: reports }
        }
        Err(e) => {
            log.error(&e);
            RunReport::Aborted {
                stage: Stage::Session,
                error: e,
            }
        }
    };

    close(&mut session, log);

    if matches!(report, RunReport::Finished { .. }) {
        log.info(format!(
            "Uploaded {} of {} files.",
            report.uploaded(),
            files.len()
        ));
    }
    report
}

fn close<C: FtpControl>(session: &mut FtpSession<C>, log: &Logger) {
    if let Err(e) = session.close() {
        log.warn(&e);
    }
}
