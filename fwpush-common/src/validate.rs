// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Pre-flight checks on the local image files.

use std::fmt;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::UploadError;

/// Which of the two images a path refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileRole {
    Firmware,
    Storage,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Firmware => f.write_str("firmware"),
            Self::Storage => f.write_str("storage"),
        }
    }
}

/// Check that `path` is a regular file this process can open for reading.
pub fn validate(path: &Path, role: FileRole) -> Result<(), UploadError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(UploadError::FileNotFound {
                role,
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(unreadable(path, role, e)),
    };

    if !metadata.is_file() {
        return Err(unreadable(path, role, "not a regular file"));
    }

    File::open(path).map_err(|e| unreadable(path, role, e))?;
    Ok(())
}

fn unreadable(path: &Path, role: FileRole, reason: impl ToString) -> UploadError {
    UploadError::FileUnreadable {
        role,
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
