// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Connection parameters loaded from the JSON configuration file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::UploadError;

/// Default FTP control port.
pub const DEFAULT_PORT: u16 = 21;

/// Keys that must be present and non-null.
pub const REQUIRED_KEYS: [&str; 6] = [
    "host",
    "user",
    "password",
    "remote_folder",
    "firmware_file",
    "storage_file",
];

/// Validated configuration. Immutable once loaded.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub remote_folder: String,
    pub firmware_file: PathBuf,
    pub storage_file: PathBuf,
}

// Missing keys deserialize to `None` so they can all be reported at once.
#[derive(Deserialize)]
struct RawConfig {
    host: Option<String>,
    user: Option<String>,
    password: Option<String>,
    remote_folder: Option<String>,
    firmware_file: Option<String>,
    storage_file: Option<String>,
    port: Option<u16>,
}

impl Config {
    /// Read and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, UploadError> {
        let text = fs::read_to_string(path).map_err(|e| UploadError::ConfigMissing {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&text, path)
    }

    /// Parse configuration text; `path` is only used in error messages.
    pub fn from_json(text: &str, path: &Path) -> Result<Self, UploadError> {
        let invalid = |reason: String| UploadError::ConfigMissing {
            path: path.to_path_buf(),
            reason,
        };
        let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
        // Derived visitors would also map a sequence onto the fields by position.
        if !value.is_object() {
            return Err(invalid("expected a JSON object".to_string()));
        }
        let raw: RawConfig = serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;

        let mut missing = Vec::new();
        let mut take = |key: &'static str, value: Option<String>| {
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };
        let host = take("host", raw.host);
        let user = take("user", raw.user);
        let password = take("password", raw.password);
        let remote_folder = take("remote_folder", raw.remote_folder);
        let firmware_file = take("firmware_file", raw.firmware_file);
        let storage_file = take("storage_file", raw.storage_file);

        if !missing.is_empty() {
            return Err(UploadError::ConfigIncomplete {
                path: path.to_path_buf(),
                missing,
            });
        }

        Ok(Self {
            host,
            port: raw.port.unwrap_or(DEFAULT_PORT),
            user,
            password,
            remote_folder,
            firmware_file: PathBuf::from(firmware_file),
            storage_file: PathBuf::from(storage_file),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("remote_folder", &self.remote_folder)
            .field("firmware_file", &self.firmware_file)
            .field("storage_file", &self.storage_file)
            .finish()
    }
}
