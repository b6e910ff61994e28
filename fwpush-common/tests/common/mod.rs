// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Scripted in-memory FTP backend shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use fwpush_common::{BoxError, CommandError, Connector, FtpControl};

/// Faults to inject.
#[derive(Clone, Debug, Default)]
pub struct Script {
    pub unreachable: bool,
    pub fail_connect: bool,
    pub fail_login: bool,
    /// Zero-based indices of `CWD` calls that are rejected.
    pub fail_cwd_calls: Vec<usize>,
    /// Zero-based indices of `CWD` calls during which the connection drops.
    pub drop_on_cwd_calls: Vec<usize>,
    /// File names whose data connection breaks after the first chunk.
    pub break_store_of: Vec<String>,
    pub fail_quit: bool,
}

/// Everything the backend was asked to do.
#[derive(Debug, Default)]
pub struct Calls {
    pub probes: usize,
    pub connects: usize,
    pub logins: Vec<(String, String)>,
    pub cwds: Vec<String>,
    /// Completed `STOR`s: (directory, name, content).
    pub stored: Vec<(String, String, Vec<u8>)>,
    /// Sizes of the writes per file name.
    pub writes: Vec<(String, usize)>,
    pub quits: usize,
}

impl Calls {
    pub fn network_activity(&self) -> bool {
        self.probes > 0 || self.connects > 0
    }

    pub fn stored_names(&self) -> Vec<String> {
        self.stored.iter().map(|(_, name, _)| name.clone()).collect()
    }
}

pub struct MockConnector {
    pub script: Script,
    pub calls: Rc<RefCell<Calls>>,
}

impl MockConnector {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: Rc::default(),
        }
    }

    pub fn calls(&self) -> std::cell::Ref<'_, Calls> {
        self.calls.borrow()
    }
}

impl Connector for MockConnector {
    type Control = MockControl;

    fn is_reachable(&self, _host: &str, _port: u16, _timeout: Duration) -> bool {
        self.calls.borrow_mut().probes += 1;
        !self.script.unreachable
    }

    fn connect(
        &self,
        host: &str,
        port: u16,
        _timeout: Duration,
    ) -> Result<MockControl, BoxError> {
        self.calls.borrow_mut().connects += 1;
        if self.script.fail_connect {
            return Err(format!("connection to {}:{} refused", host, port).into());
        }
        Ok(MockControl {
            script: self.script.clone(),
            calls: Rc::clone(&self.calls),
            cwd: "/".to_string(),
        })
    }
}

pub struct MockControl {
    script: Script,
    calls: Rc<RefCell<Calls>>,
    cwd: String,
}

impl FtpControl for MockControl {
    type DataSink = MockSink;

    fn login(&mut self, user: &str, password: &str) -> Result<(), BoxError> {
        self.calls
            .borrow_mut()
            .logins
            .push((user.to_string(), password.to_string()));
        if self.script.fail_login {
            return Err("530 Login incorrect.".into());
        }
        Ok(())
    }

    fn cwd(&mut self, path: &str) -> Result<(), CommandError> {
        let mut calls = self.calls.borrow_mut();
        let index = calls.cwds.len();
        calls.cwds.push(path.to_string());
        if self.script.drop_on_cwd_calls.contains(&index) {
            let reset = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer");
            return Err(CommandError::Connection(reset.into()));
        }
        if self.script.fail_cwd_calls.contains(&index) {
            return Err(CommandError::Rejected(
                "550 Failed to change directory.".to_string(),
            ));
        }
        self.cwd = path.to_string();
        Ok(())
    }

    fn put_stream(&mut self, name: &str) -> Result<MockSink, BoxError> {
        Ok(MockSink {
            name: name.to_string(),
            dir: self.cwd.clone(),
            data: Vec::new(),
            broken: self.script.break_store_of.iter().any(|n| n == name),
            calls: Rc::clone(&self.calls),
        })
    }

    fn finalize_put(&mut self, sink: MockSink) -> Result<(), BoxError> {
        if sink.broken {
            return Err("426 Connection closed; transfer aborted.".into());
        }
        self.calls
            .borrow_mut()
            .stored
            .push((sink.dir, sink.name, sink.data));
        Ok(())
    }

    fn quit(&mut self) -> Result<(), BoxError> {
        self.calls.borrow_mut().quits += 1;
        if self.script.fail_quit {
            return Err("421 Timeout.".into());
        }
        Ok(())
    }
}

pub struct MockSink {
    name: String,
    dir: String,
    data: Vec<u8>,
    broken: bool,
    calls: Rc<RefCell<Calls>>,
}

impl Write for MockSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken && !self.data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            ));
        }
        self.data.extend_from_slice(buf);
        self.calls
            .borrow_mut()
            .writes
            .push((self.name.clone(), buf.len()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Write a file of `len` patterned bytes into `dir`.
pub fn write_image(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, data).unwrap();
    path
}

/// Write a configuration file naming `firmware` and `storage`.
pub fn write_config(dir: &Path, firmware: &Path, storage: &Path) -> PathBuf {
    let path = dir.join("config.json");
    let json = serde_json::json!({
        "host": "10.0.0.5",
        "user": "u",
        "password": "p",
        "remote_folder": "/fw",
        "firmware_file": firmware,
        "storage_file": storage,
    });
    std::fs::write(&path, json.to_string()).unwrap();
    path
}
