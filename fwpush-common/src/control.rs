// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Backend seams for the FTP control connection.
//!
//! The host tool implements these traits on top of a real FTP client; tests
//! implement them with scripted in-memory connections.

use std::io::Write;
use std::time::Duration;

use crate::error::{BoxError, CommandError};
use crate::probe;

/// Raw FTP commands on an open control connection.
///
/// Implementations do not track state; [`crate::session::FtpSession`] does.
pub trait FtpControl {
    /// Data connection returned by [`FtpControl::put_stream`].
    type DataSink: Write;

    /// `USER`/`PASS`, then switch to binary transfer type.
    fn login(&mut self, user: &str, password: &str) -> Result<(), BoxError>;

    /// `CWD`. A 5xx reply is [`CommandError::Rejected`]; anything that leaves
    /// the connection unusable is [`CommandError::Connection`].
    fn cwd(&mut self, path: &str) -> Result<(), CommandError>;

    /// Open a data connection and issue `STOR name`.
    fn put_stream(&mut self, name: &str) -> Result<Self::DataSink, BoxError>;

    /// Close the data connection and wait for the server's transfer reply.
    fn finalize_put(&mut self, sink: Self::DataSink) -> Result<(), BoxError>;

    /// `QUIT` and shut down the control connection.
    fn quit(&mut self) -> Result<(), BoxError>;
}

/// Opens control connections.
pub trait Connector {
    type Control: FtpControl;

    /// Reachability probe run before the real connection is opened.
    fn is_reachable(&self, host: &str, port: u16, timeout: Duration) -> bool {
        probe::is_reachable(host, port, timeout)
    }

    /// Open a control connection and read the server greeting.
    fn connect(&self, host: &str, port: u16, timeout: Duration)
        -> Result<Self::Control, BoxError>;
}
