// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! One authenticated FTP control connection.

use std::time::Duration;

use crate::control::{Connector, FtpControl};
use crate::error::{CommandError, UploadError};
use crate::session_fsm::{self, Operation, Outcome, SessionState};

/// Default timeout for opening the control connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// FTP session driven through the [`session_fsm`] rules.
///
/// A value only exists once the control connection is open, so it starts in
/// [`SessionState::Connected`]. It is closed at most once: explicitly through
/// [`FtpSession::close`], otherwise when dropped.
pub struct FtpSession<C: FtpControl> {
    control: C,
    state: SessionState,
    remote_dir: Option<String>,
}

impl<C: FtpControl> FtpSession<C> {
    /// Open the control connection to `host:port`.
    pub fn connect<K>(
        connector: &K,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self, UploadError>
    where
        K: Connector<Control = C>,
    {
        let control = connector
            .connect(host, port, timeout)
            .map_err(|e| UploadError::Connect {
                host: host.to_string(),
                port,
                reason: e.to_string(),
            })?;

        Ok(Self {
            control,
            state: session_fsm::transition(
                SessionState::Disconnected,
                Operation::Connect,
                Outcome::Succeeded,
            ),
            remote_dir: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        session_fsm::is_authenticated(self.state)
    }

    /// Working directory set by the last successful [`FtpSession::select_directory`].
    pub fn remote_dir(&self) -> Option<&str> {
        self.remote_dir.as_deref()
    }

    pub fn authenticate(&mut self, user: &str, password: &str) -> Result<(), UploadError> {
        self.check(Operation::Authenticate)?;
        let result = self
            .control
            .login(user, password)
            .map_err(|e| UploadError::Auth {
                user: user.to_string(),
                reason: e.to_string(),
            });
        self.advance(Operation::Authenticate, &result);
        result
    }

    /// Change into `folder`. On failure the session stays authenticated.
    ///
    /// A refusal by the server is [`UploadError::Permission`]; a failing
    /// connection is [`UploadError::ConnectionLost`], which ends the run.
    pub fn select_directory(&mut self, folder: &str) -> Result<(), UploadError> {
        self.check(Operation::SelectDirectory)?;
        let result = self
            .control
            .cwd(folder)
            .map_err(|e| match e {
                CommandError::Rejected(reason) => UploadError::Permission {
                    folder: folder.to_string(),
                    reason,
                },
                CommandError::Connection(e) => UploadError::ConnectionLost {
                    reason: e.to_string(),
                },
            });
        self.advance(Operation::SelectDirectory, &result);
        self.remote_dir = result.as_ref().ok().map(|_| folder.to_string());
        result
    }

    /// Start storing `name` in the selected directory.
    pub fn begin_store(&mut self, name: &str) -> Result<C::DataSink, UploadError> {
        self.check(Operation::Store)?;
        let result = self
            .control
            .put_stream(name)
            .map_err(|e| UploadError::transfer(name, e));
        self.advance(Operation::Store, &result);
        result
    }

    /// Close the data connection of `name` and wait for the server's reply.
    pub fn finish_store(&mut self, name: &str, sink: C::DataSink) -> Result<(), UploadError> {
        self.check(Operation::Store)?;
        let result = self
            .control
            .finalize_put(sink)
            .map_err(|e| UploadError::transfer(name, e));
        self.advance(Operation::Store, &result);
        result
    }

    /// Send `QUIT`. Does nothing on a session that is already closed.
    pub fn close(&mut self) -> Result<(), UploadError> {
        if !session_fsm::permits(self.state, Operation::Close) {
            return Ok(());
        }
        let result = self.control.quit().map_err(|e| UploadError::Close {
            reason: e.to_string(),
        });
        self.advance(Operation::Close, &result);
        self.remote_dir = None;
        result
    }

    fn check(&self, operation: Operation) -> Result<(), UploadError> {
        if session_fsm::permits(self.state, operation) {
            Ok(())
        } else {
            Err(UploadError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn advance<T>(&mut self, operation: Operation, result: &Result<T, UploadError>) {
        self.state = session_fsm::transition(self.state, operation, Outcome::of(result));
    }
}

impl<C: FtpControl> Drop for FtpSession<C> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
