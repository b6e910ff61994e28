// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Plain FTP control connection backed by `suppaftp`.

use std::io::Write;
use std::net::ToSocketAddrs;
use std::time::Duration;

use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};

use fwpush_common::{BoxError, CommandError, Connector, FtpControl};

/// Opens [`FtpControlStream`]s. The reachability probe is the default one.
pub struct FtpConnector;

impl Connector for FtpConnector {
    type Control = FtpControlStream;

    fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self::Control, BoxError> {
        let mut last_error: Option<BoxError> = None;

        for addr in (host, port).to_socket_addrs()? {
            match FtpStream::connect_timeout(addr, timeout) {
                Ok(stream) => return Ok(FtpControlStream { stream }),
                Err(e) => last_error = Some(e.into()),
            }
        }

        Err(last_error.unwrap_or_else(|| format!("no address found for {}", host).into()))
    }
}

/// Control connection to an FTP server.
pub struct FtpControlStream {
    stream: FtpStream,
}

impl FtpControl for FtpControlStream {
    type DataSink = Box<dyn Write>;

    fn login(&mut self, user: &str, password: &str) -> Result<(), BoxError> {
        self.stream.login(user, password)?;
        // Images must be stored byte for byte.
        self.stream.transfer_type(FileType::Binary)?;
        Ok(())
    }

    fn cwd(&mut self, path: &str) -> Result<(), CommandError> {
        self.stream.cwd(path).map_err(command_error)
    }

    fn put_stream(&mut self, name: &str) -> Result<Self::DataSink, BoxError> {
        let data = self.stream.put_with_stream(name)?;
        Ok(Box::new(data))
    }

    fn finalize_put(&mut self, sink: Self::DataSink) -> Result<(), BoxError> {
        self.stream.finalize_put_stream(sink)?;
        Ok(())
    }

    fn quit(&mut self) -> Result<(), BoxError> {
        self.stream.quit()?;
        Ok(())
    }
}

/// Only a permanent negative reply counts as a refusal; every other error
/// leaves the control connection in an unknown state.
fn command_error(e: FtpError) -> CommandError {
    match &e {
        FtpError::UnexpectedResponse(response) if is_permanent_negative(response.status.code()) => {
            CommandError::Rejected(e.to_string())
        }
        _ => CommandError::Connection(e.into()),
    }
}

fn is_permanent_negative(code: u32) -> bool {
    (500..600).contains(&code)
}
