// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Chunked upload of one local file into a remote folder.

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::control::FtpControl;
use crate::error::UploadError;
use crate::logger::Logger;
use crate::progress::{ProgressReporter, TransferOutcome, TransferProgress};
use crate::session::FtpSession;

/// Bytes written to the data connection per chunk.
pub const CHUNK_SIZE: usize = 1024;

/// Store `local_path` in `remote_folder` under its base name.
///
/// The folder is selected first; if that fails the file is skipped and the
/// session is left usable for the next file. Afterwards the file is streamed in
/// [`CHUNK_SIZE`] chunks and `reporter` is told the size of each one. Nothing is
/// retried and a partially stored file is left on the server.
pub fn upload<C: FtpControl>(
    session: &mut FtpSession<C>,
    local_path: &Path,
    remote_folder: &str,
    reporter: &mut dyn ProgressReporter,
    log: &Logger,
) -> Result<TransferProgress, UploadError> {
    let result = upload_inner(session, local_path, remote_folder, reporter);
    match &result {
        Ok(progress) => log.info(format!(
            "File {} uploaded successfully ({} bytes).",
            local_path.display(),
            progress.transferred
        )),
        Err(e) => log.error(format!("Upload of {} failed: {}", local_path.display(), e)),
    }
    result
}

fn upload_inner<C: FtpControl>(
    session: &mut FtpSession<C>,
    local_path: &Path,
    remote_folder: &str,
    reporter: &mut dyn ProgressReporter,
) -> Result<TransferProgress, UploadError> {
    let file_label = local_path.display().to_string();
    let name = local_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| UploadError::transfer(file_label.as_str(), "path has no file name"))?;
    let total = fs::metadata(local_path)
        .map_err(|e| UploadError::transfer(file_label.as_str(), e))?
        .len();

    session.select_directory(remote_folder)?;

    let mut file =
        File::open(local_path).map_err(|e| UploadError::transfer(file_label.as_str(), e))?;

    reporter.begin(&name, total);
    let mut progress = TransferProgress::new(total);
    let result = store(session, &name, &mut file, &mut progress, reporter);
    reporter.finish(match result {
        Ok(()) => TransferOutcome::Completed,
        Err(_) => TransferOutcome::Failed,
    });
    result.map(|()| progress)
}

fn store<C: FtpControl>(
    session: &mut FtpSession<C>,
    name: &str,
    file: &mut File,
    progress: &mut TransferProgress,
    reporter: &mut dyn ProgressReporter,
) -> Result<(), UploadError> {
    let mut sink = session.begin_store(name)?;
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = match read_chunk(file, &mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                // Still collect the server's reply so the control connection
                // stays in step for the next file.
                let _ = session.finish_store(name, sink);
                return Err(UploadError::transfer(name, e));
            }
        };

        if let Err(e) = sink.write_all(&buf[..n]) {
            let _ = session.finish_store(name, sink);
            return Err(UploadError::transfer(name, e));
        }

        progress.advance(n as u64);
        reporter.on_bytes_sent(n as u64);
    }

    if let Err(e) = sink.flush() {
        let _ = session.finish_store(name, sink);
        return Err(UploadError::transfer(name, e));
    }
    session.finish_store(name, sink)
}

/// Fill `buf` as far as the file allows; only the last chunk is short.
fn read_chunk(file: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
