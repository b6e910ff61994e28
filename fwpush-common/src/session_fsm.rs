// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! FTP session state machine - pure logic without network dependencies.
//!
//! This module decides which operations a session may perform in a given state
//! and what state it ends up in afterwards. [`crate::session::FtpSession`]
//! consults it before every command so the rules can be tested on their own.

/// Lifecycle state of one FTP control connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
    Authenticated,
    DirectorySelected,
    Closed,
}

/// Operations issued on a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Connect,
    Authenticate,
    SelectDirectory,
    Store,
    Close,
}

/// Result of an attempted operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

/// Check whether `op` may be attempted in `state`.
pub fn permits(state: SessionState, op: Operation) -> bool {
    use SessionState::*;

    match op {
        Operation::Connect => state == Disconnected,
        Operation::Authenticate => state == Connected,
        Operation::SelectDirectory => matches!(state, Authenticated | DirectorySelected),
        Operation::Store => state == DirectorySelected,
        Operation::Close => state != Closed,
    }
}

/// Compute the state after `op` was attempted in `state`.
///
/// Operations that `state` does not permit leave it unchanged. A failed
/// directory change drops back to `Authenticated`: the connection is still
/// usable, but the next file must select its folder again. `Close` always ends
/// in `Closed`, whether or not the server acknowledged it.
pub fn transition(state: SessionState, op: Operation, outcome: Outcome) -> SessionState {
    use SessionState::*;

    if !permits(state, op) {
        return state;
    }

    match (op, outcome) {
        (Operation::Close, _) => Closed,
        (Operation::Connect, Outcome::Succeeded) => Connected,
        (Operation::Connect, Outcome::Failed) => Disconnected,
        (Operation::Authenticate, Outcome::Succeeded) => Authenticated,
        (Operation::Authenticate, Outcome::Failed) => Connected,
        (Operation::SelectDirectory, Outcome::Succeeded) => DirectorySelected,
        (Operation::SelectDirectory, Outcome::Failed) => Authenticated,
        // The working directory does not change on STOR, even a failed one.
        (Operation::Store, _) => DirectorySelected,
    }
}

/// Whether a session in `state` has passed login.
pub fn is_authenticated(state: SessionState) -> bool {
    matches!(
        state,
        SessionState::Authenticated | SessionState::DirectorySelected
    )
}
