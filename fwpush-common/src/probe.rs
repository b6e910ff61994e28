// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! TCP reachability probe.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Check that something accepts TCP connections on `host:port`.
///
/// Every resolved address is tried in turn with `timeout`. Resolution errors,
/// refused connections and timeouts all count as unreachable. The probe socket
/// is closed immediately. A positive answer does not guarantee that the real
/// session will succeed.
pub fn is_reachable(host: &str, port: u16, timeout: Duration) -> bool {
    let addrs = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(_) => return false,
    };

    addrs
        .into_iter()
        .any(|addr| TcpStream::connect_timeout(&addr, timeout).is_ok())
}
