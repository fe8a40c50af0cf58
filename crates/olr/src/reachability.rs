//! Network reachability checks made before a lookup request is sent.
use std::{
    net::{TcpStream, ToSocketAddrs},
    time::Duration,
};

use log::debug;

/// Host probed by the default [`TcpReachability`].
pub const DEFAULT_HOST: &str = "openlibrary.org";
/// Port probed by the default [`TcpReachability`].
pub const DEFAULT_PORT: u16 = 443;
/// Connect timeout of the default [`TcpReachability`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Answers whether the network is currently reachable.
pub trait Reachability {
    /// Returns `true` when a request has a chance of reaching the API.
    fn is_connected(&self) -> bool;
}

/// Reachability decided by opening (and immediately dropping) a TCP connection to a host.
#[derive(Clone, Debug)]
pub struct TcpReachability {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpReachability {
    /// Probes `host:port`, giving up on each resolved address after `timeout`.
    pub fn new<S: Into<String>>(host: S, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }
}

impl Default for TcpReachability {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT)
    }
}

impl Reachability for TcpReachability {
    fn is_connected(&self) -> bool {
        let addrs = match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                debug!("Cannot resolve '{}': {e}", self.host);
                return false;
            }
        };

        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => {
                    debug!("Reached {addr}");
                    return true;
                }
                Err(e) => debug!("Cannot reach {addr}: {e}"),
            }
        }
        false
    }
}

#[cfg(test)]
pub(crate) use test::{Offline, Online};
