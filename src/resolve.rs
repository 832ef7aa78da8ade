//! Array hostname resolution check
//!
//! The array name must resolve before any request is attempted. Accepted forms:
//! `host`, `host:port`, `[v6addr]:port` and a bare IPv6 literal.

use crate::error::{CollectorError, Result};
use std::io;
use std::net::SocketAddr;
use tokio::net::lookup_host;
use tracing::debug;

/// Resolve `name`, returning every address it maps to
pub async fn resolve_array(name: &str, default_port: u16) -> Result<Vec<SocketAddr>> {
    let resolution_error = |source: io::Error| CollectorError::Resolution {
        host: name.to_string(),
        source,
    };

    let (host, port) = split_host_port(name, default_port).ok_or_else(|| {
        resolution_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "malformed host or port",
        ))
    })?;

    let addrs: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(resolution_error)?
        .collect();

    if addrs.is_empty() {
        return Err(resolution_error(io::Error::new(
            io::ErrorKind::NotFound,
            "no addresses returned",
        )));
    }

    debug!("{} resolved to {:?}", name, addrs);
    Ok(addrs)
}

/// Split `name` into host and port. Returns `None` for malformed input.
pub fn split_host_port(name: &str, default_port: u16) -> Option<(&str, u16)> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(rest) = name.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        return match tail {
            "" => Some((host, default_port)),
            _ => Some((host, tail.strip_prefix(':')?.parse().ok()?)),
        };
    }

    match name.matches(':').count() {
        0 => Some((name, default_port)),
        1 => {
            let (host, port) = name.rsplit_once(':')?;
            if host.is_empty() {
                return None;
            }
            Some((host, port.parse().ok()?))
        }
        // Bare IPv6 literal
        _ => Some((name, default_port)),
    }
}
