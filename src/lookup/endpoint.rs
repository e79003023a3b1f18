// SPDX-License-Identifier: GPL-3.0-only
use anyhow::Context;
use tracing::{debug, warn};

use crate::config::config::{NOTIFICATION_HOST_KEY, NOTIFICATION_PORT_KEY};
use crate::config::ConfigMap;
use crate::lookup::error::LookupError;

/// Node name of this machine, as reported by uname(2)
pub fn local_node_name() -> anyhow::Result<String> {
    let uts = nix::sys::utsname::uname().context("uname failed")?;
    Ok(uts.nodename().to_string_lossy().into_owned())
}

/// Resolve `host:port` of the asynchronous notification listener.
///
/// The port must be configured. The host falls back to `node_name()` when
/// `async_notification_host` is unset.
pub fn resolve_endpoint<F>(
    program: &str,
    config: &ConfigMap,
    node_name: F,
) -> Result<String, LookupError>
where
    F: FnOnce() -> anyhow::Result<String>,
{
    let port = config.get(NOTIFICATION_PORT_KEY).ok_or_else(|| LookupError::ConfigAccess {
        program: program.to_string(),
        key: NOTIFICATION_PORT_KEY,
    })?;

    let host = match config.get(NOTIFICATION_HOST_KEY) {
        Some(host) => host,
        None => node_name().map_err(|e| {
            warn!(error = %format!("{e:#}"), "Cannot determine local node name");
            LookupError::HostIdentity { program: program.to_string() }
        })?,
    };

    debug!(%host, %port, "Resolved notification endpoint");
    Ok(format!("{host}:{port}"))
}
