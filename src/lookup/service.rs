// SPDX-License-Identifier: GPL-3.0-only
use std::ffi::OsString;
use tracing::{debug, info};

use crate::cli::parse_args;
use crate::config::{registry_path, ConfigMap, Environment};
use crate::lookup::endpoint::resolve_endpoint;
use crate::lookup::error::LookupError;
use crate::lookup::fetch::fetch_record;
use crate::output::Outcome;
use crate::registry::SqliteRegistry;

/// Run one invocation of the tool.
///
/// `node_name` is only consulted in endpoint mode, when no notification host
/// is configured.
pub async fn run<F>(args: &[OsString], env: &dyn Environment, node_name: F) -> Outcome
where
    F: FnOnce() -> anyhow::Result<String>,
{
    match execute(args, env, node_name).await {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!(error = %e, "Lookup failed");
            Outcome::Failed(e)
        }
    }
}

async fn execute<F>(
    args: &[OsString],
    env: &dyn Environment,
    node_name: F,
) -> Result<Outcome, LookupError>
where
    F: FnOnce() -> anyhow::Result<String>,
{
    let invocation = parse_args(args)?;
    let program = invocation.program.as_str();

    let config = ConfigMap::load(env);

    if invocation.report_endpoint {
        let endpoint = resolve_endpoint(program, &config, node_name)?;
        return Ok(Outcome::Endpoint(endpoint));
    }

    let Some(key) = invocation.key.as_deref() else {
        return Err(LookupError::Usage { program: program.to_string() });
    };

    let path = registry_path(env, &config);
    let registry = SqliteRegistry::open(&path, invocation.index_mode)
        .await
        .map_err(|e| LookupError::RegistryInit {
            program: program.to_string(),
            detail: format!("{e:#}"),
        })?;

    // The path has been consumed by the open; nothing else needs the config
    drop(config);

    info!(%key, mode = ?invocation.index_mode, "Looking up registry entry");
    let record = fetch_record(&registry, program, key, invocation.include_worker_node).await;
    registry.close().await;

    record.map(Outcome::Record)
}
