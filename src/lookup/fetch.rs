// SPDX-License-Identifier: GPL-3.0-only
use tracing::{debug, warn};

use crate::lookup::error::LookupError;
use crate::registry::Registry;

/// Fetch `key` from an opened registry and render it as a ClassAd.
///
/// Unless `include_worker_node` is set the worker node address is cleared
/// before the record is rendered.
pub async fn fetch_record(
    registry: &dyn Registry,
    program: &str,
    key: &str,
    include_worker_node: bool,
) -> Result<String, LookupError> {
    let not_found = |detail: String| LookupError::NotFound {
        program: program.to_string(),
        key: key.to_string(),
        detail,
    };

    let mut entry = match registry.get_entry(key).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return Err(not_found("no matching entry".to_string())),
        Err(e) => {
            warn!(error = %format!("{e:#}"), %key, "Registry lookup failed");
            return Err(not_found(format!("{e:#}")));
        }
    };
    debug!(%key, mode = ?registry.index_mode(), blah_id = %entry.blah_id, "Found registry entry");

    if !include_worker_node {
        entry.redact_worker_node();
    }

    entry.to_classad().map_err(|_| LookupError::Serialization {
        program: program.to_string(),
    })
}
