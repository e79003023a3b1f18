// SPDX-License-Identifier: GPL-3.0-only
use std::ffi::OsString;

use crate::lookup::LookupError;
use crate::registry::IndexMode;

const DEFAULT_PROGRAM: &str = "blah_job_registry_lkup";

/// What a single run of the tool was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// argv[0], used as context in error messages
    pub program: String,
    pub index_mode: IndexMode,
    /// `-w`: keep the worker node address in the printed record
    pub include_worker_node: bool,
    /// `-n`: print the notification endpoint instead of looking anything up
    pub report_endpoint: bool,
    /// Lookup key; only optional when `report_endpoint` is set
    pub key: Option<String>,
}

/// Parse `argv` (including the program name).
///
/// Leading tokens starting with `-` are single-letter switches; only the
/// letter right after the dash counts and unknown letters are ignored. The
/// first other token is the key and anything after it is ignored. A key that
/// is not valid UTF-8 cannot match a registry entry and is a usage error.
pub fn parse_args(args: &[OsString]) -> Result<Invocation, LookupError> {
    let program = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    if args.len() < 2 {
        return Err(LookupError::Usage { program });
    }

    let mut invocation = Invocation {
        program,
        index_mode: IndexMode::BlahId,
        include_worker_node: false,
        report_endpoint: false,
        key: None,
    };

    let mut raw_key = None;
    for arg in &args[1..] {
        let bytes = arg.as_encoded_bytes();
        if bytes.first() != Some(&b'-') {
            raw_key = Some(arg);
            break;
        }
        match bytes.get(1) {
            Some(b'b') => invocation.index_mode = IndexMode::BatchId,
            Some(b'n') => invocation.report_endpoint = true,
            Some(b'w') => invocation.include_worker_node = true,
            _ => {}
        }
    }

    // Endpoint mode never uses the key, so an unusable one doesn't matter there
    invocation.key = raw_key.and_then(|key| key.to_str()).map(str::to_string);
    if invocation.key.is_none() && !invocation.report_endpoint {
        return Err(LookupError::Usage { program: invocation.program });
    }

    Ok(invocation)
}
