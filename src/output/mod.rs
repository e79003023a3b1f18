// SPDX-License-Identifier: GPL-3.0-only
//! Status-line protocol on standard output.
//!
//! Callers branch on the first character: `0` followed directly by the
//! record, or `1ERROR ` followed by a message. The endpoint report is the
//! one unprefixed line. Diagnostics never go to a separate stream.

use std::io::Write;
use tracing::error;

use crate::lookup::LookupError;

#[derive(Debug)]
pub enum Outcome {
    /// Serialized registry entry
    Record(String),
    /// `host:port` of the notification listener
    Endpoint(String),
    Failed(LookupError),
}

impl Outcome {
    pub fn line(&self) -> String {
        match self {
            Outcome::Record(ad) => format!("0{ad}"),
            Outcome::Endpoint(endpoint) => endpoint.clone(),
            Outcome::Failed(e) => format!("1ERROR {e}"),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Record(_) | Outcome::Endpoint(_) => 0,
            Outcome::Failed(e) => e.exit_code(),
        }
    }
}

/// Write the outcome's single line to `out` and return the process exit code
pub fn emit<W: Write>(outcome: &Outcome, out: &mut W) -> u8 {
    if let Err(e) = writeln!(out, "{}", outcome.line()).and_then(|()| out.flush()) {
        error!(error = %e, "Failed to write result");
    }
    outcome.exit_code()
}
