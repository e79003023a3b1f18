// SPDX-License-Identifier: GPL-3.0-only
mod cli;
mod config;
mod logging;
mod lookup;
mod output;
mod registry;

#[cfg(test)]
mod test_helpers;

use std::ffi::OsString;
use std::process::ExitCode;

use config::{Environment, ProcessEnv};
use logging::{setup_logging, LOG_FILTER_ENV};
use lookup::local_node_name;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env = ProcessEnv;

    // Logging is best effort; a broken filter must not change the status line
    let directive = env.var(LOG_FILTER_ENV).and_then(|value| value.into_string().ok());
    let _ = setup_logging(directive.as_deref());

    let args: Vec<OsString> = std::env::args_os().collect();

    let outcome = lookup::run(&args, &env, local_node_name).await;

    let stdout = std::io::stdout();
    ExitCode::from(output::emit(&outcome, &mut stdout.lock()))
}
