// SPDX-License-Identifier: GPL-3.0-only
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the diagnostic filter directive
pub const LOG_FILTER_ENV: &str = "BLAH_LKUP_LOG";

/// Initialize tracing subscriber.
///
/// Standard output carries the lookup protocol, so diagnostics go to
/// standard error and are disabled unless `BLAH_LKUP_LOG` asks for them.
pub fn setup_logging(directive: Option<&str>) -> anyhow::Result<()> {
    let filter = directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_installs_once() {
        // An unparsable directive falls back to "off" rather than failing
        assert!(setup_logging(Some("not a [valid directive")).is_ok());
        assert!(setup_logging(Some("debug")).is_err());
    }
}
