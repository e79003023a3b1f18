// SPDX-License-Identifier: GPL-3.0-only
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::environment::Environment;

/// Full path of the configuration file, checked first
pub const CONFIG_LOCATION_ENV: &str = "BLAHPD_CONFIG_LOCATION";
/// Installation prefix; `etc/blah.config` below it is checked second
pub const BLAH_LOCATION_ENV: &str = "BLAH_LOCATION";
pub const SYSTEM_CONFIG_PATH: &str = "/etc/blah.config";

pub const REGISTRY_FILE_ENV: &str = "BLAH_JOB_REGISTRY_FILE";
pub const DEFAULT_REGISTRY_FILE: &str = "blah_job_registry.bjr";

pub const JOB_REGISTRY_KEY: &str = "job_registry";
pub const NOTIFICATION_PORT_KEY: &str = "async_notification_port";
pub const NOTIFICATION_HOST_KEY: &str = "async_notification_host";

/// Key/value pairs read from the BLAH configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigMap {
    values: BTreeMap<String, String>,
}

impl ConfigMap {
    /// Load the first configuration file found in the default locations.
    ///
    /// A missing or unreadable file is not an error: the lookup proceeds with
    /// every value unset.
    pub fn load(env: &dyn Environment) -> Self {
        for path in candidate_paths(env) {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), keys = config.values.len(), "Loaded configuration");
                    return config;
                }
                Err(e) => {
                    warn!(error = %format!("{e:#}"), "Ignoring unusable configuration file");
                    return Self::default();
                }
            }
        }

        debug!("No configuration file found, using defaults");
        Self::default()
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::parse(&contents))
    }

    /// Parse shell-style `name=value` lines.
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. Names and
    /// values are trimmed and one pair of matching quotes around the value is
    /// removed. A later assignment overrides an earlier one.
    pub fn parse(contents: &str) -> Self {
        let mut values = BTreeMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            values.insert(name.to_string(), unquote(value.trim()).to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn candidate_paths(env: &dyn Environment) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(location) = env.var(CONFIG_LOCATION_ENV) {
        paths.push(PathBuf::from(location));
    }
    if let Some(prefix) = env.var(BLAH_LOCATION_ENV) {
        paths.push(PathBuf::from(prefix).join("etc").join("blah.config"));
    }
    paths.push(PathBuf::from(SYSTEM_CONFIG_PATH));
    paths
}

/// Registry file to open: environment override, then `job_registry`, then
/// `$HOME/blah_job_registry.bjr` (`./` when HOME is unset).
pub fn registry_path(env: &dyn Environment, config: &ConfigMap) -> PathBuf {
    if let Some(path) = env.var(REGISTRY_FILE_ENV) {
        return PathBuf::from(path);
    }
    if let Some(path) = config.get(JOB_REGISTRY_KEY) {
        return PathBuf::from(path);
    }
    let home = env.var("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    home.join(DEFAULT_REGISTRY_FILE)
}
