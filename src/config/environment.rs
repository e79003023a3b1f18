// SPDX-License-Identifier: GPL-3.0-only
use std::collections::BTreeMap;
use std::ffi::OsString;

/// Source of environment variables.
///
/// Values are raw `OsString`s: paths taken from the environment must reach
/// the filesystem byte for byte.
pub trait Environment {
    fn var(&self, key: &str) -> Option<OsString>;
}

/// The environment of the running process
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

impl Environment for BTreeMap<String, OsString> {
    fn var(&self, key: &str) -> Option<OsString> {
        self.get(key).cloned()
    }
}
