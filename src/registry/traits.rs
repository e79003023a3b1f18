// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use crate::registry::models::{IndexMode, JobEntry};

#[async_trait]
pub trait Registry: Send + Sync {
    /// Key-space `get_entry` looks keys up in
    fn index_mode(&self) -> IndexMode;

    /// Get the entry matching `key` in the registry's index mode
    async fn get_entry(&self, key: &str) -> anyhow::Result<Option<JobEntry>>;
}
