// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::Environment;
use crate::registry::sqlite::SCHEMA;
use crate::registry::{IndexMode, JobEntry, JobStatus, Registry};

/// A running job created and last touched at a fixed time
pub fn sample_entry(blah_id: &str, batch_id: &str) -> JobEntry {
    let at = 1_700_000_000;
    JobEntry {
        blah_id: blah_id.to_string(),
        batch_id: batch_id.to_string(),
        status: JobStatus::Running,
        exit_code: 0,
        exit_reason: String::new(),
        wn_addr: String::new(),
        submitter: 1000,
        user_prefix: String::new(),
        proxy_link: String::new(),
        subject_hash: String::new(),
        renew_proxy: false,
        cdate: at,
        mdate: at,
        udate: at,
    }
}

/// Create a registry file holding `entries`
pub async fn create_test_registry(entries: &[JobEntry]) -> anyhow::Result<NamedTempFile> {
    let file = NamedTempFile::new()?;
    let options = SqliteConnectOptions::new().filename(file.path());
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::raw_sql(SCHEMA).execute(&pool).await?;

    for entry in entries {
        sqlx::query(
            r#"
            INSERT INTO jobs (blah_id, batch_id, status, exit_code, exit_reason, wn_addr, submitter,
                              user_prefix, proxy_link, subject_hash, renew_proxy, cdate, mdate, udate)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
        )
        .bind(&entry.blah_id)
        .bind(&entry.batch_id)
        .bind(entry.status.code())
        .bind(entry.exit_code)
        .bind(&entry.exit_reason)
        .bind(&entry.wn_addr)
        .bind(entry.submitter)
        .bind(&entry.user_prefix)
        .bind(&entry.proxy_link)
        .bind(&entry.subject_hash)
        .bind(entry.renew_proxy as i64)
        .bind(entry.cdate)
        .bind(entry.mdate)
        .bind(entry.udate)
        .execute(&pool)
        .await?;
    }

    pool.close().await;
    Ok(file)
}

/// Write a configuration file with the given `name=value` body
pub fn create_test_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(contents.as_bytes()).expect("Failed to write temp config");
    file
}

/// Environment made of exactly the given variables
pub fn test_env(vars: &[(&str, &str)]) -> BTreeMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Environment that remembers every variable asked for
pub struct RecordingEnv {
    vars: BTreeMap<String, String>,
    lookups: RefCell<Vec<String>>,
}

impl RecordingEnv {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self { vars: test_env(vars), lookups: RefCell::new(Vec::new()) }
    }

    /// Names looked up so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl Environment for RecordingEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        self.lookups.borrow_mut().push(key.to_string());
        self.vars.var(key)
    }
}

/// Registry kept in memory, for driving the lookup without a file
pub struct MemoryRegistry {
    pub mode: IndexMode,
    pub entries: Vec<JobEntry>,
    pub fail_with: Option<String>,
}

#[async_trait]
impl Registry for MemoryRegistry {
    fn index_mode(&self) -> IndexMode {
        self.mode
    }

    async fn get_entry(&self, key: &str) -> anyhow::Result<Option<JobEntry>> {
        if let Some(message) = &self.fail_with {
            return Err(anyhow::anyhow!("{message}"));
        }
        Ok(self
            .entries
            .iter()
            .find(|entry| match self.mode {
                IndexMode::BlahId => entry.blah_id == key,
                IndexMode::BatchId => entry.batch_id == key,
            })
            .cloned())
    }
}
