// SPDX-License-Identifier: GPL-3.0-only
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
    Row,
};
use std::path::Path;
use crate::registry::{models::{IndexMode, JobEntry, JobStatus}, traits::Registry};
use tracing::{debug, info};

/// Layout of a registry file. The lookup tool never writes it; registry
/// owners (and the test fixtures) create it with this statement.
pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    blah_id TEXT PRIMARY KEY,
    batch_id TEXT NOT NULL,
    status INTEGER NOT NULL,
    exit_code INTEGER NOT NULL DEFAULT 0,
    exit_reason TEXT NOT NULL DEFAULT '',
    wn_addr TEXT NOT NULL DEFAULT '',
    submitter INTEGER NOT NULL DEFAULT 0,
    user_prefix TEXT NOT NULL DEFAULT '',
    proxy_link TEXT NOT NULL DEFAULT '',
    subject_hash TEXT NOT NULL DEFAULT '',
    renew_proxy INTEGER NOT NULL DEFAULT 0,
    cdate INTEGER NOT NULL,
    mdate INTEGER NOT NULL,
    udate INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS jobs_batch_id ON jobs (batch_id);
"#;

pub struct SqliteRegistry {
    pool: SqlitePool,
    mode: IndexMode,
}

impl SqliteRegistry {
    /// Open an existing registry file read-only
    pub async fn open(path: &Path, mode: IndexMode) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .with_context(|| format!("cannot open {}", path.display()))?;

        // An SQLite file without our table is not a registry
        if let Err(e) = sqlx::query("SELECT blah_id FROM jobs LIMIT 1")
            .fetch_optional(&pool)
            .await
        {
            pool.close().await;
            return Err(anyhow::Error::new(e)
                .context(format!("{} is not a job registry", path.display())));
        }

        info!(path = %path.display(), mode = ?mode, "Opened job registry");
        Ok(Self { pool, mode })
    }

    /// Release the underlying connection
    pub async fn close(self) {
        self.pool.close().await;
        debug!("Closed job registry");
    }

    fn job_entry_from_row(row: &SqliteRow) -> anyhow::Result<JobEntry> {
        Ok(JobEntry {
            blah_id: row.try_get("blah_id")?,
            batch_id: row.try_get("batch_id")?,
            status: JobStatus::from_code(row.try_get("status")?),
            exit_code: row.try_get("exit_code")?,
            exit_reason: row.try_get("exit_reason")?,
            wn_addr: row.try_get("wn_addr")?,
            submitter: row.try_get("submitter")?,
            user_prefix: row.try_get("user_prefix")?,
            proxy_link: row.try_get("proxy_link")?,
            subject_hash: row.try_get("subject_hash")?,
            renew_proxy: row.try_get::<i64, _>("renew_proxy")? != 0,
            cdate: row.try_get("cdate")?,
            mdate: row.try_get("mdate")?,
            udate: row.try_get("udate")?,
        })
    }
}

#[async_trait]
impl Registry for SqliteRegistry {
    fn index_mode(&self) -> IndexMode {
        self.mode
    }

    async fn get_entry(&self, key: &str) -> anyhow::Result<Option<JobEntry>> {
        let sql = match self.mode {
            IndexMode::BlahId => "SELECT * FROM jobs WHERE blah_id = ?1",
            // Batch ids can be reused by the batch system; newest record wins
            IndexMode::BatchId => {
                "SELECT * FROM jobs WHERE batch_id = ?1 ORDER BY mdate DESC LIMIT 1"
            }
        };

        let row = sqlx::query(sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::job_entry_from_row(&row)?)),
            None => Ok(None),
        }
    }
}
