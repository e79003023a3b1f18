// SPDX-License-Identifier: GPL-3.0-only

/// Key-space used to look entries up in the registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// Internally assigned BLAH job id
    #[default]
    BlahId,
    /// Batch-system job id
    BatchId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Unexpanded,
    Idle,
    Running,
    Removed,
    Completed,
    Held,
    SubmissionError,
    /// Any code the batch system reports that we don't know by name
    Other(i64),
}

impl JobStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => JobStatus::Unexpanded,
            1 => JobStatus::Idle,
            2 => JobStatus::Running,
            3 => JobStatus::Removed,
            4 => JobStatus::Completed,
            5 => JobStatus::Held,
            6 => JobStatus::SubmissionError,
            other => JobStatus::Other(other),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            JobStatus::Unexpanded => 0,
            JobStatus::Idle => 1,
            JobStatus::Running => 2,
            JobStatus::Removed => 3,
            JobStatus::Completed => 4,
            JobStatus::Held => 5,
            JobStatus::SubmissionError => 6,
            JobStatus::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobEntry {
    /// Internally assigned job id
    pub blah_id: String,

    /// Job id assigned by the batch system
    pub batch_id: String,

    pub status: JobStatus,

    /// Only meaningful once the job is completed
    pub exit_code: i64,

    pub exit_reason: String,

    /// Address of the worker node running the job (empty when unknown or redacted)
    pub wn_addr: String,

    /// Uid of the submitting user
    pub submitter: i64,

    pub user_prefix: String,

    /// Path of the proxy symlink used for the job
    pub proxy_link: String,

    pub subject_hash: String,

    pub renew_proxy: bool,

    /// Creation time, Unix seconds
    pub cdate: i64,

    /// Last registry modification time, Unix seconds
    pub mdate: i64,

    /// Last time the batch system reported on the job, Unix seconds
    pub udate: i64,
}

impl JobEntry {
    /// Clear the worker node address so it never reaches the serialized record
    pub fn redact_worker_node(&mut self) {
        self.wn_addr.clear();
    }
}
