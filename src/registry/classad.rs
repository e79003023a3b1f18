// SPDX-License-Identifier: GPL-3.0-only
use std::fmt::{self, Write};

use crate::registry::{JobEntry, JobStatus};

/// Accumulates `Name=Value; ` attributes inside `[ ... ]`
struct ClassAdWriter {
    buf: String,
}

impl ClassAdWriter {
    fn new() -> Self {
        Self { buf: String::from("[ ") }
    }

    fn string(&mut self, name: &str, value: &str) -> fmt::Result {
        write!(self.buf, "{name}=\"")?;
        for c in value.chars() {
            match c {
                '"' | '\\' => {
                    self.buf.write_char('\\')?;
                    self.buf.write_char(c)?;
                }
                c if c.is_control() => {}
                c => self.buf.write_char(c)?,
            }
        }
        self.buf.write_str("\"; ")
    }

    fn string_if_set(&mut self, name: &str, value: &str) -> fmt::Result {
        if value.is_empty() {
            return Ok(());
        }
        self.string(name, value)
    }

    fn integer(&mut self, name: &str, value: i64) -> fmt::Result {
        write!(self.buf, "{name}={value}; ")
    }

    fn finish(mut self) -> String {
        self.buf.push(']');
        self.buf
    }
}

impl JobEntry {
    /// Render the entry as a single-line ClassAd.
    ///
    /// `WorkerNode` is omitted entirely when the address is empty, so a
    /// redacted entry carries no trace of it.
    pub fn to_classad(&self) -> Result<String, fmt::Error> {
        let mut ad = ClassAdWriter::new();

        ad.string("BatchJobId", &self.batch_id)?;
        ad.integer("JobStatus", self.status.code())?;
        ad.string("BlahJobId", &self.blah_id)?;
        ad.integer("CreateTime", self.cdate)?;
        ad.integer("ModifiedTime", self.mdate)?;
        ad.integer("UserTime", self.udate)?;
        ad.integer("SubmitterUid", self.submitter)?;
        ad.string_if_set("WorkerNode", &self.wn_addr)?;
        if self.status == JobStatus::Completed {
            ad.integer("ExitCode", self.exit_code)?;
        }
        ad.string_if_set("ExitReason", &self.exit_reason)?;
        ad.string_if_set("UserPrefix", &self.user_prefix)?;
        ad.string_if_set("ProxyLink", &self.proxy_link)?;
        ad.string_if_set("SubjectHash", &self.subject_hash)?;
        if self.renew_proxy {
            write!(ad.buf, "RenewProxy=true; ")?;
        }

        Ok(ad.finish())
    }
}
