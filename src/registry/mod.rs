// SPDX-License-Identifier: GPL-3.0-only
pub mod classad;
pub mod models;
pub mod traits;
pub mod sqlite;

pub use models::{IndexMode, JobEntry, JobStatus};
pub use traits::Registry;
pub use sqlite::SqliteRegistry;
