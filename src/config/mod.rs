// SPDX-License-Identifier: GPL-3.0-only
pub mod config;
pub mod environment;

pub use config::{registry_path, ConfigMap};
pub use environment::{Environment, ProcessEnv};
