// SPDX-License-Identifier: GPL-3.0-only
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod service;

pub use endpoint::local_node_name;
pub use error::LookupError;
pub use service::run;
