// SPDX-License-Identifier: GPL-3.0-only
pub mod args;

pub use args::parse_args;
