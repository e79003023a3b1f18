// SPDX-License-Identifier: GPL-3.0-only

/// Every way a lookup can end short of printing a result.
///
/// The `Display` text is the message part of the `1ERROR` status line.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("Usage: {program} [-w (get worker node)] [-n (get parser host:port)] [-b (look up for batch IDs)] <id>")]
    Usage { program: String },

    #[error("{program}: Cannot access value of {key} in BLAH config.")]
    ConfigAccess { program: String, key: &'static str },

    #[error("{program}: Cannot access uname information. Please add async_notification_host in BLAH config.")]
    HostIdentity { program: String },

    #[error("{program}: error initialising job registry: {detail}")]
    RegistryInit { program: String, detail: String },

    #[error("{program}: Entry <{key}> not found: {detail}")]
    NotFound { program: String, key: String, detail: String },

    #[error("{program}: Out of memory.")]
    Serialization { program: String },
}

impl LookupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            LookupError::RegistryInit { .. } => 2,
            _ => 1,
        }
    }
}
