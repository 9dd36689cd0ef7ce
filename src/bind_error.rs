use ::std::io;
use ::thiserror::Error;

/// The one failure kind this crate produces.
///
/// Any OS-level socket error raised while probing for a port is flattened
/// into this, carrying the OS-supplied message. No distinction is made
/// between causes; whether to retry or abort is the caller's decision.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BindError {
    message: String,
}

impl BindError {
    /// The human-readable message from the OS.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for BindError {
    fn from(error: io::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}
