//! Error types for iflist

use thiserror::Error;

/// Result type alias for iflist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for iflist
///
/// Every failure names the step that produced it, so the diagnostic printed
/// by the binary reads like `perror` output with context.
#[derive(Error, Debug)]
pub enum Error {
    /// The control socket could not be opened
    #[error("cannot open control socket: {0}")]
    Socket(#[source] std::io::Error),

    /// The bulk interface enumeration request failed
    #[error("interface enumeration (SIOCGIFCONF) failed: {0}")]
    Enumerate(#[source] std::io::Error),

    /// The per-interface address request failed
    #[error("address lookup (SIOCGIFADDR) for '{interface}' failed: {source}")]
    Resolve {
        interface: String,
        source: std::io::Error,
    },

    /// Output I/O error
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Map the error to the process exit status documented for the tool:
    /// 1 for a socket-acquisition failure, 2 for anything after that.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Socket(_) => 1,
            Error::Enumerate(_) | Error::Resolve { .. } | Error::Io(_) => 2,
        }
    }
}
