//! Driver-level failures. The lexer itself never fails; everything here is
//! about reading input and understanding the command line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unknown output format '{0}' (expected: plain, debug)")]
    UnknownFormat(String),

    #[error("missing file path")]
    MissingPath,

    #[error("found {count} lexical error(s)")]
    LexErrors { count: usize },
}

impl DriverError {
    /// Classify an I/O error from reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Io { path, source: err },
        }
    }
}
