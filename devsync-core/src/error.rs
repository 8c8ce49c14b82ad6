//! Error types for devsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from configuration-file operations.
///
/// Parsing itself never fails: malformed blocks degrade to defaulted fields
/// and a missing file reads as an empty configuration. Only real I/O
/// failures (permissions, disk) surface here.
#[derive(Debug, Error)]
pub enum ConfError {
    /// Underlying I/O failure, with the path that triggered it.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ConfError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConfError {
    ConfError::Io {
        path: path.into(),
        source,
    }
}
