//! Scanner error types
//!
//! The scan itself is total: every character sequence produces a result.
//! Errors only arise when the input comes from a reader or file, so the
//! taxonomy is I/O plus text decoding. Malformed SQL (an unterminated
//! comment or quote) is deliberately not an error.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from stripping a stream or file source.
#[derive(Debug, Error)]
pub enum StripError {
    /// The underlying reader failed. No partial result is returned.
    #[error("failed to read SQL source: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
    /// The source contained bytes that are not valid UTF-8.
    #[error("SQL source is not valid UTF-8")]
    Encoding { path: Option<PathBuf> },
}

impl StripError {
    /// The file this error relates to, when the source was a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StripError::Io { path, .. } | StripError::Encoding { path } => path.as_deref(),
        }
    }

    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            StripError::Io { source, .. } => StripError::Io {
                path: Some(path.into()),
                source,
            },
            StripError::Encoding { .. } => StripError::Encoding {
                path: Some(path.into()),
            },
        }
    }
}

pub type StripResult<T> = Result<T, StripError>;
