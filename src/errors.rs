//! Error types for dictionary and output file access.
//!
//! Only the two I/O boundaries of the pipeline can fail. Filtering and
//! matching are total over any set of strings, so everything fallible in
//! this crate funnels into [`DataAccessError`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which side of the pipeline an access failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Opening or reading the dictionary source
    Read,
    /// Creating or writing the output destination
    Write,
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Failure to read the dictionary or write the results.
#[derive(Debug, Error)]
pub enum DataAccessError {
    /// Input source missing, unreadable, or corrupt at the byte/line level
    #[error("Failed to read dictionary {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output destination could not be created or written
    #[error("Failed to write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DataAccessError {
    /// Create a read error with path context
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error with path context
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AccessKind {
        match self {
            Self::Read { .. } => AccessKind::Read,
            Self::Write { .. } => AccessKind::Write,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// The underlying I/O error kind, e.g. `NotFound` or `PermissionDenied`.
    #[must_use]
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, DataAccessError>;
