use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors related to identity persistence.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read identity file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write identity file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to clear identity file at {path}: {source} {location}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. }
        )
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite error at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRemove error at caller location.
    #[track_caller]
    pub fn file_remove(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRemove {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
