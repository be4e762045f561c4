use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type ImportResult<T> = Result<T, ImportError>;

/// Failures that abort a single file's import (or, for
/// `DestinationNotDirectory`, the whole run before any file is touched).
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no {tag} tag in {}", path.display())]
    MetadataMissing { path: PathBuf, tag: &'static str },

    #[error("{tag} in {} is {value:?}, expected YYYY:MM:DD HH:MM:SS", path.display())]
    MetadataMalformed {
        path: PathBuf,
        tag: &'static str,
        value: String,
    },

    #[error("could not read metadata from {}: {reason}", path.display())]
    MetadataUnreadable { path: PathBuf, reason: String },

    #[error("could not create directory {}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("destination {} is not an existing directory", path.display())]
    DestinationNotDirectory { path: PathBuf },

    #[error("{operation} failed for {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ImportError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
