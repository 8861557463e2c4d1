//! Error types for loading and publishing document sets.

use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::ParseError;

/// Errors that can occur while discovering or loading documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The directory to scan does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// IO error while reading a file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while publishing rewritten schema files.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Input and output resolve to the same directory.
    #[error("Refusing to publish into the input directory {}", .0.display())]
    SameDirectory(PathBuf),

    /// IO error while reading, creating or writing.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Discovering the input files failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl PublishError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
