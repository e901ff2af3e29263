//! Error types for module scaffolding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while creating a module.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The module directory is already present.
    #[error("Module '{name}' already exists at '{}'.", .dir.display())]
    AlreadyExists { name: String, dir: PathBuf },

    /// The name cannot be used as a file or directory name.
    #[error("Invalid module name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A file-system operation failed part way through.
    #[error("Failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
