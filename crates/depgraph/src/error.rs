//! Error types for depgraph.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for build graph operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while planning or running a build.
#[derive(Error, Debug)]
pub enum BuildError {
    /// An artifact declaration cannot be built.
    #[error("Invalid artifact '{name}': {reason}")]
    InvalidArtifact { name: String, reason: &'static str },

    /// No source file matches an object or source input.
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    /// A toolchain program is not on PATH.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// An output directory could not be created.
    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A toolchain program could not be started.
    #[error("Failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// A toolchain program exited unsuccessfully.
    #[error("Command failed ({status}): {command}\n{stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}
