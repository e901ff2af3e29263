//! create-module - Scaffolding for new C modules
//!
//! A module is a directory under `src/` holding four files: `<name>.c`,
//! `<name>.h`, `<name>test.c` and a `Makefile` that builds the test binary.
//!
//! Content is produced by pure functions in [`content`] and [`license`];
//! [`module`] is the only place that touches the file system.

pub mod content;
pub mod error;
pub mod license;
pub mod module;

pub use error::{Result, ScaffoldError};
pub use module::{FileKind, ModuleLayout};
