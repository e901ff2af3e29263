//! cds-core - Shared functionality for the c-datastructures tools
//!
//! Both tools work against the same on-disk project layout: modules live
//! under `src/`, objects go to `obj/`, executables to `bin/` and libraries
//! to `lib/`.

pub mod logging;
pub mod paths;

pub use paths::ProjectPaths;
