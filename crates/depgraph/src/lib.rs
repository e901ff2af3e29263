//! depgraph - Declarative build graph for C projects
//!
//! Artifacts (static libraries, shared libraries, executables) are declared
//! through the [`BuildGraph`] trait and built by a single call to
//! [`BuildGraph::build`], which consumes the graph.
//!
//! Two implementations ship with the crate:
//! - [`DependencyGraph`] compiles and links with the system toolchain
//! - [`RecordingGraph`] only records declarations (dry runs and tests)
//!
//! # Example
//!
//! ```no_run
//! use depgraph::{BuildGraph, DependencyGraph};
//!
//! let mut graph = DependencyGraph::new(".");
//! graph
//!     .add_static_library("libvec.a", &["vector.o"])
//!     .add_executable("vectortest", &["vector.o", "vectortest.c"]);
//! graph.build()?;
//! # Ok::<(), depgraph::BuildError>(())
//! ```

mod artifact;
mod error;
mod graph;
mod plan;
mod recording;
mod toolchain;

pub use artifact::{Artifact, ArtifactKind, Input};
pub use error::{BuildError, Result};
pub use graph::{BuildReport, DependencyGraph};
pub use plan::{Plan, Step, StepKind};
pub use recording::RecordingGraph;
pub use toolchain::Toolchain;

/// A build engine that accepts artifact declarations and builds them once.
pub trait BuildGraph {
    /// What a successful build returns
    type Output;
    /// Error raised by the engine
    type Error: std::error::Error + Send + Sync + 'static;

    /// Declare an artifact
    fn add_artifact(&mut self, artifact: Artifact) -> &mut Self;

    /// Build every declared artifact
    fn build(self) -> std::result::Result<Self::Output, Self::Error>
    where
        Self: Sized;

    /// Declare a static library (`.a`)
    fn add_static_library(&mut self, name: &str, inputs: &[&str]) -> &mut Self {
        self.add_artifact(Artifact::new(ArtifactKind::StaticLibrary, name, inputs))
    }

    /// Declare a shared library (`.so`)
    fn add_shared_library(&mut self, name: &str, inputs: &[&str]) -> &mut Self {
        self.add_artifact(Artifact::new(ArtifactKind::SharedLibrary, name, inputs))
    }

    /// Declare an executable
    fn add_executable(&mut self, name: &str, inputs: &[&str]) -> &mut Self {
        self.add_artifact(Artifact::new(ArtifactKind::Executable, name, inputs))
    }
}
