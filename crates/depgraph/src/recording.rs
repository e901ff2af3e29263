//! A build graph that records declarations without building anything

use std::convert::Infallible;

use crate::artifact::Artifact;
use crate::BuildGraph;

/// Records declared artifacts; `build` hands them back.
#[derive(Debug, Clone, Default)]
pub struct RecordingGraph {
    pub artifacts: Vec<Artifact>,
}

impl RecordingGraph {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildGraph for RecordingGraph {
    type Output = Vec<Artifact>;
    type Error = Infallible;

    fn add_artifact(&mut self, artifact: Artifact) -> &mut Self {
        self.artifacts.push(artifact);
        self
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.artifacts)
    }
}
