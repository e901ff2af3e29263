//! Build plans: the ordered commands a build will run

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// What a step produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Compile,
    Archive,
    LinkShared,
    LinkExecutable,
}

/// A single command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub program: String,
    pub args: Vec<String>,
    /// File the command writes
    pub output: PathBuf,
}

impl Step {
    /// Shell-like rendering, for logs and dry runs
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Directories to create and commands to run, in order.
///
/// All compile steps come before any link step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub dirs: Vec<PathBuf>,
    pub steps: Vec<Step>,
}

impl Plan {
    pub fn compile_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.kind == StepKind::Compile)
    }

    pub fn link_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.kind != StepKind::Compile)
    }
}
