//! Dependency graph backed by the system C toolchain
//!
//! Every object an artifact needs is compiled exactly once, then artifacts
//! are linked in the order they were declared. There is no staleness check:
//! each build recompiles everything.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use cds_core::paths::{BINARY_DIR, LIBRARY_DIR, OBJECT_DIR};
use cds_core::ProjectPaths;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::artifact::{Artifact, ArtifactKind};
use crate::error::{BuildError, Result};
use crate::plan::{Plan, Step, StepKind};
use crate::toolchain::Toolchain;
use crate::BuildGraph;

/// Summary of a finished build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Number of commands run
    pub commands: usize,
    /// Artifacts written, in declaration order
    pub outputs: Vec<PathBuf>,
    pub duration: Duration,
}

/// Build graph rooted at a project directory
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    paths: ProjectPaths,
    toolchain: Toolchain,
    artifacts: Vec<Artifact>,
}

impl DependencyGraph {
    /// Create an empty graph rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: ProjectPaths::new(root),
            toolchain: Toolchain::default(),
            artifacts: Vec::new(),
        }
    }

    /// Use a specific toolchain instead of the default gcc/ar
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Resolve sources and lay out every command without running any.
    pub fn plan(&self) -> Result<Plan> {
        self.validate()?;

        let mut plan = Plan::default();
        let mut compiled = HashSet::new();

        for artifact in &self.artifacts {
            for stem in artifact.inputs.iter().filter_map(|i| i.source_stem()) {
                if compiled.insert(stem.to_string()) {
                    let source = self.find_source(stem)?;
                    plan.steps.push(self.compile_step(stem, &source));
                }
            }
        }

        if !plan.steps.is_empty() {
            plan.dirs.push(self.paths.obj.clone());
        }
        if self.artifacts.iter().any(|a| a.kind.is_library()) {
            plan.dirs.push(self.paths.lib.clone());
        }
        if self.artifacts.iter().any(|a| !a.kind.is_library()) {
            plan.dirs.push(self.paths.bin.clone());
        }

        for artifact in &self.artifacts {
            plan.steps.push(self.link_step(artifact));
        }

        Ok(plan)
    }

    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for artifact in &self.artifacts {
            let invalid = |reason| BuildError::InvalidArtifact {
                name: artifact.name.clone(),
                reason,
            };
            if artifact.name.is_empty() {
                return Err(invalid("empty name"));
            }
            if artifact.inputs.is_empty() {
                return Err(invalid("no inputs"));
            }
            if !names.insert(artifact.name.as_str()) {
                return Err(invalid("declared more than once"));
            }
        }
        Ok(())
    }

    /// Find `<stem>.c`: at the root, in its module directory, then anywhere.
    fn find_source(&self, stem: &str) -> Result<PathBuf> {
        let file_name = format!("{}.c", stem);

        let candidates = [
            self.paths.root.join(&file_name),
            self.paths.module_dir(stem).join(&file_name),
        ];
        if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
            return Ok(found);
        }

        let walk_root = if self.paths.root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.paths.root.as_path()
        };
        WalkDir::new(walk_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
            .filter_map(|e| e.ok())
            .find(|e| e.file_type().is_file() && e.file_name().to_str() == Some(file_name.as_str()))
            .map(|e| e.into_path())
            .ok_or(BuildError::SourceNotFound(file_name))
    }

    fn object_path(&self, stem: &str) -> PathBuf {
        self.paths.obj.join(format!("{}.o", stem))
    }

    fn compile_step(&self, stem: &str, source: &Path) -> Step {
        let output = self.object_path(stem);
        let mut args = self.toolchain.cflags.clone();
        args.extend([
            "-fPIC".to_string(),
            "-c".to_string(),
            display(source),
            "-o".to_string(),
            display(&output),
        ]);
        Step {
            kind: StepKind::Compile,
            program: self.toolchain.cc.clone(),
            args,
            output,
        }
    }

    fn link_step(&self, artifact: &Artifact) -> Step {
        let inputs: Vec<String> = artifact
            .inputs
            .iter()
            .map(|input| match input.source_stem() {
                Some(stem) => display(&self.object_path(stem)),
                None => input.as_str().to_string(),
            })
            .collect();

        let (kind, program, output, mut args) = match artifact.kind {
            ArtifactKind::StaticLibrary => {
                let output = self.paths.lib.join(&artifact.name);
                let args = vec!["rcs".to_string(), display(&output)];
                (StepKind::Archive, self.toolchain.ar.clone(), output, args)
            }
            ArtifactKind::SharedLibrary => {
                let output = self.paths.lib.join(&artifact.name);
                let args = vec!["-shared".to_string(), "-o".to_string(), display(&output)];
                (StepKind::LinkShared, self.toolchain.cc.clone(), output, args)
            }
            ArtifactKind::Executable => {
                let output = self.paths.bin.join(&artifact.name);
                let mut args = self.toolchain.cflags.clone();
                args.extend(["-o".to_string(), display(&output)]);
                (StepKind::LinkExecutable, self.toolchain.cc.clone(), output, args)
            }
        };
        args.extend(inputs);

        Step {
            kind,
            program,
            args,
            output,
        }
    }
}

impl BuildGraph for DependencyGraph {
    type Output = BuildReport;
    type Error = BuildError;

    fn add_artifact(&mut self, artifact: Artifact) -> &mut Self {
        debug!(kind = %artifact.kind, name = %artifact.name, "Declared artifact");
        self.artifacts.push(artifact);
        self
    }

    fn build(self) -> Result<BuildReport> {
        let start = Instant::now();
        let plan = self.plan()?;

        let mut programs: Vec<&str> = plan.steps.iter().map(|s| s.program.as_str()).collect();
        programs.sort_unstable();
        programs.dedup();
        for program in programs {
            self.toolchain.locate(program)?;
        }

        for dir in &plan.dirs {
            fs::create_dir_all(dir).map_err(|source| BuildError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }

        for step in &plan.steps {
            run_step(step)?;
        }

        let outputs: Vec<PathBuf> = plan.link_steps().map(|s| s.output.clone()).collect();
        let report = BuildReport {
            commands: plan.steps.len(),
            outputs,
            duration: start.elapsed(),
        };
        info!(
            commands = report.commands,
            artifacts = report.outputs.len(),
            duration_ms = report.duration.as_millis() as u64,
            "Build finished"
        );
        Ok(report)
    }
}

fn run_step(step: &Step) -> Result<()> {
    info!("{}", step);
    let output = Command::new(&step.program)
        .args(&step.args)
        .output()
        .map_err(|source| BuildError::Spawn {
            program: step.program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(BuildError::CommandFailed {
            command: step.command_line(),
            status: output
                .status
                .code()
                .map(|c| format!("exit code {}", c))
                .unwrap_or_else(|| "terminated by signal".to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }
    Ok(())
}

/// Output directories and hidden directories never hold inputs
fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    entry.file_type().is_dir()
        && (name.starts_with('.') || [OBJECT_DIR, BINARY_DIR, LIBRARY_DIR, "target"].contains(&&*name))
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
