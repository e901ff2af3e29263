//! Artifact declarations

use serde::Serialize;
use std::fmt;

/// Kind of build output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Static library (.a)
    StaticLibrary,
    /// Shared library (.so)
    SharedLibrary,
    /// Executable binary
    Executable,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StaticLibrary => "static library",
            Self::SharedLibrary => "shared library",
            Self::Executable => "executable",
        }
    }

    pub fn is_library(&self) -> bool {
        !matches!(self, Self::Executable)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One input of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum Input {
    /// `name.o`, compiled from `name.c`
    Object(String),
    /// `name.c`, compiled to `name.o`
    Source(String),
    /// Anything else, handed to the linker untouched
    Linker(String),
}

impl Input {
    /// Classify an input by its extension
    pub fn parse(input: &str) -> Self {
        if input.len() > 2 && input.ends_with(".o") {
            Self::Object(input.to_string())
        } else if input.len() > 2 && input.ends_with(".c") {
            Self::Source(input.to_string())
        } else {
            Self::Linker(input.to_string())
        }
    }

    /// Stem of the C source this input is compiled from, if any
    pub fn source_stem(&self) -> Option<&str> {
        match self {
            Self::Object(name) | Self::Source(name) => Some(&name[..name.len() - 2]),
            Self::Linker(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Object(name) | Self::Source(name) | Self::Linker(name) => name,
        }
    }
}

/// A named build output and the inputs it is made from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub name: String,
    pub inputs: Vec<Input>,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, name: &str, inputs: &[&str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            inputs: inputs.iter().map(|i| Input::parse(i)).collect(),
        }
    }
}
