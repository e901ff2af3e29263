//! Compiler and archiver configuration

use serde::Serialize;
use tracing::debug;

use crate::error::{BuildError, Result};

/// Programs and flags used to compile and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolchain {
    /// C compiler, also used as the linker
    pub cc: String,
    /// Static library archiver
    pub ar: String,
    /// Flags passed to every compile and executable link
    pub cflags: Vec<String>,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cc: "gcc".to_string(),
            ar: "ar".to_string(),
            cflags: vec!["-g".to_string(), "-Wall".to_string()],
        }
    }
}

impl Toolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the C compiler.
    pub fn cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = cc.into();
        self
    }

    /// Set the archiver.
    pub fn ar(mut self, ar: impl Into<String>) -> Self {
        self.ar = ar.into();
        self
    }

    /// Append a compiler flag.
    pub fn cflag(mut self, flag: impl Into<String>) -> Self {
        self.cflags.push(flag.into());
        self
    }

    /// Replace all compiler flags.
    pub fn cflags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cflags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Fail early if a program is not on PATH.
    pub fn locate(&self, program: &str) -> Result<()> {
        let path = which::which(program).map_err(|_| BuildError::ToolNotFound(program.to_string()))?;
        debug!(program, path = %path.display(), "Located tool");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_module_makefiles() {
        let toolchain = Toolchain::default();
        assert_eq!(toolchain.cc, "gcc");
        assert_eq!(toolchain.ar, "ar");
        assert_eq!(toolchain.cflags, vec!["-g", "-Wall"]);
    }

    #[test]
    fn test_builder() {
        let toolchain = Toolchain::new().cc("clang").ar("llvm-ar").cflag("-O2");
        assert_eq!(toolchain.cc, "clang");
        assert_eq!(toolchain.ar, "llvm-ar");
        assert_eq!(toolchain.cflags, vec!["-g", "-Wall", "-O2"]);

        let toolchain = toolchain.cflags(["-std=c99"]);
        assert_eq!(toolchain.cflags, vec!["-std=c99"]);
    }

    #[test]
    fn test_missing_tool() {
        let err = Toolchain::new()
            .locate("definitely-not-a-real-compiler-9f3a")
            .unwrap_err();
        assert!(matches!(err, BuildError::ToolNotFound(_)));
    }
}
