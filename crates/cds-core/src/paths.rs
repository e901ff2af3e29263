//! Standard paths of a c-datastructures project

use std::path::{Path, PathBuf};

/// Directory holding one sub-directory per module
pub const SOURCE_DIR: &str = "src";
/// Directory holding compiled objects
pub const OBJECT_DIR: &str = "obj";
/// Directory holding linked executables
pub const BINARY_DIR: &str = "bin";
/// Directory holding static and shared libraries
pub const LIBRARY_DIR: &str = "lib";

/// Standard project paths, all relative to a single root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root (`.` unless overridden)
    pub root: PathBuf,
    /// Module sources (`<root>/src`)
    pub src: PathBuf,
    /// Object files (`<root>/obj`)
    pub obj: PathBuf,
    /// Executables (`<root>/bin`)
    pub bin: PathBuf,
    /// Libraries (`<root>/lib`)
    pub lib: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::relative()
    }
}

impl ProjectPaths {
    /// Paths rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            src: root.join(SOURCE_DIR),
            obj: root.join(OBJECT_DIR),
            bin: root.join(BINARY_DIR),
            lib: root.join(LIBRARY_DIR),
            root,
        }
    }

    /// Paths relative to the current working directory.
    ///
    /// The root itself stays empty so printed paths read `src/foo/foo.c`
    /// rather than `./src/foo/foo.c`.
    pub fn relative() -> Self {
        Self::new(PathBuf::new())
    }

    /// Use `root` when given, the current directory otherwise
    pub fn from_option(root: Option<&Path>) -> Self {
        match root {
            Some(root) => Self::new(root),
            None => Self::relative(),
        }
    }

    /// Directory of a single module
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.src.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_have_no_dot_prefix() {
        let paths = ProjectPaths::relative();
        assert_eq!(paths.src, PathBuf::from("src"));
        assert_eq!(paths.module_dir("foo"), PathBuf::from("src/foo"));
        assert_eq!(paths.obj, PathBuf::from("obj"));
    }

    #[test]
    fn test_rooted_paths() {
        let paths = ProjectPaths::new("/tmp/project");
        assert_eq!(paths.bin, PathBuf::from("/tmp/project/bin"));
        assert_eq!(paths.lib, PathBuf::from("/tmp/project/lib"));
        assert_eq!(paths.root, PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ProjectPaths::from_option(None), ProjectPaths::relative());
        assert_eq!(
            ProjectPaths::from_option(Some(Path::new("x"))).obj,
            PathBuf::from("x/obj")
        );
    }
}
