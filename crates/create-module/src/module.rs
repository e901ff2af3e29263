//! Module layout and creation
//!
//! This is the only part of the crate that writes to disk. Every write opens
//! the file in append mode and closes it before the next one.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cds_core::ProjectPaths;
use tracing::{debug, info};

use crate::content;
use crate::error::{Result, ScaffoldError};
use crate::license::{license_comment, C_COMMENT};

/// Name of the per-module build file
pub const MAKE_FILE: &str = "Makefile";

/// The four files making up a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Source,
    Header,
    Test,
    Build,
}

impl FileKind {
    /// Creation order on disk
    pub fn all() -> &'static [Self] {
        &[Self::Source, Self::Header, Self::Test, Self::Build]
    }

    /// Whether the file starts with the license comment
    pub fn has_license(&self) -> bool {
        !matches!(self, Self::Build)
    }

    /// File name for a module called `module_name`
    pub fn file_name(&self, module_name: &str) -> String {
        match self {
            Self::Source => format!("{}.c", module_name),
            Self::Header => format!("{}.h", module_name),
            Self::Test => format!("{}test.c", module_name),
            Self::Build => MAKE_FILE.to_string(),
        }
    }
}

/// Where a module's files live
#[derive(Debug, Clone)]
pub struct ModuleLayout {
    /// Module name
    pub name: String,
    /// Module directory (`<root>/src/<name>`)
    pub dir: PathBuf,
}

impl ModuleLayout {
    /// Lay out a module under the project's source directory
    pub fn new(paths: &ProjectPaths, name: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            dir: paths.module_dir(name),
        })
    }

    /// Path of one of the module's files
    pub fn path(&self, kind: FileKind) -> PathBuf {
        self.dir.join(kind.file_name(&self.name))
    }

    /// All file paths, in creation order
    pub fn files(&self) -> Vec<PathBuf> {
        FileKind::all().iter().map(|kind| self.path(*kind)).collect()
    }

    /// Whether the module directory is already present
    pub fn exists(&self) -> bool {
        self.dir.exists()
    }

    /// Fail with a conflict if the module directory is already present
    pub fn ensure_absent(&self) -> Result<()> {
        if self.exists() {
            return Err(self.conflict());
        }
        Ok(())
    }

    /// Create the module directory and its four files.
    ///
    /// Nothing is written when the directory already exists. Past that point
    /// an I/O error leaves whatever was written in place.
    pub fn create(&self) -> Result<Vec<PathBuf>> {
        self.ensure_absent()?;

        if let Some(parent) = self.dir.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
        }
        match fs::create_dir(&self.dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Err(self.conflict()),
            Err(e) => return Err(ScaffoldError::io("create directory", &self.dir, e)),
        }
        debug!(dir = %self.dir.display(), "Created module directory");

        let license = license_comment(C_COMMENT);
        for kind in FileKind::all() {
            let path = self.path(*kind);
            touch(&path)?;
            if kind.has_license() {
                append(&path, &license)?;
            }
        }

        let header_name = FileKind::Header.file_name(&self.name);
        let test_name = FileKind::Test.file_name(&self.name);
        let source_name = FileKind::Source.file_name(&self.name);

        append(&self.path(FileKind::Header), &content::header_file(&header_name))?;
        append(&self.path(FileKind::Test), &content::test_file(&header_name))?;
        append(
            &self.path(FileKind::Build),
            &content::make_file(&self.name, &test_name, &source_name),
        )?;

        info!(module = %self.name, dir = %self.dir.display(), "Module created");
        Ok(self.files())
    }

    fn conflict(&self) -> ScaffoldError {
        ScaffoldError::AlreadyExists {
            name: self.name.clone(),
            dir: self.dir.clone(),
        }
    }
}

/// Reject names that cannot be a single directory component
fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name refers to a directory")
    } else if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        Some("name contains a path separator")
    } else if name.contains('\0') {
        Some("name contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScaffoldError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Create an empty file, leaving existing content alone
fn touch(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ScaffoldError::io("create", path, e))?;
    debug!(path = %path.display(), "Touched");
    Ok(())
}

/// Append `text` to an existing file
fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| ScaffoldError::io("open", path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| ScaffoldError::io("write", path, e))?;
    Ok(())
}
