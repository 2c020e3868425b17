use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LookupError, Result};

/// Name of the folder holding word books under the base directory
pub const BOOKS_DIR: &str = "books";

/// Directory the program's data lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseDir {
    /// Next to the running executable
    Development(PathBuf),
    /// Unpacked by the packaging tool at startup
    Bundled(PathBuf),
}

impl BaseDir {
    /// Pick the bundled layout when an extraction directory is supplied,
    /// otherwise the executable's directory.
    pub fn detect(bundle_dir: Option<PathBuf>) -> std::io::Result<Self> {
        if let Some(dir) = bundle_dir {
            return Ok(BaseDir::Bundled(dir));
        }

        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(BaseDir::Development(dir))
    }

    /// Use a fixed directory as the development layout
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        BaseDir::Development(path.into())
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self, BaseDir::Bundled(_))
    }

    /// Absolute base directory
    pub fn resolve(&self) -> PathBuf {
        let dir = match self {
            BaseDir::Development(dir) | BaseDir::Bundled(dir) => dir,
        };
        std::path::absolute(dir).unwrap_or_else(|_| dir.clone())
    }

    pub fn books_dir(&self) -> PathBuf {
        self.resolve().join(BOOKS_DIR)
    }
}

/// JSON files in `dir`, sorted by file name
pub fn list_word_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LookupError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_failure = |source| LookupError::ReadFailure {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_failure)? {
        let entry = entry.map_err(read_failure)?;
        let name = entry.file_name();
        let is_json = name
            .to_str()
            .is_some_and(|n| n.to_ascii_lowercase().ends_with(".json"));
        if is_json {
            files.push(entry.path());
        }
    }

    if files.is_empty() {
        return Err(LookupError::NoDataFiles {
            path: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!("Found {} word files in {}", files.len(), dir.display());
    Ok(files)
}
