//! Filesystem port
//!
//! Generators never touch `std::fs` directly. Every path handed to a
//! [`ProjectFs`] is relative to the Laravel project root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CrudPackError, Result};

/// Project filesystem operations used by the generators
pub trait ProjectFs {
    /// Whether a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or unreadable.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the file contents, creating the file if needed
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Create a directory and all missing parents
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created.
    fn mkdir(&self, path: &Path) -> Result<()>;

    /// Names of the files directly inside `dir`, sorted
    ///
    /// A missing directory lists as empty.
    ///
    /// # Errors
    ///
    /// Fails when the directory exists but cannot be read.
    fn list(&self, dir: &Path) -> Result<Vec<String>>;
}

/// [`ProjectFs`] backed by the real filesystem under a project root
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Create a filesystem rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        std::fs::read_to_string(&full).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CrudPackError::MissingFile(path.to_path_buf())
            } else {
                CrudPackError::io(full, e)
            }
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let full = self.resolve(path);
        std::fs::write(&full, contents).map_err(|e| CrudPackError::io(full, e))
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        let full = self.resolve(path);
        std::fs::create_dir_all(&full).map_err(|e| CrudPackError::io(full, e))
    }

    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let full = self.resolve(dir);
        if !full.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&full).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                CrudPackError::io(full.clone(), source)
            })?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_roundtrip_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new(dir.path());

        fs.mkdir(Path::new("app/Models")).unwrap();
        fs.write(Path::new("app/Models/Post.php"), "<?php\n").unwrap();

        assert!(fs.exists(Path::new("app/Models/Post.php")));
        assert!(dir.path().join("app/Models/Post.php").exists());
        assert_eq!(fs.read(Path::new("app/Models/Post.php")).unwrap(), "<?php\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new(dir.path());
        let err = fs.read(Path::new("routes/web.php")).unwrap_err();
        assert!(matches!(err, CrudPackError::MissingFile(_)));
    }

    #[test]
    fn test_list_is_sorted_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new(dir.path());
        fs.mkdir(Path::new("database/migrations/nested")).unwrap();
        fs.write(Path::new("database/migrations/b.php"), "").unwrap();
        fs.write(Path::new("database/migrations/a.php"), "").unwrap();

        let names = fs.list(Path::new("database/migrations")).unwrap();
        assert_eq!(names, vec!["a.php".to_string(), "b.php".to_string()]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new(dir.path());
        assert!(fs.list(Path::new("nope")).unwrap().is_empty());
    }
}
