//! Testing utilities
//!
//! In-memory doubles for the filesystem and prompt ports:
//! - [`MemoryFs`] keeps files in a map and counts every write
//! - [`ScriptedPrompt`] answers from a queue and records the questions asked
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use crud_pack::fs::ProjectFs;
//! use crud_pack::testing::MemoryFs;
//!
//! let fs = MemoryFs::new().with_file("routes/web.php", "<?php\n");
//! assert!(fs.exists(Path::new("routes/web.php")));
//! assert_eq!(fs.write_count(), 0);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::error::{CrudPackError, Result};
use crate::fs::ProjectFs;
use crate::prompt::PromptPort;

/// In-memory [`ProjectFs`]
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    writes: Cell<usize>,
}

impl MemoryFs {
    /// Empty filesystem
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without counting it as a write
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    /// Number of `write` calls so far
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Current contents of a file
    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Every file path, sorted
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ProjectFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
            || self.dirs.borrow().contains(path)
            || self.files.borrow().keys().any(|p| p.starts_with(path))
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| CrudPackError::MissingFile(path.to_path_buf()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}

/// [`PromptPort`] that replays queued answers
///
/// When a queue runs dry the prompt's default is used.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    confirms: RefCell<VecDeque<bool>>,
    choices: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    /// Prompt with no scripted answers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `confirm`
    #[must_use]
    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    /// Queue an answer for the next `choose_one`
    #[must_use]
    pub fn choose_with(self, answer: impl Into<String>) -> Self {
        self.choices.borrow_mut().push_back(answer.into());
        self
    }

    /// Every question asked so far, in order
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl PromptPort for ScriptedPrompt {
    fn confirm(&self, question: &str, default: bool) -> bool {
        self.asked.borrow_mut().push(question.to_string());
        self.confirms.borrow_mut().pop_front().unwrap_or(default)
    }

    fn choose_one(&self, question: &str, options: &[&'static str], default_index: usize) -> String {
        self.asked.borrow_mut().push(question.to_string());
        self.choices.borrow_mut().pop_front().unwrap_or_else(|| {
            options
                .get(default_index)
                .map(ToString::to_string)
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_counts_writes() {
        let fs = MemoryFs::new();
        fs.write(Path::new("a.php"), "a").unwrap();
        fs.write(Path::new("a.php"), "b").unwrap();
        assert_eq!(fs.write_count(), 2);
        assert_eq!(fs.contents("a.php").as_deref(), Some("b"));
    }

    #[test]
    fn test_memory_fs_list_only_direct_children() {
        let fs = MemoryFs::new()
            .with_file("database/migrations/x.php", "")
            .with_file("database/migrations/deep/y.php", "")
            .with_file("database/z.php", "");
        let names = fs.list(Path::new("database/migrations")).unwrap();
        assert_eq!(names, vec!["x.php".to_string()]);
    }

    #[test]
    fn test_scripted_prompt_replays_then_defaults() {
        let prompt = ScriptedPrompt::new().confirm_with(false).choose_with("api");
        assert!(!prompt.confirm("Generate Model?", true));
        assert!(prompt.confirm("Generate Migration?", true));
        assert_eq!(prompt.choose_one("Controller type?", &["web", "api"], 0), "api");
        assert_eq!(prompt.choose_one("Soft deletes?", &["soft-deletes", "no-soft-deletes"], 0), "soft-deletes");
        assert_eq!(prompt.asked().len(), 4);
    }
}
