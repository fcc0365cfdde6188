//! Test utilities for SDK lookups
//!
//! Provides an in-memory [`SdkFs`] so platform and directory resolution can
//! be exercised without touching disk.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use droid_core::prelude::*;

use crate::fs::SdkFs;

/// In-memory directory tree
///
/// Directories list their children in insertion order. Registering a path
/// also registers its ancestors, so `exists` holds for every parent.
#[derive(Debug, Clone, Default)]
pub struct FakeFs {
    dirs: BTreeMap<PathBuf, Vec<String>>,
    files: BTreeSet<PathBuf>,
    failing: HashSet<PathBuf>,
    failing_exists: HashSet<PathBuf>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory at `path` containing the subdirectories `children`
    pub fn with_dirs(mut self, path: impl AsRef<Path>, children: &[&str]) -> Self {
        let path = path.as_ref();
        self.add_dir(path);
        for child in children {
            self.add_entry(path, child);
            self.dirs.entry(path.join(child)).or_default();
        }
        self
    }

    /// Add regular files named `names` under `path`
    pub fn with_files(mut self, path: impl AsRef<Path>, names: &[&str]) -> Self {
        let path = path.as_ref();
        self.add_dir(path);
        for name in names {
            self.add_entry(path, name);
            self.files.insert(path.join(name));
        }
        self
    }

    /// Make listing `path` fail with an I/O error
    pub fn with_list_error(mut self, path: impl AsRef<Path>) -> Self {
        self.failing.insert(path.as_ref().to_path_buf());
        self
    }

    /// Make `exists` on `path` fail with an I/O error
    pub fn with_exists_error(mut self, path: impl AsRef<Path>) -> Self {
        self.failing_exists.insert(path.as_ref().to_path_buf());
        self
    }

    fn add_dir(&mut self, path: &Path) {
        self.dirs.entry(path.to_path_buf()).or_default();
        let mut child = path;
        while let Some(parent) = child.parent() {
            if let Some(name) = child.file_name() {
                self.add_entry(parent, &name.to_string_lossy());
            }
            child = parent;
        }
    }

    fn add_entry(&mut self, dir: &Path, name: &str) {
        let entries = self.dirs.entry(dir.to_path_buf()).or_default();
        if !entries.iter().any(|e| e == name) {
            entries.push(name.to_string());
        }
    }
}

impl SdkFs for FakeFs {
    async fn exists(&self, path: &Path) -> Result<bool> {
        if self.failing_exists.contains(path) {
            return Err(Error::sdk_read(path, "Permission denied"));
        }
        Ok(self.dirs.contains_key(path) || self.files.contains(path))
    }

    async fn is_dir(&self, path: &Path) -> Result<bool> {
        Ok(self.dirs.contains_key(path))
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        if self.failing.contains(path) {
            return Err(Error::sdk_read(path, "Permission denied"));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| Error::sdk_read(path, "No such file or directory"))
    }
}
