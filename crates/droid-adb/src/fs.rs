//! Filesystem capability used by SDK lookups
//!
//! The platform resolver and directory helper never touch the filesystem
//! directly; they go through [`SdkFs`] so tests can substitute an in-memory
//! tree and callers can route I/O through their own sandbox.

use std::path::Path;

use droid_core::prelude::*;

/// Read-only filesystem access needed to inspect an SDK installation
///
/// Implement [`SdkFs`]; the local variant comes for free.
#[trait_variant::make(SdkFs: Send)]
pub trait LocalSdkFs {
    /// Whether anything exists at `path`
    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Whether `path` is a directory (false when missing)
    async fn is_dir(&self, path: &Path) -> Result<bool>;

    /// Names of the entries directly under `path`, in listing order
    async fn list_dir(&self, path: &Path) -> Result<Vec<String>>;
}

/// [`SdkFs`] backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

impl SdkFs for TokioFs {
    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(tokio::fs::try_exists(path).await?)
    }

    async fn is_dir(&self, path: &Path) -> Result<bool> {
        match tokio::fs::metadata(path).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(path)
            .await
            .map_err(|e| Error::sdk_read(path, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::sdk_read(path, e))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        trace!("Listed {} entries under {}", names.len(), path.display());
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::{SdkFs, TokioFs};
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_exists_and_is_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("platforms")).unwrap();
        fs::write(temp.path().join("source.properties"), "Pkg.Revision=1\n").unwrap();

        let sdk_fs = TokioFs;
        assert!(sdk_fs.exists(&temp.path().join("platforms")).await.unwrap());
        assert!(sdk_fs.is_dir(&temp.path().join("platforms")).await.unwrap());
        assert!(sdk_fs.exists(&temp.path().join("source.properties")).await.unwrap());
        assert!(!sdk_fs.is_dir(&temp.path().join("source.properties")).await.unwrap());
        assert!(!sdk_fs.exists(&temp.path().join("missing")).await.unwrap());
        assert!(!sdk_fs.is_dir(&temp.path().join("missing")).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_dir_returns_entry_names() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("android-33")).unwrap();
        fs::create_dir(temp.path().join("android-34")).unwrap();

        let mut names = TokioFs.list_dir(temp.path()).await.unwrap();
        names.sort();
        assert_eq!(names, vec!["android-33", "android-34"]);
    }

    #[tokio::test]
    async fn test_list_missing_dir_is_error() {
        let temp = TempDir::new().unwrap();
        let err = TokioFs
            .list_dir(&temp.path().join("nope"))
            .await
            .unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("nope"));
    }
}
