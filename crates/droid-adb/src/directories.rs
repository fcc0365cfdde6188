//! Sorted subdirectory listing

use std::path::Path;

use droid_core::prelude::*;

use crate::fs::SdkFs;

/// Names of the directories directly under `root`, sorted
///
/// Regular files are skipped. Sorting is plain byte order, so digits come
/// before letters (`1, 2, a, b, c`).
pub async fn sorted_directories<F: SdkFs>(fs: &F, root: &Path) -> Result<Vec<String>> {
    let mut dirs = Vec::new();
    for name in fs.list_dir(root).await? {
        if fs.is_dir(&root.join(&name)).await? {
            dirs.push(name);
        } else {
            trace!("Skipping non-directory {}", name);
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeFs;

    #[tokio::test]
    async fn test_sorts_directories() {
        let fs = FakeFs::new().with_dirs("/path/to/root", &["c", "b", "a", "1", "2"]);
        let dirs = sorted_directories(&fs, Path::new("/path/to/root"))
            .await
            .unwrap();
        assert_eq!(dirs, vec!["1", "2", "a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_skips_files() {
        let fs = FakeFs::new()
            .with_dirs("/sdk", &["platforms", "build-tools"])
            .with_files("/sdk", &["source.properties"]);
        let dirs = sorted_directories(&fs, Path::new("/sdk")).await.unwrap();
        assert_eq!(dirs, vec!["build-tools", "platforms"]);
    }

    #[tokio::test]
    async fn test_listing_error_propagates() {
        let fs = FakeFs::new().with_list_error("/sdk");
        assert!(sorted_directories(&fs, Path::new("/sdk")).await.is_err());
    }
}
