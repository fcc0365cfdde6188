//! Integration tests for SDK platform discovery against a real directory tree

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use droid_adb::{android_platform_and_path, sorted_directories, TokioFs};
use droid_launch::commands::{self, CommandOutput};
use droid_launch::config::Settings;

/// Helper to create platform directories under `dir`
fn create_platforms(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        let platform = dir.join(name);
        fs::create_dir_all(&platform).unwrap();
        fs::write(platform.join("android.jar"), b"").unwrap();
    }
}

#[tokio::test]
async fn test_split_layout_picks_numeric_max() {
    let temp = TempDir::new().unwrap();
    create_platforms(
        &temp.path().join("platforms"),
        &["android-9", "android-10", "android-UpsideDownCake"],
    );
    fs::create_dir_all(temp.path().join("build-tools/34.0.0")).unwrap();

    let resolved = android_platform_and_path(&TokioFs, Some(temp.path()))
        .await
        .unwrap()
        .expect("platform should resolve");

    assert_eq!(resolved.platform, "android-10");
    assert_eq!(resolved.api_level, 10);
    assert_eq!(
        resolved.platform_path,
        temp.path().join("platforms").join("android-10")
    );
    assert!(resolved.platform_path.join("android.jar").exists());
}

#[tokio::test]
async fn test_flat_layout() {
    let temp = TempDir::new().unwrap();
    create_platforms(temp.path(), &["android-21", "android-22", "android-23"]);

    let resolved = android_platform_and_path(&TokioFs, Some(temp.path()))
        .await
        .unwrap()
        .expect("platform should resolve");

    assert_eq!(resolved.platform, "android-23");
    assert_eq!(resolved.platform_path, temp.path().join("android-23"));
}

#[tokio::test]
async fn test_empty_platforms_dir_is_absent() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("platforms")).unwrap();

    let resolved = android_platform_and_path(&TokioFs, Some(temp.path()))
        .await
        .unwrap();
    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_missing_sdk_root_is_absent() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("not-installed");

    let resolved = android_platform_and_path(&TokioFs, Some(&missing))
        .await
        .unwrap();
    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_sorted_directories_skips_files() {
    let temp = TempDir::new().unwrap();
    for dir in ["c", "b", "a", "1", "2"] {
        fs::create_dir(temp.path().join(dir)).unwrap();
    }
    fs::write(temp.path().join("0-file.txt"), "x").unwrap();

    let dirs = sorted_directories(&TokioFs, temp.path()).await.unwrap();
    assert_eq!(dirs, vec!["1", "2", "a", "b", "c"]);
}

#[tokio::test]
async fn test_platform_command_canonicalizes_root() {
    let temp = TempDir::new().unwrap();
    create_platforms(&temp.path().join("platforms"), &["android-34"]);

    let mut settings = Settings::default();
    settings.sdk.root = Some(temp.path().join("platforms").join(".."));

    let root = commands::sdk_root(None, &settings).unwrap();
    assert!(root.is_absolute());
    assert!(!root.ends_with(".."));

    let output = commands::platform(&TokioFs, Some(&root)).await.unwrap();
    match output {
        CommandOutput::Platform {
            resolved: Some(resolved),
        } => assert_eq!(resolved.platform, "android-34"),
        other => panic!("unexpected output: {other:?}"),
    }
}
