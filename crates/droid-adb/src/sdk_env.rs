//! Android SDK root lookup from the environment

use std::path::PathBuf;

/// Environment variables naming the SDK root, in priority order
pub const SDK_ROOT_VARS: &[&str] = &["ANDROID_HOME", "ANDROID_SDK_ROOT"];

/// SDK root from the process environment
pub fn sdk_root_from_env() -> Option<PathBuf> {
    sdk_root_with(|name| std::env::var(name).ok())
}

/// SDK root from an injected variable lookup
///
/// Empty values count as unset.
pub fn sdk_root_with<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    SDK_ROOT_VARS.iter().find_map(|var| {
        lookup(*var)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    })
}
