//! Android SDK platform discovery
//!
//! Finds the highest API-level `android-<N>` platform under an SDK root.
//! Two layouts are recognised, tried in order:
//!
//! - **split**: `<root>/platforms/android-<N>` (standard SDK manager install)
//! - **flat**: `<root>/android-<N>` (root pointed straight at the platforms dir)
//!
//! Preview platforms named by codename (`android-UpsideDownCake`) or with a
//! dotted version (`android-4.2`) are ignored.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use droid_core::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::fs::SdkFs;

/// Platform directory names with a numeric API level
static PLATFORM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^android-([0-9]+)$").expect("Invalid platform pattern regex"));

/// The selected platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPlatform {
    /// Directory name exactly as listed, e.g. `android-34`
    ///
    /// Not normalized: a zero-padded `android-07` is reported as is, so
    /// `platform_path` always ends in `platform`.
    pub platform: String,
    /// Full path to the platform directory
    pub platform_path: PathBuf,
    /// Numeric API level parsed from the directory name
    pub api_level: u64,
}

/// Where platform directories live relative to the SDK root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformLayout {
    /// `<root>/platforms/android-<N>`
    Split,
    /// `<root>/android-<N>`
    Flat,
}

impl PlatformLayout {
    /// Layouts in the order they are tried
    pub const SEARCH_ORDER: [PlatformLayout; 2] = [PlatformLayout::Split, PlatformLayout::Flat];

    /// Directory expected to hold `android-<N>` entries for this layout
    pub fn platforms_dir(self, sdk_root: &Path) -> PathBuf {
        match self {
            PlatformLayout::Split => sdk_root.join("platforms"),
            PlatformLayout::Flat => sdk_root.to_path_buf(),
        }
    }

    /// The platforms directory for this layout, if it exists
    pub async fn detect<F: SdkFs>(self, fs: &F, sdk_root: &Path) -> Result<Option<PathBuf>> {
        let dir = self.platforms_dir(sdk_root);
        if fs.exists(&dir).await? {
            Ok(Some(dir))
        } else {
            Ok(None)
        }
    }
}

/// Parse the API level from a platform directory name
///
/// Returns `None` for anything other than `android-<digits>`, and for
/// levels that do not fit in a `u64`.
pub fn parse_platform_level(name: &str) -> Option<u64> {
    PLATFORM_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Pick the entry with the highest API level
///
/// Comparison is numeric (`android-10` beats `android-9`). When two names
/// parse to the same level (`android-07` and `android-7`), the name that
/// sorts first wins, so the result never depends on listing order.
pub fn select_highest<'a, I>(entries: I) -> Option<(&'a str, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .filter_map(|name| parse_platform_level(name).map(|level| (name, level)))
        .max_by(|(a_name, a_level), (b_name, b_level)| {
            a_level.cmp(b_level).then_with(|| b_name.cmp(a_name))
        })
}

/// Find the platforms directory by trying each layout in order
pub async fn find_platforms_dir<F: SdkFs>(fs: &F, sdk_root: &Path) -> Result<Option<PathBuf>> {
    for layout in PlatformLayout::SEARCH_ORDER {
        if let Some(dir) = layout.detect(fs, sdk_root).await? {
            debug!("Using {:?} SDK layout at {}", layout, dir.display());
            return Ok(Some(dir));
        }
        trace!("{:?} SDK layout not present under {}", layout, sdk_root.display());
    }
    Ok(None)
}

/// Resolve the newest installed platform under `sdk_root`
///
/// `Ok(None)` means "unavailable": no SDK root given, no platforms directory
/// in either layout, or no numeric platform in it. Errors from `fs` are
/// returned unchanged.
///
/// The reported `platform` is the winning directory's own name; see
/// [`select_highest`] for how equal levels (`android-7`, `android-07`) are
/// settled.
pub async fn android_platform_and_path<F: SdkFs>(
    fs: &F,
    sdk_root: Option<&Path>,
) -> Result<Option<ResolvedPlatform>> {
    let Some(sdk_root) = sdk_root else {
        warn!("No Android SDK root configured; set ANDROID_HOME");
        return Ok(None);
    };

    let Some(platforms_dir) = find_platforms_dir(fs, sdk_root).await? else {
        debug!("No platforms directory under {}", sdk_root.display());
        return Ok(None);
    };

    let entries = fs.list_dir(&platforms_dir).await?;
    let Some((name, api_level)) = select_highest(entries.iter().map(String::as_str)) else {
        debug!(
            "No numeric platforms among {} entries in {}",
            entries.len(),
            platforms_dir.display()
        );
        return Ok(None);
    };

    let resolved = ResolvedPlatform {
        platform: name.to_string(),
        platform_path: platforms_dir.join(name),
        api_level,
    };
    info!(
        "Resolved Android platform {} at {}",
        resolved.platform,
        resolved.platform_path.display()
    );
    Ok(Some(resolved))
}
