//! CLI command implementations
//!
//! Each command computes a [`CommandOutput`]; `main` decides whether to
//! print it as text or JSON. Nothing here runs `adb`.

use std::path::{Path, PathBuf};

use droid_adb::{
    android_platform_and_path, build_start_cmd, possible_activity_names, sdk_root_from_env,
    sorted_directories, ResolvedPlatform, SdkFs,
};
use droid_core::prelude::*;
use serde::Serialize;

use crate::config::{LaunchDefaults, Settings};

/// Result of a command, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutput {
    Activities { candidates: Vec<String> },
    StartCmd { api_level: u32, tokens: Vec<String> },
    Platform { resolved: Option<ResolvedPlatform> },
    Directories { root: PathBuf, directories: Vec<String> },
    ConfigInit { path: PathBuf },
}

impl CommandOutput {
    /// Whether the command found what it was asked for
    pub fn is_found(&self) -> bool {
        !matches!(self, CommandOutput::Platform { resolved: None })
    }

    /// Plain-text rendering, one item per line
    pub fn to_text(&self) -> String {
        match self {
            CommandOutput::Activities { candidates } => candidates.join("\n"),
            CommandOutput::StartCmd { tokens, .. } => tokens.join("\n"),
            CommandOutput::Platform { resolved: Some(p) } => {
                format!("{}\t{}", p.platform, p.platform_path.display())
            }
            CommandOutput::Platform { resolved: None } => {
                "No Android platform found. Set ANDROID_HOME or [sdk] root in the config."
                    .to_string()
            }
            CommandOutput::Directories { directories, .. } => directories.join("\n"),
            CommandOutput::ConfigInit { path } => format!("Config: {}", path.display()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Process exit status for a failed command
///
/// Bad arguments or config exit with 2; environment failures (I/O) with 1,
/// the same status as "nothing found".
pub fn exit_code_for(err: &Error) -> i32 {
    if err.is_fatal() {
        2
    } else {
        1
    }
}

/// Candidate activity names for `pkg`
pub fn activities(pkg: &str, activity: &str) -> CommandOutput {
    CommandOutput::Activities {
        candidates: possible_activity_names(pkg, activity),
    }
}

/// `am start` tokens from CLI flags layered over config defaults
pub fn start_cmd(
    settings: &Settings,
    overrides: &LaunchDefaults,
    api_level: Option<u32>,
) -> Result<CommandOutput> {
    let merged = settings.launch.merged(overrides);
    let options = merged.to_launch_options().ok_or_else(|| {
        Error::invalid_argument(
            "both --pkg and --activity are required (or set them under [launch] in the config)",
        )
    })?;

    let api_level = api_level.unwrap_or_else(|| settings.device.api_level_or_default());
    Ok(CommandOutput::StartCmd {
        api_level,
        tokens: build_start_cmd(&options, api_level),
    })
}

/// SDK root to search: CLI flag, then config, then the environment
pub fn sdk_root(cli_root: Option<&Path>, settings: &Settings) -> Option<PathBuf> {
    let root = cli_root
        .map(Path::to_path_buf)
        .or_else(|| settings.sdk.root.clone())
        .or_else(sdk_root_from_env)?;

    // Report an absolute path when the root exists
    Some(dunce::canonicalize(&root).unwrap_or(root))
}

/// Newest installed platform under `sdk_root`
pub async fn platform<F: SdkFs>(fs: &F, sdk_root: Option<&Path>) -> Result<CommandOutput> {
    let resolved = android_platform_and_path(fs, sdk_root)
        .await
        .context("Failed to resolve Android platform")?;
    Ok(CommandOutput::Platform { resolved })
}

/// Sorted subdirectories of `root`
pub async fn directories<F: SdkFs>(fs: &F, root: &Path) -> Result<CommandOutput> {
    let directories = sorted_directories(fs, root)
        .await
        .with_context(|| format!("Failed to list {}", root.display()))?;
    Ok(CommandOutput::Directories {
        root: root.to_path_buf(),
        directories,
    })
}
