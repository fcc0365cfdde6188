//! # droid-adb - Android Launch Helpers
//!
//! Builds what an automation driver hands to `adb`: candidate activity
//! names, the `am start` argument vector, and the newest installed SDK
//! platform. Nothing here spawns processes.
//!
//! Depends on [`droid_core`] for error handling and shared types.
//!
//! ## Public API
//!
//! ### Activity Names
//! - [`possible_activity_names()`] - Ordered candidate spellings for an activity
//!
//! ### Launch Command
//! - [`LaunchOptions`] - Package, activity and intent options for `am start`
//! - [`build_start_cmd()`] - Produce the `am start` argument vector
//! - [`intent_args::tokenize()`] - Split free-form intent arguments
//! - [`API_GATES`] - Options that need a minimum API level
//!
//! ### SDK Platforms
//! - [`android_platform_and_path()`] - Highest numeric `android-<N>` platform
//! - [`PlatformLayout`] - Split (`platforms/`) and flat SDK layouts
//! - [`sorted_directories()`] - Sorted subdirectory listing
//! - [`sdk_root_from_env()`] - `ANDROID_HOME` / `ANDROID_SDK_ROOT` lookup
//!
//! ### Filesystem Capability
//! - [`SdkFs`] / [`LocalSdkFs`] - Injected read-only filesystem access
//! - [`TokioFs`] - `tokio::fs` implementation

pub mod activity;
pub mod directories;
pub mod fs;
pub mod intent_args;
pub mod platform;
pub mod sdk_env;
pub mod start_cmd;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use activity::possible_activity_names;
pub use directories::sorted_directories;
pub use fs::{LocalSdkFs, SdkFs, TokioFs};
pub use platform::{
    android_platform_and_path, find_platforms_dir, parse_platform_level, select_highest,
    PlatformLayout, ResolvedPlatform,
};
pub use sdk_env::{sdk_root_from_env, sdk_root_with, SDK_ROOT_VARS};
pub use start_cmd::{build_start_cmd, is_supported, ApiGate, LaunchOptions, API_GATES};
