//! Configuration types for droid-launch
//!
//! Defines:
//! - `Settings` - Contents of `.droid-launch/config.toml`
//! - `LaunchDefaults` - Partial launch options merged under CLI flags

use droid_adb::LaunchOptions;
use droid_core::DEFAULT_API_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub sdk: SdkSettings,

    #[serde(default)]
    pub device: DeviceSettings,

    #[serde(default)]
    pub launch: LaunchDefaults,
}

/// `[sdk]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SdkSettings {
    /// SDK root; takes precedence over ANDROID_HOME / ANDROID_SDK_ROOT
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// `[device]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceSettings {
    /// API level of the target device, used for option gating
    #[serde(default)]
    pub api_level: Option<u32>,
}

impl DeviceSettings {
    pub fn api_level_or_default(&self) -> u32 {
        self.api_level.unwrap_or(DEFAULT_API_LEVEL)
    }
}

/// `[launch]` section: every field optional, CLI flags win
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LaunchDefaults {
    #[serde(default)]
    pub pkg: Option<String>,

    #[serde(default)]
    pub activity: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub wait: bool,

    #[serde(default)]
    pub stop: bool,

    #[serde(default)]
    pub action: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub flags: Option<String>,

    #[serde(default)]
    pub wait_for_launch: bool,

    #[serde(default)]
    pub optional_intent_arguments: Option<String>,
}

impl LaunchDefaults {
    /// Overlay `self` with `overrides`, where set fields and `true` switches win
    pub fn merged(&self, overrides: &LaunchDefaults) -> LaunchDefaults {
        LaunchDefaults {
            pkg: overrides.pkg.clone().or_else(|| self.pkg.clone()),
            activity: overrides.activity.clone().or_else(|| self.activity.clone()),
            user: overrides.user.clone().or_else(|| self.user.clone()),
            wait: overrides.wait || self.wait,
            stop: overrides.stop || self.stop,
            action: overrides.action.clone().or_else(|| self.action.clone()),
            category: overrides.category.clone().or_else(|| self.category.clone()),
            flags: overrides.flags.clone().or_else(|| self.flags.clone()),
            wait_for_launch: overrides.wait_for_launch || self.wait_for_launch,
            optional_intent_arguments: overrides
                .optional_intent_arguments
                .clone()
                .or_else(|| self.optional_intent_arguments.clone()),
        }
    }

    /// Complete launch options, or `None` when package or activity is missing
    pub fn to_launch_options(&self) -> Option<LaunchOptions> {
        let (pkg, activity) = (self.pkg.as_ref()?, self.activity.as_ref()?);
        Some(LaunchOptions {
            pkg: pkg.clone(),
            activity: activity.clone(),
            user: self.user.clone(),
            wait: self.wait,
            stop: self.stop,
            action: self.action.clone(),
            category: self.category.clone(),
            flags: self.flags.clone(),
            wait_for_launch: self.wait_for_launch,
            optional_intent_arguments: self.optional_intent_arguments.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.sdk.root.is_none());
        assert_eq!(settings.device.api_level_or_default(), DEFAULT_API_LEVEL);
        assert!(settings.launch.to_launch_options().is_none());
    }

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
[sdk]
root = "/opt/android-sdk"

[device]
api_level = 30

[launch]
pkg = "com.example.app"
activity = ".MainActivity"
wait = true
optional_intent_arguments = "-d http://example.com"
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.sdk.root, Some(PathBuf::from("/opt/android-sdk")));
        assert_eq!(settings.device.api_level_or_default(), 30);

        let options = settings.launch.to_launch_options().unwrap();
        assert_eq!(options.pkg, "com.example.app");
        assert_eq!(options.activity, ".MainActivity");
        assert!(options.wait);
        assert!(!options.stop);
        assert_eq!(
            options.optional_intent_arguments.as_deref(),
            Some("-d http://example.com")
        );
    }

    #[test]
    fn test_parse_partial_settings() {
        let settings: Settings = toml::from_str("[device]\napi_level = 19\n").unwrap();
        assert_eq!(settings.device.api_level, Some(19));
        assert_eq!(settings.launch, LaunchDefaults::default());
    }

    #[test]
    fn test_merged_prefers_overrides() {
        let base = LaunchDefaults {
            pkg: Some("com.base".into()),
            activity: Some(".Base".into()),
            action: Some("android.intent.action.MAIN".into()),
            stop: true,
            ..Default::default()
        };
        let overrides = LaunchDefaults {
            activity: Some(".Override".into()),
            wait: true,
            ..Default::default()
        };

        let merged = base.merged(&overrides);
        assert_eq!(merged.pkg.as_deref(), Some("com.base"));
        assert_eq!(merged.activity.as_deref(), Some(".Override"));
        assert_eq!(merged.action.as_deref(), Some("android.intent.action.MAIN"));
        assert!(merged.stop);
        assert!(merged.wait);
    }

    #[test]
    fn test_missing_activity_gives_no_options() {
        let defaults = LaunchDefaults {
            pkg: Some("com.example".into()),
            ..Default::default()
        };
        assert!(defaults.to_launch_options().is_none());
    }
}
