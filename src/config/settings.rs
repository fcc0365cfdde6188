//! Settings parser for .droid-launch/config.toml

use super::types::Settings;
use droid_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".droid-launch";

const DEFAULT_CONFIG: &str = r#"# droid-launch configuration

[sdk]
# Overrides ANDROID_HOME / ANDROID_SDK_ROOT
# root = "/opt/android-sdk"

[device]
# API level of the target device; gates options such as -S and --user
# api_level = 30

[launch]
# pkg = "com.example.app"
# activity = ".MainActivity"
# wait = true
# stop = false
# optional_intent_arguments = "-d http://example.com"
"#;

/// Default config file location under `project_path`
pub fn settings_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.droid-launch/config.toml` under `project_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = settings_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match try_load_settings(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit file, failing on any problem
pub fn try_load_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }

    let content = std::fs::read_to_string(config_path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", config_path, e)))?;

    let settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("Failed to parse {:?}: {}", config_path, e)))?;

    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Create `.droid-launch/config.toml` with commented defaults
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let config_dir = project_path.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", CONFIG_DIR, e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
    } else {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILENAME), "[device\napi_level = ").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_try_load_settings_reports_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(matches!(
            try_load_settings(&missing),
            Err(Error::ConfigNotFound { .. })
        ));

        let broken = temp.path().join("broken.toml");
        fs::write(&broken, "api_level = [").unwrap();
        assert!(matches!(
            try_load_settings(&broken),
            Err(Error::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_load_settings_reads_values() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(CONFIG_FILENAME),
            "[sdk]\nroot = \"/opt/sdk\"\n\n[device]\napi_level = 28\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.sdk.root, Some(PathBuf::from("/opt/sdk")));
        assert_eq!(settings.device.api_level, Some(28));
    }

    #[test]
    fn test_init_config_dir_writes_parseable_defaults() {
        let temp = TempDir::new().unwrap();
        let path = init_config_dir(temp.path()).unwrap();
        assert!(path.exists());

        let settings = try_load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILENAME), "[device]\napi_level = 33\n").unwrap();

        let path = init_config_dir(temp.path()).unwrap();
        let settings = try_load_settings(&path).unwrap();
        assert_eq!(settings.device.api_level, Some(33));
    }
}
