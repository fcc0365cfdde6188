//! Configuration file parsing for droid-launch
//!
//! Supports:
//! - `.droid-launch/config.toml` - SDK root, device API level, launch defaults

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, settings_path, try_load_settings};
pub use types::*;
