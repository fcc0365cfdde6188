//! droid-launch library
//!
//! Command-line front end over [`droid_adb`]: activity candidates, `am start`
//! argument vectors and SDK platform lookup, with defaults from
//! `.droid-launch/config.toml`.

pub mod commands;
pub mod config;

pub use commands::CommandOutput;
