//! # droid-core - Core Domain Types
//!
//! Foundation crate for droid-launch. Provides shared domain types, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ComponentName`] - A `package/activity` pair as accepted by `am start -n`
//! - [`DEFAULT_API_LEVEL`] - Fallback API level for command building
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum split by layer (IO, SDK, config, arguments)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File-backed tracing subscriber
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use droid_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all droid-launch crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{ComponentName, DEFAULT_API_LEVEL};
