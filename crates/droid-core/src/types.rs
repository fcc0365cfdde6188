//! Shared domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// API level assumed when neither the caller nor the config names one
pub const DEFAULT_API_LEVEL: u32 = 21;

/// A fully addressed Android component, as passed to `am start -n`
///
/// The activity is kept exactly as given (relative `.Main` or fully
/// qualified); the activity manager accepts both spellings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentName {
    pub package: String,
    pub activity: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            activity: activity.into(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.activity)
    }
}
