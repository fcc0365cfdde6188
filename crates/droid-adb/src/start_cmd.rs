//! `am start` argument building
//!
//! Produces the argument vector for the activity manager's `start`
//! subcommand. Nothing here executes; callers hand the tokens to whatever
//! runs `adb shell`.

use droid_core::ComponentName;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::intent_args;

/// Options for launching an activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LaunchOptions {
    /// Application package id
    pub pkg: String,

    /// Activity, relative (`.Main`) or fully qualified
    pub activity: String,

    /// User to launch as (`--user`)
    #[serde(default)]
    pub user: Option<String>,

    /// Wait for the launch to complete (`-W`)
    #[serde(default)]
    pub wait: bool,

    /// Force-stop the app before starting it (`-S`)
    #[serde(default, alias = "stop_app", alias = "stopApp")]
    pub stop: bool,

    /// Intent action (`-a`)
    #[serde(default)]
    pub action: Option<String>,

    /// Intent category (`-c`)
    #[serde(default)]
    pub category: Option<String>,

    /// Intent flags as a hex string (`-f`), passed through verbatim
    #[serde(default)]
    pub flags: Option<String>,

    /// Same effect as `wait`; kept as a separate switch for drivers that set it
    #[serde(default, alias = "waitForLaunch")]
    pub wait_for_launch: bool,

    /// Free-form extra arguments, see [`intent_args::tokenize`]
    #[serde(default, alias = "optionalIntentArguments")]
    pub optional_intent_arguments: Option<String>,
}

impl LaunchOptions {
    pub fn new(pkg: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            pkg: pkg.into(),
            activity: activity.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_stop(mut self, stop: bool) -> Self {
        self.stop = stop;
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn with_wait_for_launch(mut self, wait_for_launch: bool) -> Self {
        self.wait_for_launch = wait_for_launch;
        self
    }

    pub fn with_intent_arguments(mut self, args: impl Into<String>) -> Self {
        self.optional_intent_arguments = Some(args.into());
        self
    }

    pub fn component(&self) -> ComponentName {
        ComponentName::new(&self.pkg, &self.activity)
    }
}

/// A launch option that older activity managers reject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiGate {
    /// The `am start` switch being gated
    pub option: &'static str,
    /// Lowest API level whose `am` understands the switch
    pub min_api_level: u32,
}

/// Every API-gated `am start` option.
///
/// - `-S` (force-stop before start) arrived in API 15.
/// - `--user` arrived with multi-user support in API 17.
///
/// Options below their level are dropped with a warning.
pub const API_GATES: &[ApiGate] = &[
    ApiGate {
        option: STOP_OPTION,
        min_api_level: 15,
    },
    ApiGate {
        option: USER_OPTION,
        min_api_level: 17,
    },
];

const STOP_OPTION: &str = "-S";
const USER_OPTION: &str = "--user";

fn gate_for(option: &str) -> Option<&'static ApiGate> {
    API_GATES.iter().find(|gate| gate.option == option)
}

/// Whether `option` may be emitted for a device at `api_level`
///
/// Options not listed in [`API_GATES`] are always allowed.
pub fn is_supported(option: &str, api_level: u32) -> bool {
    gate_for(option).map_or(true, |gate| api_level >= gate.min_api_level)
}

/// [`is_supported`], warning about options that get dropped
fn gated(option: &str, api_level: u32) -> bool {
    let supported = is_supported(option, api_level);
    if let Some(gate) = gate_for(option).filter(|_| !supported) {
        warn!(
            "Dropping {} from am start: needs API {}, device is API {}",
            option, gate.min_api_level, api_level
        );
    }
    supported
}

/// Build the `am start` argument vector
///
/// Order: `am start`, `--user`, `-n <pkg>/<activity>`, `-W`, `-a`, `-c`,
/// `-f`, the tokenized intent arguments, and `-S` last.
pub fn build_start_cmd(options: &LaunchOptions, api_level: u32) -> Vec<String> {
    let mut cmd: Vec<String> = vec!["am".into(), "start".into()];

    if let Some(user) = options.user.as_deref().filter(|u| !u.is_empty()) {
        if gated(USER_OPTION, api_level) {
            cmd.push(USER_OPTION.into());
            cmd.push(user.into());
        }
    }

    cmd.push("-n".into());
    cmd.push(options.component().to_string());

    if options.wait || options.wait_for_launch {
        cmd.push("-W".into());
    }

    let intent_fields = [
        ("-a", &options.action),
        ("-c", &options.category),
        ("-f", &options.flags),
    ];
    for (switch, value) in intent_fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            cmd.push(switch.into());
            cmd.push(value.into());
        }
    }

    if let Some(args) = options.optional_intent_arguments.as_deref() {
        cmd.extend(intent_args::tokenize(args));
    }

    if options.stop && gated(STOP_OPTION, api_level) {
        cmd.push(STOP_OPTION.into());
    }

    debug!("am start command for API {}: {:?}", api_level, cmd);
    cmd
}
