//! droid-launch - Android activity launch helpers
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use droid_adb::TokioFs;
use droid_core::logging;
use droid_launch::commands::{self, CommandOutput};
use droid_launch::config::{self, LaunchDefaults, Settings};
use tracing::{debug, error};

/// droid-launch - Build `am start` commands and inspect Android SDKs
#[derive(Parser, Debug)]
#[command(name = "droid-launch")]
#[command(about = "Activity resolution, am start commands and SDK platform lookup", long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ./.droid-launch/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List candidate activity names to try, most specific first
    Activities {
        /// Application package id
        pkg: String,
        /// Activity as configured (bare, relative or fully qualified)
        activity: String,
    },

    /// Print the `am start` argument vector, one token per line
    StartCmd(StartCmdArgs),

    /// Print the newest installed SDK platform
    Platform {
        /// SDK root (default: config, then ANDROID_HOME / ANDROID_SDK_ROOT)
        #[arg(long, value_name = "PATH")]
        sdk_root: Option<PathBuf>,
    },

    /// List subdirectories of PATH, sorted
    Dirs {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Create .droid-launch/config.toml with commented defaults
    Init,
}

#[derive(ClapArgs, Debug)]
struct StartCmdArgs {
    #[arg(long)]
    pkg: Option<String>,

    #[arg(long)]
    activity: Option<String>,

    /// Launch as this user (API 17+)
    #[arg(long)]
    user: Option<String>,

    /// Wait for launch to complete (-W)
    #[arg(long)]
    wait: bool,

    /// Force-stop the app first (-S, API 15+)
    #[arg(long)]
    stop: bool,

    #[arg(long)]
    action: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// Intent flags, hex (e.g. 0x10200000)
    #[arg(long)]
    flags: Option<String>,

    #[arg(long)]
    wait_for_launch: bool,

    /// Extra intent arguments, e.g. "-d http://example.com -e key value"
    #[arg(long, allow_hyphen_values = true)]
    intent_args: Option<String>,

    /// Target device API level (default: config, then 21)
    #[arg(long)]
    api_level: Option<u32>,
}

impl From<StartCmdArgs> for LaunchDefaults {
    fn from(args: StartCmdArgs) -> Self {
        LaunchDefaults {
            pkg: args.pkg,
            activity: args.activity,
            user: args.user,
            wait: args.wait,
            stop: args.stop,
            action: args.action,
            category: args.category,
            flags: args.flags,
            wait_for_launch: args.wait_for_launch,
            optional_intent_arguments: args.intent_args,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging failures shouldn't block command output
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let json = args.json;
    let output = match run(args).await {
        Ok(output) => output,
        Err(e) if e.is_fatal() => {
            error!("{}", e);
            eprintln!("Error: {e}");
            std::process::exit(commands::exit_code_for(&e));
        }
        Err(e) => return Err(e.into()),
    };
    debug!(found = output.is_found(), "Command finished");

    if json {
        println!("{}", output.to_json()?);
    } else if output.is_found() {
        println!("{}", output.to_text());
    } else {
        eprintln!("{}", output.to_text());
    }

    if !output.is_found() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(args: Args) -> droid_core::Result<CommandOutput> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings: Settings = match &args.config {
        Some(path) => config::try_load_settings(path)?,
        None => config::load_settings(&cwd),
    };

    let output = match args.command {
        Command::Activities { pkg, activity } => commands::activities(&pkg, &activity),
        Command::StartCmd(start) => {
            let api_level = start.api_level;
            commands::start_cmd(&settings, &start.into(), api_level)?
        }
        Command::Platform { sdk_root } => {
            let root = commands::sdk_root(sdk_root.as_deref(), &settings);
            commands::platform(&TokioFs, root.as_deref()).await?
        }
        Command::Dirs { path } => commands::directories(&TokioFs, &path).await?,
        Command::Init => CommandOutput::ConfigInit {
            path: config::init_config_dir(&cwd)?,
        },
    };
    Ok(output)
}
