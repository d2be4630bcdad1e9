use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::screen::{routes::ScreenSettings, screen_model::Mode};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "screen-descriptor",
    version,
    about = "Inspect and check admin screen descriptors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base path of API URLs
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Base path of UI routes
    #[arg(long, global = true)]
    pub ui_base: Option<String>,

    /// Path to config file (default: screen-descriptor.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the derived form, table and URLs of a screen
    Inspect {
        /// Descriptor YAML file or directory
        #[arg(long)]
        screen: String,

        /// Screen to show when the path holds several
        #[arg(long)]
        name: Option<String>,

        /// Form mode: view, create or edit
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Output format: console or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,
    },

    /// List navigation entries for a set of screens
    Navigator {
        /// Descriptor YAML file or directory
        #[arg(long)]
        screens: String,

        /// Output format: console or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,
    },

    /// Report misconfigured screens; exits non-zero when any are found
    Check {
        /// Descriptor YAML file or directory
        #[arg(long)]
        screens: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `screen-descriptor.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: ScreenSettings,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("screen-descriptor.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Resolve base paths: CLI > config file > defaults.
pub fn resolve_settings(
    api_base: Option<&str>,
    ui_base: Option<&str>,
    config: &AppConfig,
) -> ScreenSettings {
    ScreenSettings {
        api_base: api_base
            .map(str::to_string)
            .unwrap_or_else(|| config.settings.api_base.clone()),
        ui_base: ui_base
            .map(str::to_string)
            .unwrap_or_else(|| config.settings.ui_base.clone()),
    }
}

/// Default log filter for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
