// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dcclaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dcclaunch",
    version,
    about = "Launch DCC pipeline tools with a composed environment.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Dcclaunch.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Dcclaunch.toml")]
    pub config: String,

    /// Tool to launch (a `[tool.<name>]` section).
    ///
    /// May be omitted when the config declares `default_tool` or contains
    /// exactly one tool.
    #[arg(long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Host profile to launch under (a `[host.<name>]` section).
    ///
    /// Defaults to `default_host` from `[config]` (normally "standalone").
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,

    /// Override the project exported to the tool (HAL_PROJECT).
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Override the user login exported to the tool (HAL_USER_LOGIN).
    #[arg(long, value_name = "LOGIN")]
    pub user: Option<String>,

    /// Override the task exported to the tool (HAL_TASK).
    #[arg(long, value_name = "NAME")]
    pub task: Option<String>,

    /// Resolve and print the launch plan, but don't start any process.
    #[arg(long)]
    pub dry_run: bool,

    /// Never hold the terminal open, regardless of the configured pause
    /// behaviour.
    #[arg(long)]
    pub no_pause: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DCCLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
