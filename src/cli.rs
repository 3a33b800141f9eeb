// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::OutputFormat;

/// Command-line arguments for `tasksort`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasksort",
    version,
    about = "Order tasks by their prerequisites, or detect that no order exists.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKSORT_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sort a task file once and print the result.
    Sort(SortArgs),
    /// Serve the sorting API over HTTP.
    Serve(ServeArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct SortArgs {
    /// Task file to sort (`.json`, or TOML otherwise). Use `-` for JSON on stdin.
    #[arg(long, value_name = "PATH")]
    pub tasks: String,

    /// Output format: `json` ({name, command} pairs) or `script` (bash).
    #[arg(long, value_name = "FORMAT", default_value = "json")]
    pub format: OutputFormat,

    /// Write the result to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServeArgs {
    /// Path to the server config file (TOML).
    ///
    /// Default: `Tasksort.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Override `[server].bind` from the config file.
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,
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
