// src/logging.rs

//! Logging setup for `tasksort` using `tracing` + `tracing-subscriber`.
//!
//! The filter is an [`EnvFilter`] built from, in priority order:
//! 1. `--log-level` CLI flag, applied to every target
//! 2. `TASKSORT_LOG` environment variable, full directive syntax
//!    (e.g. `tasksort=debug,tower_http=warn`)
//! 3. [`DEFAULT_DIRECTIVES`]
//!
//! Request/response spans from `tower_http` are emitted at INFO (see
//! [`crate::server::router`]), so they show up with the default filter.
//! Logs go to STDERR; stdout carries only rendered output.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "TASKSORT_LOG";

/// Filter used when neither the flag nor the environment sets one.
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(())
}

/// Resolve the filter directives for the given flag and environment value.
///
/// A blank environment value counts as unset.
pub fn filter_directives(cli_level: Option<LogLevel>, env: Option<&str>) -> String {
    match (cli_level, env.map(str::trim)) {
        (Some(lvl), _) => level_directive(lvl).to_string(),
        (None, Some(directives)) if !directives.is_empty() => directives.to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Build the [`EnvFilter`], rejecting malformed `TASKSORT_LOG` values.
pub fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> Result<EnvFilter> {
    let directives = filter_directives(cli_level, env);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow!("invalid {LOG_ENV} directives {directives:?}: {e}"))
}

fn level_directive(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
