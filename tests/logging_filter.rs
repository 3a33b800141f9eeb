// tests/logging_filter.rs

use std::error::Error;

use tasksort::cli::LogLevel;
use tasksort::logging::{DEFAULT_DIRECTIVES, build_filter, filter_directives};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn cli_level_overrides_env_directives() {
    let directives = filter_directives(Some(LogLevel::Debug), Some("tasksort=trace"));
    assert_eq!(directives, "debug");
}

#[test]
fn env_directives_apply_without_cli_level() {
    let directives = filter_directives(None, Some("  tasksort=debug,tower_http=info "));
    assert_eq!(directives, "tasksort=debug,tower_http=info");
}

#[test]
fn blank_or_missing_env_falls_back_to_info() {
    assert_eq!(filter_directives(None, None), DEFAULT_DIRECTIVES);
    assert_eq!(filter_directives(None, Some("   ")), DEFAULT_DIRECTIVES);
    assert_eq!(DEFAULT_DIRECTIVES, "info");
}

#[test]
fn malformed_env_directives_are_rejected() {
    let err = build_filter(None, Some("tasksort=loud")).unwrap_err();
    assert!(err.to_string().contains("TASKSORT_LOG"));
}

#[test]
fn per_target_env_directives_are_accepted() -> TestResult {
    let filter = build_filter(None, Some("tasksort=info,tower_http=debug"))?;
    let rendered = filter.to_string();
    assert!(rendered.contains("tower_http=debug"));
    Ok(())
}

#[test]
fn cli_level_ignores_malformed_env() -> TestResult {
    build_filter(Some(LogLevel::Warn), Some("tasksort=loud"))?;
    Ok(())
}
