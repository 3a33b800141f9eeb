// src/config/validate.rs

use std::net::SocketAddr;

use crate::config::model::{ConfigFile, RawConfigFile, ServerSection};
use crate::errors::{Result, TasksortError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TasksortError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let bind_addr = parse_bind(&raw.server)?;
        validate_limits(&raw.server)?;
        Ok(ConfigFile::new_unchecked(bind_addr, &raw.server))
    }
}

/// Parse a listen address, reporting which key was wrong.
pub fn parse_bind_addr(value: &str) -> Result<SocketAddr> {
    value.trim().parse::<SocketAddr>().map_err(|e| {
        TasksortError::ConfigError(format!(
            "[server].bind must be a socket address like \"127.0.0.1:8080\" (got {value:?}: {e})"
        ))
    })
}

fn parse_bind(server: &ServerSection) -> Result<SocketAddr> {
    parse_bind_addr(&server.bind)
}

fn validate_limits(server: &ServerSection) -> Result<()> {
    if server.body_limit_bytes == 0 {
        return Err(TasksortError::ConfigError(
            "[server].body_limit_bytes must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
