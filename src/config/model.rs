// src/config/model.rs

use std::net::SocketAddr;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [server]
/// bind = "0.0.0.0:8080"
/// body_limit_bytes = 1048576
/// cors = false
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// HTTP server settings from `[server]`.
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Address to listen on, e.g. `"127.0.0.1:8080"`.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Maximum accepted request body size.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,

    /// Allow cross-origin requests from any origin.
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_body_limit_bytes() -> usize {
    2 * 1024 * 1024
}

fn default_cors() -> bool {
    true
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            body_limit_bytes: default_body_limit_bytes(),
            cors: default_cors(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, so `bind_addr` is always
/// a parsed socket address.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    bind_addr: SocketAddr,
    body_limit_bytes: usize,
    cors: bool,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(bind_addr: SocketAddr, server: &ServerSection) -> Self {
        Self {
            bind_addr,
            body_limit_bytes: server.body_limit_bytes,
            cors: server.cors,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_bytes
    }

    pub fn cors(&self) -> bool {
        self.cors
    }

    /// Replace the listen address (e.g. from `--bind`).
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let server = ServerSection::default();
        let bind_addr = SocketAddr::from(([127, 0, 0, 1], 8080));
        Self::new_unchecked(bind_addr, &server)
    }
}
