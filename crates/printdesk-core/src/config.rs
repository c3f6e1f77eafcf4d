// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Server configuration: defaults, optional JSON file, environment overrides.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PrintdeskError, Result};

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "PRINTDESK_CONFIG";
/// Environment variable overriding the listen address.
pub const BIND_ENV: &str = "PRINTDESK_BIND";
/// Environment variable enabling debug mode.
pub const DEBUG_ENV: &str = "PRINTDESK_DEBUG";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Verbose logging.
    pub debug: bool,
    /// Attach a permissive CORS layer.
    pub cors: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Largest request body accepted, in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            debug: false,
            cors: true,
            log_filter: "info".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment: the file named by
    /// `PRINTDESK_CONFIG` (if set), then `PRINTDESK_BIND` / `PRINTDESK_DEBUG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading variables through
    /// `lookup`, so callers (and tests) need not touch the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        Ok(config)
    }

    /// Read a JSON config file. Keys absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data).map_err(|e| {
            PrintdeskError::Config(format!("{}: {e}", path.display()))
        })?;
        info!(path = %path.display(), "configuration file loaded");
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(bind) = lookup(BIND_ENV) {
            self.bind_addr = bind
                .trim()
                .parse()
                .map_err(|e| PrintdeskError::Config(format!("{BIND_ENV}={bind}: {e}")))?;
            debug!(bind_addr = %self.bind_addr, "bind address overridden from environment");
        }
        if let Some(flag) = lookup(DEBUG_ENV) {
            self.debug = parse_flag(&flag);
        }
        Ok(())
    }

    /// The log filter in effect: `debug` overrides the configured filter.
    pub fn effective_log_filter(&self) -> &str {
        if self.debug { "debug" } else { self.log_filter.as_str() }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
