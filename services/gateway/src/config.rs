//! Gateway configuration
//!
//! Read from environment variables (a `.env` file is loaded first by the
//! binary if present). Unset variables fall back to defaults; set but
//! unparseable ones are a startup error.

use matchmaker::MatchmakerConfig;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub const HOST_VAR: &str = "PONG_MATCHER_HOST";
pub const PORT_VAR: &str = "PONG_MATCHER_PORT";
pub const REMATCH_WINDOW_VAR: &str = "PONG_MATCHER_REMATCH_WINDOW";

/// Port the acceptance clients connect to
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the gateway binary
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    pub matchmaker: MatchmakerConfig,
}

impl GatewayConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = parse_var(&lookup, HOST_VAR)? {
            config.host = host;
        }
        if let Some(port) = parse_var(&lookup, PORT_VAR)? {
            config.port = port;
        }
        if let Some(window) = parse_var(&lookup, REMATCH_WINDOW_VAR)? {
            config.matchmaker = config.matchmaker.with_rematch_window(window);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            matchmaker: MatchmakerConfig::default(),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
