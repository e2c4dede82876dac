//! Server configuration read from the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LATENCY_MS: u64 = 500;
pub const DEFAULT_DEMO_EMAIL: &str = "test@example.com";
pub const DEFAULT_DEMO_PASSWORD: &str = "123pass456";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value `{value}`: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Delay applied to every request before it is handled.
    pub latency: Duration,
    /// Directory of the built UI, served for any unmatched path.
    pub static_dir: Option<PathBuf>,
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            static_dir: None,
            demo_email: DEFAULT_DEMO_EMAIL.to_string(),
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let host = match get("HOST") {
            Some(value) => parse("HOST", &value)?,
            None => defaults.host,
        };
        let port = match get("PORT") {
            Some(value) => parse("PORT", &value)?,
            None => defaults.port,
        };
        let latency = match get("LATENCY_MS") {
            Some(value) => Duration::from_millis(parse("LATENCY_MS", &value)?),
            None => defaults.latency,
        };

        Ok(Self {
            host,
            port,
            latency,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            demo_email: get("DEMO_EMAIL").unwrap_or(defaults.demo_email),
            demo_password: get("DEMO_PASSWORD").unwrap_or(defaults.demo_password),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|error: T::Err| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: error.to_string(),
    })
}
