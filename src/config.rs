//! Startup configuration, read once from the environment.

use std::{
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
/// All interfaces.
pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub const PORT_VAR: &str = "PORT";
pub const BACKEND_VAR: &str = "RESPONDER_BACKEND";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// tokio + hyper, one task per connection.
    #[default]
    Hyper,
    /// Blocking std sockets, one thread per connection.
    Naive,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hyper" => Ok(Backend::Hyper),
            "naive" => Ok(Backend::Naive),
            _ => Err(ConfigError::UnknownBackend {
                value: value.to_owned(),
            }),
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Hyper => f.write_str("hyper"),
            Backend::Naive => f.write_str("naive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub backend: Backend,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: HOST,
            port: DEFAULT_PORT,
            backend: Backend::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values are
    /// treated like missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        let backend = match var(BACKEND_VAR) {
            Some(value) => value.parse()?,
            None => Backend::default(),
        };

        Ok(Config {
            host: HOST,
            port,
            backend,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
