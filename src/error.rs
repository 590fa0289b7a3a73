use std::{io, net::SocketAddr};

use thiserror::Error;

/// The listening socket could not be created.
#[derive(Debug, Error)]
#[error("Failed to bind {addr}: {source}")]
pub struct BindError {
    pub addr: SocketAddr,
    #[source]
    pub source: io::Error,
}

impl BindError {
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {value:?}")]
    InvalidPort { value: String },
    #[error("RESPONDER_BACKEND must be 'hyper' or 'naive', got {value:?}")]
    UnknownBackend { value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error("I/O error while serving: {0}")]
    Io(#[from] io::Error),
}
