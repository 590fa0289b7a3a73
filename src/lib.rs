//! A minimal HTTP responder: answers every request with `200 OK` and
//! `Hello World\n`, whatever was asked.

pub mod config;
pub mod error;
pub mod hyper_server;
pub mod listener;
pub mod naive;
pub mod response;
pub mod server;

#[cfg(test)]
mod test_util;

pub use config::{Backend, Config};
pub use error::{BindError, ConfigError, Error};
pub use server::{start, Server};

/// Installs the global tracing subscriber writing to stdout. `RUST_LOG`
/// overrides the default `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
