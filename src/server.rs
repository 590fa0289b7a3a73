use std::net::{SocketAddr, TcpListener};

use crate::{
    config::{Backend, Config},
    error::{BindError, Error},
    hyper_server, listener, naive,
};

/// A bound listening socket and the loop that will serve it.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    backend: Backend,
}

impl Server {
    pub fn bind(config: &Config) -> Result<Server, BindError> {
        let listener = listener::bind(config.addr())?;
        Ok(Server {
            listener,
            backend: config.backend,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Serves forever. Only returns if the backend could not be set up.
    pub fn serve(self) -> Result<(), Error> {
        match self.backend {
            Backend::Hyper => hyper_server::serve(self.listener),
            Backend::Naive => naive::serve(self.listener),
        }
    }
}

/// Binds according to `config` and serves indefinitely.
pub fn start(config: &Config) -> Result<(), Error> {
    let server = Server::bind(config)?;
    let addr = server.local_addr()?;
    tracing::info!(
        backend = %server.backend(),
        "Server running at http://{}:{}/",
        config.host,
        addr.port()
    );
    server.serve()
}
