use std::{convert::Infallible, net::SocketAddr};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{body::Incoming, server::conn::http1, service::service_fn, Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::{error::Error, response};

/// Runs the accept loop on a fresh multi-threaded runtime. Only returns on
/// setup failure.
pub fn serve(listener: std::net::TcpListener) -> Result<(), Error> {
    let threads = num_cpus::get_physical().max(1);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(threads)
        .enable_all()
        .build()?;
    tracing::debug!(message = "Started runtime", threads);

    runtime.block_on(async move {
        listener.set_nonblocking(true)?;
        let listener = TcpListener::from_std(listener)?;
        accept_loop(listener).await;
        Ok::<_, Error>(())
    })
}

pub async fn accept_loop(listener: TcpListener) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::warn!(message = "Failed to accept connection", error = %err);
                continue;
            }
        };
        tracing::debug!(message = "Accepted connection", %peer);

        let io = TokioIo::new(stream);
        tokio::spawn(async move {
            let result = http1::Builder::new()
                .title_case_headers(true)
                .serve_connection(io, service_fn(move |req| handle(req, peer)))
                .await;
            if let Err(err) = result {
                tracing::debug!(message = "Connection error", %peer, error = %err);
            }
        });
    }
}

async fn handle(
    req: Request<Incoming>,
    peer: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    tracing::info!(message = "got request", method = %req.method(), path = %req.uri(), %peer);
    Ok(response::hello())
}
