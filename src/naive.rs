use std::{
    io::{self, Read, Write},
    net::{Shutdown, SocketAddr, TcpListener, TcpStream},
};

use crate::{
    error::Error,
    response::{BODY, RESPONSE_200_HTTP11},
};

const MAX_HEAD_SIZE: usize = 8192;
const MAX_DISCARDED_BODY: u64 = 64 * 1024;

pub fn serve(listener: TcpListener) -> Result<(), Error> {
    listener.set_nonblocking(false)?;
    loop {
        let (stream, peer) = match listener.accept() {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::warn!(message = "Failed to accept connection", error = %err);
                continue;
            }
        };
        tracing::debug!(message = "Accepted connection", %peer);

        std::thread::spawn(move || {
            if let Err(err) = handle_connection(stream, peer) {
                tracing::debug!(message = "Connection error", %peer, error = %err);
            }
        });
    }
}

#[derive(Debug, Default)]
struct RequestHead {
    method: Option<String>,
    path: Option<String>,
    content_length: u64,
}

fn handle_connection(mut stream: TcpStream, peer: SocketAddr) -> io::Result<()> {
    let mut buf = [0u8; MAX_HEAD_SIZE];
    let Some((head, body_read)) = read_head(&mut stream, &mut buf)? else {
        // Closed before sending anything.
        return Ok(());
    };

    tracing::info!(
        message = "got request",
        method = head.method.as_deref().unwrap_or("-"),
        path = head.path.as_deref().unwrap_or("-"),
        %peer
    );

    let remaining = head.content_length.saturating_sub(body_read as u64);
    if remaining > 0 {
        io::copy(
            &mut (&mut stream).take(remaining.min(MAX_DISCARDED_BODY)),
            &mut io::sink(),
        )?;
    }

    if head.method.as_deref() == Some("HEAD") {
        stream.write_all(&RESPONSE_200_HTTP11[..RESPONSE_200_HTTP11.len() - BODY.len()])?;
    } else {
        stream.write_all(RESPONSE_200_HTTP11)?;
    }
    stream.flush()?;
    stream.shutdown(Shutdown::Both)
}

/// Reads until the request head is complete, the buffer is full or the peer
/// stops sending. Returns `None` if nothing was received at all, otherwise
/// whatever could be parsed plus the number of body bytes already read.
/// A head that fails to parse still counts as a request.
fn read_head(stream: &mut TcpStream, buf: &mut [u8]) -> io::Result<Option<(RequestHead, usize)>> {
    let mut filled = 0;
    loop {
        let n = stream.read(&mut buf[filled..])?;
        filled += n;
        if filled == 0 {
            return Ok(None);
        }

        let mut headers = [httparse::EMPTY_HEADER; 32];
        let mut req = httparse::Request::new(&mut headers);
        match req.parse(&buf[..filled]) {
            Ok(httparse::Status::Complete(head_len)) => {
                let head = RequestHead {
                    method: req.method.map(str::to_owned),
                    path: req.path.map(str::to_owned),
                    content_length: content_length(req.headers),
                };
                return Ok(Some((head, filled - head_len)));
            }
            Ok(httparse::Status::Partial) if n > 0 && filled < buf.len() => continue,
            Ok(httparse::Status::Partial) => {
                let head = RequestHead {
                    method: req.method.map(str::to_owned),
                    path: req.path.map(str::to_owned),
                    content_length: 0,
                };
                return Ok(Some((head, 0)));
            }
            Err(err) => {
                tracing::debug!(message = "Unparseable request head", error = %err);
                return Ok(Some((RequestHead::default(), 0)));
            }
        }
    }
}

fn content_length(headers: &[httparse::Header<'_>]) -> u64 {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case("content-length"))
        .and_then(|h| std::str::from_utf8(h.value).ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}
