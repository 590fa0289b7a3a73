//! The one response this server ever sends.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{header, Response, StatusCode};

pub const BODY: &[u8] = b"Hello World\n";
pub const CONTENT_TYPE: &str = "text/plain";

/// Raw HTTP/1.1 bytes for backends that write straight to the socket.
pub const RESPONSE_200_HTTP11: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 12\r\nConnection: close\r\n\r\nHello World\n";

pub fn hello() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(BODY)));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(CONTENT_TYPE),
    );
    response
}
