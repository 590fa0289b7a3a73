use std::{
    io::{Read as _, Write as _},
    net::SocketAddr,
};

use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};

use crate::response::{BODY, CONTENT_TYPE};

#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn parse(bytes: &[u8]) -> RawResponse {
        let mut headers = [httparse::EMPTY_HEADER; 16];
        let mut res = httparse::Response::new(&mut headers);
        let httparse::Status::Complete(head_len) = res.parse(bytes).expect("invalid response")
        else {
            panic!("partial response: {:?}", String::from_utf8_lossy(bytes));
        };
        RawResponse {
            status: res.code.expect("status code"),
            headers: res
                .headers
                .iter()
                .map(|h| {
                    (
                        h.name.to_owned(),
                        String::from_utf8_lossy(h.value).into_owned(),
                    )
                })
                .collect(),
            body: bytes[head_len..].to_vec(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn assert_hello(&self) {
        assert_eq!(self.status, 200);
        assert_eq!(self.header("content-type"), Some(CONTENT_TYPE));
        assert_eq!(self.header("content-length"), Some("12"));
        assert_eq!(self.body, BODY);
    }
}

/// Serializes a request that asks the server to close the connection after
/// responding, so the response can be read to EOF.
pub fn request(method: &str, path: &str, headers: &[(&str, &str)], body: &[u8]) -> Vec<u8> {
    let mut raw = format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n");
    for (name, value) in headers {
        raw.push_str(&format!("{name}: {value}\r\n"));
    }
    if !body.is_empty() {
        raw.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    raw.push_str("\r\n");
    let mut raw = raw.into_bytes();
    raw.extend_from_slice(body);
    raw
}

pub fn send_blocking(addr: SocketAddr, raw: &[u8]) -> RawResponse {
    let mut stream = std::net::TcpStream::connect(addr).expect("connect");
    stream.write_all(raw).expect("write request");
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).expect("read response");
    RawResponse::parse(&buf)
}

pub async fn send(addr: SocketAddr, raw: &[u8]) -> RawResponse {
    let mut stream = tokio::net::TcpStream::connect(addr).await.expect("connect");
    stream.write_all(raw).await.expect("write request");
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.expect("read response");
    RawResponse::parse(&buf)
}

pub fn random_path() -> String {
    use rand::{distributions::Alphanumeric, Rng as _};

    let mut rng = rand::thread_rng();
    let segments = rng.gen_range(0..4);
    let mut path = String::from("/");
    for i in 0..segments {
        if i > 0 {
            path.push('/');
        }
        let len = rng.gen_range(1..12);
        path.extend((&mut rng).sample_iter(&Alphanumeric).take(len).map(char::from));
    }
    if rng.gen_bool(0.3) {
        path.push_str("?q=1&x=two");
    }
    path
}

pub fn random_body() -> Vec<u8> {
    use rand::Rng as _;

    let mut rng = rand::thread_rng();
    let len = rng.gen_range(0..512);
    (0..len).map(|_| rng.gen()).collect()
}

// HEAD is left out: its response carries no body.
pub const METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "BREW"];
