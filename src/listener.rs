use std::net::{SocketAddr, TcpListener};

use crate::error::BindError;

const BACKLOG: i32 = 1024;

/// Creates a listening TCP socket on `addr`.
///
/// `SO_REUSEADDR` is set so a restarted process can reuse a port whose old
/// connections are still in TIME_WAIT. Binding still fails while another
/// socket is actively listening on the same address.
pub fn bind(addr: SocketAddr) -> Result<TcpListener, BindError> {
    let map_err = |source| BindError { addr, source };

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )
    .map_err(map_err)?;
    socket.set_reuse_address(true).map_err(map_err)?;
    socket.bind(&addr.into()).map_err(map_err)?;
    socket.listen(BACKLOG).map_err(map_err)?;
    Ok(socket.into())
}
