//! Per-connection handling: read, parse, dispatch, write.

use log::{error, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::parser::parse_request_line;
use crate::server::error::Error;
use crate::server::response::NOT_FOUND_RESPONSE;
use crate::server::router::Router;

/// Service one accepted connection from raw bytes to written response.
///
/// Issues a single read of at most `read_buffer_size - 1` bytes; a request
/// longer than that is silently truncated and parsed from the bytes that did
/// fit. Read and parse failures abort the connection without writing
/// anything back. A parsed request either dispatches to the matching handler
/// or receives the canonical 404 response; a missed route is a success, not
/// an error.
///
/// The caller owns the socket and closes it when this returns, regardless of
/// the outcome. Since the router is read-only by the time connections
/// arrive, a concurrent scheduler could invoke this per accepted socket
/// without any shared mutable state, but the stock server runs it strictly
/// one connection at a time.
pub async fn handle_connection<S>(
    socket: &mut S,
    router: &Router,
    read_buffer_size: usize,
) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let mut buffer = vec![0u8; read_buffer_size];

    // One read only; the final buffer byte is never filled, so the request
    // text is always strictly shorter than the configured capacity.
    let bytes_read = match socket.read(&mut buffer[..read_buffer_size - 1]).await {
        Ok(n) => n,
        Err(e) => {
            error!("Reading request failed: {e}");
            return Err(Error::Read(e));
        }
    };

    // A zero-byte read parses as an empty request and fails below.
    let request = match parse_request_line(&buffer[..bytes_read]) {
        Ok(line) => line,
        Err(e) => {
            error!("Error parsing request: {e}");
            return Err(Error::Parse(e));
        }
    };

    info!(
        "Request {} {} {}",
        request.method, request.resource, request.protocol
    );

    match router.find(request.resource) {
        Some(handler) => (**handler)(socket).await?,
        None => socket
            .write_all(NOT_FOUND_RESPONSE.as_bytes())
            .await
            .map_err(Error::Write)?,
    }

    Ok(())
}
