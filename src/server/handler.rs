//! Handler capabilities and routes.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::io::AsyncWrite;

use crate::server::error::Error;

/// The write half a handler receives: the accepted socket in production, a
/// mock stream in tests.
pub type ClientSocket = dyn AsyncWrite + Unpin + Send;

/// Type alias for the boxed future a handler returns. The future borrows the
/// socket for as long as it runs.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>>;

/// A handler capability: given the connection socket, write a complete
/// response (status line, headers, body) to it.
///
/// Plain functions with the matching signature coerce directly:
///
/// ```
/// use monohttp_rs::{ClientSocket, Error, HandlerFuture};
/// use tokio::io::AsyncWriteExt;
///
/// fn handle_home(sock: &mut ClientSocket) -> HandlerFuture<'_> {
///     Box::pin(async move {
///         sock.write_all(b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\nhi")
///             .await
///             .map_err(Error::Write)?;
///         Ok(())
///     })
/// }
/// ```
pub type HandlerFn = Arc<dyn for<'a> Fn(&'a mut ClientSocket) -> HandlerFuture<'a> + Send + Sync>;

/// A route: a path bound to a handler capability.
///
/// Routes are owned exclusively by the [`Router`](crate::server::Router),
/// created at registration time and never mutated afterward.
pub struct Route {
    /// The path to match, byte-for-byte.
    pub path: String,
    /// The handler capability invoked on a match.
    pub handler: HandlerFn,
}
