//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that can occur during server operation.
///
/// `Setup` and `Accept` are fatal to the server; `Read`, `Parse`, and
/// `Write` are local to a single connection and never affect the accept
/// loop. A missed route is not an error at all, it produces the canonical
/// 404 response.
#[derive(Debug, Error)]
pub enum Error {
    /// Creating, configuring, binding, or listening on the server socket
    /// failed. Fatal.
    #[error("Socket setup failed: {0}")]
    Setup(#[source] std::io::Error),

    /// Accepting a connection failed. Fatal to the accept loop.
    #[error("Failed to accept a connection: {0}")]
    Accept(#[source] std::io::Error),

    /// Reading the request from an accepted connection failed. The
    /// connection is closed without a response.
    #[error("Reading request failed: {0}")]
    Read(#[source] std::io::Error),

    /// The request line could not be parsed. The connection is closed
    /// without a response.
    #[error("Error parsing request: {0}")]
    Parse(#[from] ParseError),

    /// Writing a response to the connection failed.
    #[error("Writing response failed: {0}")]
    Write(#[source] std::io::Error),
}
