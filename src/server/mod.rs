//! HTTP server implementation for monohttp-rs.
//!
//! This module provides a single-connection-at-a-time HTTP server: a
//! listener loop that accepts one connection, services it fully, closes it,
//! and only then accepts the next.

mod config;
mod connection;
mod error;
mod handler;
mod response;
mod router;
mod http_server;

// Re-export public items
pub use config::ServerConfig;
pub use connection::handle_connection;
pub use error::Error;
pub use handler::{ClientSocket, HandlerFn, HandlerFuture, Route};
pub use http_server::HttpServer;
pub use response::{HttpResponse, StatusCode, NOT_FOUND_RESPONSE};
pub use router::Router;
