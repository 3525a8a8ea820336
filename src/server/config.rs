//! Server configuration.

use std::net::SocketAddr;

/// HTTP server configuration.
///
/// Fixed at construction time; there is no runtime reconfiguration surface.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The depth of the OS queue of pending, not-yet-accepted connections.
    pub backlog: u32,
    /// The read buffer capacity per connection. One read of at most
    /// `read_buffer_size - 1` bytes is issued; longer requests are truncated.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8003".parse().unwrap(),
            backlog: 10,
            read_buffer_size: 1024,
        }
    }
}
