//! The listener and accept loop.

use log::{error, info};
use tokio::net::{TcpListener, TcpSocket};

use crate::server::config::ServerConfig;
use crate::server::connection::handle_connection;
use crate::server::error::Error;
use crate::server::handler::{ClientSocket, HandlerFuture};
use crate::server::router::Router;

/// A single-connection-at-a-time HTTP server.
///
/// Routes are registered before the server starts; once [`start`] is called
/// the route table is read-only. The accept loop services connections
/// strictly one at a time; a slow client blocks everyone behind it.
///
/// [`start`]: HttpServer::start
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and no routes.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            router: Router::new(),
        }
    }

    /// Register a handler for a path. See [`Router::register`].
    pub fn register<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: for<'a> Fn(&'a mut ClientSocket) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.router.register(path, handler);
    }

    /// The route table.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Create, configure, and bind the listening socket.
    ///
    /// Performs the full setup sequence: create a TCP socket, enable address
    /// reuse so a restarted process can rebind immediately, bind to the
    /// configured address, and listen with the configured backlog. Every
    /// step is fatal on failure.
    pub fn setup_listener(&self) -> Result<TcpListener, Error> {
        info!("Creating socket");
        let socket = if self.config.addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(Error::Setup)?;

        info!("Setting reuse options for socket");
        socket.set_reuseaddr(true).map_err(Error::Setup)?;

        info!("Binding socket to {}", self.config.addr);
        socket.bind(self.config.addr).map_err(Error::Setup)?;

        info!("Initializing listening on {}", self.config.addr);
        let listener = socket.listen(self.config.backlog).map_err(Error::Setup)?;

        info!("Server listening on {}", self.config.addr);
        Ok(listener)
    }

    /// Run the accept loop on an already-bound listener.
    ///
    /// Blocks on accept, services the accepted connection to completion,
    /// closes it, and loops. Connection-local failures are logged and never
    /// escalate; an accept failure terminates the loop and propagates to the
    /// caller.
    pub async fn accept_loop(&self, listener: TcpListener) -> Result<(), Error> {
        loop {
            let (mut socket, addr) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Failed to accept a connection: {e}");
                    return Err(Error::Accept(e));
                }
            };
            info!("Connection from {addr}");

            if let Err(e) = handle_connection(
                &mut socket,
                &self.router,
                self.config.read_buffer_size,
            )
            .await
            {
                error!("Handle request: {e}");
            }

            // The socket drops here, closing the connection before the next
            // accept.
            drop(socket);
        }
    }

    /// Set up the listener and serve until an unrecoverable failure.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = self.setup_listener()?;
        self.accept_loop(listener).await
    }
}
