//! A minimal single-connection-at-a-time HTTP server.
//!
//! This library provides a deliberately small HTTP listener: it binds a TCP
//! port, accepts connections strictly one at a time, extracts the request
//! line from the raw bytes, looks up a handler by exact path match, and
//! writes a canned response before closing the connection.
//!
//! # Features
//!
//! - Request-line tokenization into method/resource/protocol without copying
//! - Exact-match routing with last-registration-wins duplicate handling
//! - A canonical 404 response for unmatched paths
//! - Fully serialized connection handling: one blocking accept, one
//!   read-parse-dispatch-write-close cycle at a time
//! - Proper error handling with descriptive error messages
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use monohttp_rs::parse_request_line;
//!
//! let request_bytes = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request_line(request_bytes) {
//!     Ok(line) => {
//!         println!("Method: {}", line.method);
//!         println!("Resource: {}", line.resource);
//!         println!("Protocol: {}", line.protocol);
//!     },
//!     Err(err) => {
//!         println!("Error parsing request line: {}", err);
//!     }
//! }
//! ```
//!
//! ## Serving a route
//!
//! ```no_run
//! use monohttp_rs::{
//!     ClientSocket, Error, HandlerFuture, HttpResponse, HttpServer, ServerConfig, StatusCode,
//! };
//! use tokio::io::AsyncWriteExt;
//!
//! fn handle_home(sock: &mut ClientSocket) -> HandlerFuture<'_> {
//!     Box::pin(async move {
//!         let response = HttpResponse::new(StatusCode::Ok)
//!             .with_content_type("text/html")
//!             .with_body_string("<h1>Welcome to the page!</h1>\n");
//!         sock.write_all(&response.to_bytes()).await.map_err(Error::Write)?;
//!         Ok(())
//!     })
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let mut server = HttpServer::new(ServerConfig::default());
//!     server.register("/", handle_home);
//!     server.start().await
//! }
//! ```
//!
//! See the `demos` directory for complete runnable programs.

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request_line, ParseError, RequestLine};
pub use server::{
    ClientSocket, Error, HandlerFn, HandlerFuture, HttpResponse, HttpServer, Route, Router,
    ServerConfig, StatusCode, NOT_FOUND_RESPONSE,
};
