//! A complete server: one registered route, canonical 404 for everything else.
//!
//! Run with `cargo run --example hello_server`, then:
//!
//! ```text
//! curl http://127.0.0.1:8003/
//! curl http://127.0.0.1:8003/missing
//! ```

use log::info;
use monohttp_rs::{
    ClientSocket, Error, HandlerFuture, HttpResponse, HttpServer, ServerConfig, StatusCode,
};
use tokio::io::AsyncWriteExt;

fn handle_home(sock: &mut ClientSocket) -> HandlerFuture<'_> {
    Box::pin(async move {
        let response = HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/html")
            .with_body_string("<h1>Welcome to the page!</h1>\n");
        sock.write_all(&response.to_bytes())
            .await
            .map_err(Error::Write)?;
        Ok(())
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize the logger
    env_logger::init();

    let mut server = HttpServer::new(ServerConfig::default());
    server.register("/", handle_home);

    info!("Registered endpoints:");
    info!("  /");

    // Serves one connection at a time until an unrecoverable failure.
    server.start().await
}
