//! cellmap server CLI.
//!
//! Run with: `cargo run -p cellmap-server -- --help`

use cellmap_server::{telemetry, CellmapServer, ServerConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    telemetry::init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen_addr,
        cors = config.cors_enabled,
        max_vertices = config.max_vertices,
        log_format = ?config.log_format,
        "starting cellmap server"
    );

    let server = CellmapServer::new(config);
    server.run().await.map_err(Into::into)
}
