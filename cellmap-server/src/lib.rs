//! cellmap HTTP server.
//!
//! A thin HTTP wrapper around `cellmap-core`: GeoJSON set-operation
//! endpoints, cell coverings, and a small document store driving the
//! bundled editor page.
//!
//! # Endpoints
//!
//! - `GET /` — create a document, redirect to its editor page
//! - `GET /{name}` / `POST /{name}` — view / update a document
//! - `POST /a/union`, `/a/intersection`, `/a/difference`,
//!   `/a/symmetric_difference` — combine a feature collection
//! - `POST /a/s2cover` — cell covering of a geometry or points
//! - `GET /health`
//!
//! # Example
//!
//! ```ignore
//! use cellmap_server::{CellmapServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = CellmapServer::new(ServerConfig::default());
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod names;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{LogFormat, ServerConfig};
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// The assembled server: state plus router.
pub struct CellmapServer {
    state: Arc<AppState>,
    router: Router,
}

impl CellmapServer {
    /// Build a server with default collaborators.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(Arc::new(AppState::new(config)))
    }

    /// Build a server around existing state (used by tests to inject
    /// collaborators).
    pub fn with_state(state: Arc<AppState>) -> Self {
        let router = routes::build_router(state.clone());
        Self { state, router }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// The router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind and serve until shutdown.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;
        info!(
            addr = %addr,
            cors = self.state.config.cors_enabled,
            max_vertices = self.state.config.max_vertices,
            "cellmap server listening"
        );
        axum::serve(listener, self.router).await
    }
}
