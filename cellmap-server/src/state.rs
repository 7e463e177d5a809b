//! Application state shared across request handlers.
//!
//! Collaborators (document store, page renderer) are injected explicitly
//! rather than reached through globals, so tests and alternative backends
//! can swap them without touching handlers.

use crate::config::ServerConfig;
use crate::render::{HtmlRenderer, PageRenderer};
use crate::store::{DocumentStore, MemoryDocumentStore};
use std::sync::Arc;
use std::time::Instant;

/// Shared state handed to every handler.
pub struct AppState {
    pub config: ServerConfig,
    pub documents: Arc<dyn DocumentStore>,
    pub renderer: Arc<dyn PageRenderer>,
    pub started_at: Instant,
}

impl AppState {
    /// State with the default collaborators (in-memory store, bundled
    /// template renderer).
    pub fn new(config: ServerConfig) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(MemoryDocumentStore::new()),
            Arc::new(HtmlRenderer::new()),
        )
    }

    /// State with explicit collaborators.
    pub fn with_collaborators(
        config: ServerConfig,
        documents: Arc<dyn DocumentStore>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            config,
            documents,
            renderer,
            started_at: Instant::now(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
