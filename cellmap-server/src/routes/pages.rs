//! Map document endpoints: create-and-redirect, view, update.

use crate::error::{Result, ServerError};
use crate::names;
use crate::state::AppState;
use crate::store::DEFAULT_DOCUMENT;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use std::sync::Arc;

/// GET /
///
/// Creates a fresh document holding an empty feature collection and
/// redirects to its editor page.
pub async fn create_map(State(state): State<Arc<AppState>>) -> Result<Redirect> {
    let mut name = names::random_name();
    // Re-roll on collision rather than silently replacing someone's map.
    for _ in 0..8 {
        if !state.documents.contains(&name).await? {
            break;
        }
        name = names::random_name();
    }
    state
        .documents
        .put(&name, DEFAULT_DOCUMENT.to_string())
        .await?;
    tracing::info!(map = %name, "created map document");
    Ok(Redirect::to(&format!("/{name}")))
}

/// GET /{name}
pub async fn show_map(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>> {
    validate_name(&name)?;
    let document = state
        .documents
        .get(&name)
        .await?
        .ok_or_else(|| ServerError::not_found(format!("no map named {name}")))?;
    Ok(Html(state.renderer.render_map(&name, &document)))
}

/// POST /{name}
///
/// Replaces the stored document body. The body must be valid JSON but is
/// otherwise stored verbatim.
pub async fn update_map(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: String,
) -> Result<StatusCode> {
    validate_name(&name)?;
    serde_json::from_str::<serde_json::Value>(&body)?;
    state.documents.put(&name, body).await?;
    tracing::debug!(map = %name, "updated map document");
    Ok(StatusCode::NO_CONTENT)
}

/// Document names are ASCII letters only.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ServerError::not_found(format!("no map named {name}")));
    }
    Ok(())
}
