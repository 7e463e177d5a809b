//! Set-operation endpoints over feature collections.
//!
//! Requests carry either an inline feature collection (`{"geoms": …}`,
//! order-significant) or a pair of stored document names (`{"a": …,
//! "b": …}`) whose features are concatenated in that order. Responses are
//! feature collections: one feature for the single-result operations, one
//! feature per non-empty residual for symmetric difference.

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use cellmap_core::{algebra, codec, Feature, FeatureCollection};
use cellmap_s2::Polygon;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct GeomsRequest {
    /// Inline operands; feature order is combination order.
    #[serde(default)]
    geoms: Option<FeatureCollection>,
    /// Names of stored documents to combine instead.
    #[serde(default)]
    a: Option<String>,
    #[serde(default)]
    b: Option<String>,
}

/// POST /a/union
pub async fn union(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FeatureCollection>> {
    let regions = operands(&state, &body, "union").await?;
    let result = algebra::union(&regions)?;
    Ok(Json(codec::feature_collection_from_region(&result)))
}

/// POST /a/intersection
pub async fn intersection(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FeatureCollection>> {
    let regions = operands(&state, &body, "intersection").await?;
    let result = algebra::intersection(&regions)?;
    Ok(Json(codec::feature_collection_from_region(&result)))
}

/// POST /a/difference
pub async fn difference(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FeatureCollection>> {
    let regions = operands(&state, &body, "difference").await?;
    let result = algebra::difference(&regions)?;
    Ok(Json(codec::feature_collection_from_region(&result)))
}

/// POST /a/symmetric_difference
pub async fn symmetric_difference(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FeatureCollection>> {
    let regions = operands(&state, &body, "symmetric_difference").await?;
    let residuals = algebra::symmetric_difference(&regions)?;
    let features = residuals
        .iter()
        .map(|r| Feature::new(codec::geometry_from_region(r)))
        .collect();
    Ok(Json(FeatureCollection::new(features)))
}

/// Parse the request body and decode its operands into regions.
async fn operands(state: &AppState, body: &Bytes, op: &'static str) -> Result<Vec<Polygon>> {
    let request: GeomsRequest = serde_json::from_slice(body)?;
    let features = load_features(state, &request).await?;
    let regions = decode_regions(state, &features)?;
    tracing::debug!(op, regions = regions.len(), "combining regions");
    Ok(regions)
}

async fn load_features(state: &AppState, request: &GeomsRequest) -> Result<Vec<Feature>> {
    if let Some(fc) = &request.geoms {
        return Ok(fc.features.clone());
    }
    match (&request.a, &request.b) {
        (Some(a), Some(b)) => {
            let mut features = Vec::new();
            for name in [a, b] {
                let body = state.documents.get(name).await?.ok_or_else(|| {
                    ServerError::not_found(format!("no geometry named {name}"))
                })?;
                let fc: FeatureCollection = serde_json::from_str(&body)?;
                features.extend(fc.features);
            }
            Ok(features)
        }
        _ => Err(ServerError::bad_request(
            "provide \"geoms\" or a pair of named geometries \"a\" and \"b\"",
        )),
    }
}

fn decode_regions(state: &AppState, features: &[Feature]) -> Result<Vec<Polygon>> {
    let total: usize = features
        .iter()
        .map(|f| f.geometry.num_positions())
        .sum();
    if total > state.config.max_vertices {
        return Err(ServerError::bad_request(format!(
            "request has {total} ring vertices, limit is {}",
            state.config.max_vertices
        )));
    }
    Ok(codec::regions_from_features(features)?)
}
