//! Cell-covering endpoint.
//!
//! Form-encoded to match the editor frontend: either `geojson` (a
//! stringified feature or feature collection) or `points` (comma-joined
//! `lat,lng` pairs), plus optional level constraints.

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Form, State};
use axum::Json;
use cellmap_core::{codec, cover, describe_covering, CellDescriptor, CoverOptions, GeoJsonInput};
use cellmap_s2::{CellID, LatLng};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CoverParams {
    #[serde(default)]
    geojson: Option<String>,
    #[serde(default)]
    points: Option<String>,
    #[serde(default)]
    min_level: Option<u8>,
    #[serde(default)]
    max_level: Option<u8>,
    #[serde(default)]
    max_cells: Option<usize>,
    #[serde(default)]
    level_mod: Option<u8>,
}

impl CoverParams {
    fn options(&self) -> CoverOptions {
        let defaults = CoverOptions::default();
        CoverOptions {
            min_level: self.min_level.unwrap_or(defaults.min_level),
            max_level: self.max_level.unwrap_or(defaults.max_level),
            max_cells: self.max_cells.unwrap_or(defaults.max_cells),
            level_mod: self.level_mod.unwrap_or(defaults.level_mod),
        }
        .normalized()
    }
}

/// POST /a/s2cover
pub async fn s2cover(
    State(state): State<Arc<AppState>>,
    Form(params): Form<CoverParams>,
) -> Result<Json<Vec<CellDescriptor>>> {
    let options = params.options();

    let covering: Vec<CellID> = if let Some(geojson) = params.geojson.as_deref().filter(|s| !s.is_empty()) {
        let input: GeoJsonInput = serde_json::from_str(geojson)?;
        let features = input.features();
        let total: usize = features.iter().map(|f| f.geometry.num_positions()).sum();
        if total > state.config.max_vertices {
            return Err(ServerError::bad_request(format!(
                "request has {total} ring vertices, limit is {}",
                state.config.max_vertices
            )));
        }
        let regions = codec::regions_from_features(features)?;
        tracing::debug!(regions = regions.len(), "covering regions");
        cover::cover_regions(&regions, &options)
    } else if let Some(points) = params.points.as_deref().filter(|s| !s.is_empty()) {
        let points = parse_points(points)?;
        tracing::debug!(points = points.len(), "covering points");
        cover::cover_points(&points, &options)
    } else {
        return Err(ServerError::bad_request(
            "provide \"geojson\" or \"points\"",
        ));
    };

    Ok(Json(describe_covering(&covering)))
}

/// Parse comma-joined `lat,lng` pairs.
fn parse_points(raw: &str) -> Result<Vec<LatLng>> {
    let values: Vec<f64> = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| ServerError::bad_request(format!("bad coordinate: {part:?}")))
        })
        .collect::<Result<_>>()?;
    if values.is_empty() || values.len() % 2 != 0 {
        return Err(ServerError::bad_request(
            "points must be lat,lng pairs",
        ));
    }
    let points: Vec<LatLng> = values
        .chunks(2)
        .map(|pair| LatLng::from_degrees(pair[0], pair[1]))
        .collect();
    for ll in &points {
        if !ll.is_valid() {
            return Err(ServerError::bad_request(format!(
                "coordinate out of range: ({}, {})",
                ll.lat, ll.lng
            )));
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        let points = parse_points("10.5,-20.25,0,180").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].lat, 10.5);
        assert_eq!(points[0].lng, -20.25);
    }

    #[test]
    fn test_parse_points_rejects_odd_count() {
        assert!(parse_points("1,2,3").is_err());
    }

    #[test]
    fn test_parse_points_rejects_garbage() {
        assert!(parse_points("a,b").is_err());
        assert!(parse_points("95,0").is_err());
    }
}
