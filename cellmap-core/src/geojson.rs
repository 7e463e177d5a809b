//! GeoJSON wire types.
//!
//! Only the envelope shapes the service exchanges: polygon geometries with
//! `[lng, lat]` positions, wrapped in features and feature collections.
//! Rings on the wire carry an explicit closing position; the codec strips
//! and re-adds it at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A `[lng, lat]` coordinate pair.
pub type Position = [f64; 2];

/// A GeoJSON geometry object, dispatched on its `type` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Rings of positions. The first ring is conventionally the outer
    /// boundary; all rings of one polygon are assembled jointly.
    Polygon { coordinates: Vec<Vec<Position>> },
}

impl Geometry {
    /// Total number of positions across all rings.
    pub fn num_positions(&self) -> usize {
        match self {
            Geometry::Polygon { coordinates } => coordinates.iter().map(Vec::len).sum(),
        }
    }
}

/// A feature: one geometry with optional free-form properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Always `"Feature"`. Kept as data for tolerant round-tripping.
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<JsonValue>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            kind: "Feature".to_string(),
            geometry,
            properties: Some(JsonValue::Object(Default::default())),
        }
    }
}

/// An ordered sequence of features. Order is significant: it is the
/// combination order for non-commutative set operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Either a single feature or a collection; the covering endpoint accepts
/// both shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GeoJsonInput {
    Feature(Feature),
    Collection(FeatureCollection),
}

impl GeoJsonInput {
    /// View the input as an ordered feature list.
    pub fn features(&self) -> &[Feature] {
        match self {
            GeoJsonInput::Feature(f) => std::slice::from_ref(f),
            GeoJsonInput::Collection(fc) => &fc.features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_polygon_roundtrip() {
        let v = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
        });
        let geom: Geometry = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(geom.num_positions(), 5);
        assert_eq!(serde_json::to_value(&geom).unwrap(), v);
    }

    #[test]
    fn test_feature_collection_roundtrip() {
        let v = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }]
        });
        let fc: FeatureCollection = serde_json::from_value(v).unwrap();
        assert_eq!(fc.features.len(), 1);
        assert_eq!(fc.kind, "FeatureCollection");
    }

    #[test]
    fn test_geojson_input_accepts_both_shapes() {
        let feature = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]]}
        });
        let input: GeoJsonInput = serde_json::from_value(feature).unwrap();
        assert_eq!(input.features().len(), 1);

        let collection = json!({
            "type": "FeatureCollection",
            "features": []
        });
        let input: GeoJsonInput = serde_json::from_value(collection).unwrap();
        assert!(input.features().is_empty());
    }

    #[test]
    fn test_unknown_geometry_type_is_rejected() {
        let v = json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]});
        assert!(serde_json::from_value::<Geometry>(v).is_err());
    }
}
