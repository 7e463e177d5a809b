//! Display-ready cell descriptors.
//!
//! The wire shape mirrors what map frontends consume: both numeric forms
//! of the 64-bit id as strings (JSON numbers lose precision past 2^53),
//! the canonical token, curve position, face, level, the center point,
//! and the four corner vertices in winding order.

use cellmap_s2::{Cell, CellID, LatLng};
use serde::{Deserialize, Serialize};

/// One covering cell, resolved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellDescriptor {
    /// Unsigned decimal form of the id.
    pub id: String,
    /// Signed (two's-complement) decimal form of the id.
    pub id_signed: String,
    /// Canonical hex token.
    pub token: String,
    /// Position along the space-filling curve, as a decimal string.
    pub pos: String,
    /// Cube face, 0–5.
    pub face: u8,
    /// Subdivision level, 0–30.
    pub level: u8,
    /// Cell center.
    pub ll: LatLng,
    /// The four corner vertices, counterclockwise.
    pub shape: [LatLng; 4],
}

impl CellDescriptor {
    pub fn from_cell_id(id: CellID) -> Self {
        let cell = Cell::from(id);
        let shape = [0, 1, 2, 3].map(|k| LatLng::from_point(&cell.vertex(k)));
        Self {
            id: id.0.to_string(),
            id_signed: (id.0 as i64).to_string(),
            token: id.to_token(),
            pos: id.pos().to_string(),
            face: id.face(),
            level: id.level(),
            ll: LatLng::from_point(&cell.center()),
            shape,
        }
    }
}

/// Resolve a covering into descriptors, preserving order.
pub fn describe_covering(ids: &[CellID]) -> Vec<CellDescriptor> {
    ids.iter().map(|id| CellDescriptor::from_cell_id(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_fields_are_consistent() {
        let id = CellID::from_latlng(&LatLng::from_degrees(48.8566, 2.3522)).parent(10);
        let d = CellDescriptor::from_cell_id(id);
        assert_eq!(d.id, id.0.to_string());
        assert_eq!(d.id_signed, (id.0 as i64).to_string());
        assert_eq!(d.token, id.to_token());
        assert_eq!(d.pos, id.pos().to_string());
        assert_eq!(d.face, id.face());
        assert_eq!(d.level, 10);
        // Center must re-resolve to the same cell.
        assert_eq!(CellID::from_latlng(&d.ll).parent(10), id);
    }

    #[test]
    fn test_descriptor_serializes_expected_shape() {
        let id = CellID::from_latlng(&LatLng::from_degrees(0.0, 0.0)).parent(4);
        let value = serde_json::to_value(CellDescriptor::from_cell_id(id)).unwrap();
        for key in [
            "id", "id_signed", "token", "pos", "face", "level", "ll", "shape",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["shape"].as_array().unwrap().len(), 4);
        assert!(value["ll"].get("lat").is_some());
        assert!(value["ll"].get("lng").is_some());
        // Ids ride as strings to survive JSON number precision.
        assert!(value["id"].is_string());
        assert!(value["pos"].is_string());
    }

    #[test]
    fn test_describe_covering_preserves_order() {
        let a = CellID::from_latlng(&LatLng::from_degrees(1.0, 1.0)).parent(5);
        let b = CellID::from_latlng(&LatLng::from_degrees(50.0, 50.0)).parent(5);
        let described = describe_covering(&[a, b]);
        assert_eq!(described.len(), 2);
        assert_eq!(described[0].id, a.0.to_string());
        assert_eq!(described[1].id, b.0.to_string());
    }
}
