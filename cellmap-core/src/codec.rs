//! Conversion between GeoJSON polygons and spherical regions.
//!
//! Decoding turns each ring into a closed chain of directed edges and
//! feeds all rings of one polygon to the assembler jointly, so inner and
//! outer boundaries resolve against each other. Encoding walks a region's
//! loops and re-appends the first vertex of each loop: consumers expect
//! explicitly closed rings on the wire.

use crate::assemble;
use crate::error::{GeomError, Result};
use crate::geojson::{Feature, FeatureCollection, Geometry, Position};
use cellmap_s2::{EdgeBuilder, LatLng, Point, Polygon};

/// Build a region from GeoJSON polygon rings.
///
/// Each ring must contain at least 3 distinct vertices (an explicit
/// closing position and repeated consecutive points do not count).
pub fn region_from_rings(rings: &[Vec<Position>]) -> Result<Polygon> {
    let mut builder = EdgeBuilder::new();
    for ring in rings {
        let vertices = ring_vertices(ring)?;
        let n = vertices.len();
        for i in 0..n {
            builder.add_edge(vertices[i], vertices[(i + 1) % n]);
        }
    }
    assemble::assemble(builder)
}

/// Build a region from a GeoJSON geometry.
pub fn region_from_geometry(geometry: &Geometry) -> Result<Polygon> {
    match geometry {
        Geometry::Polygon { coordinates } => region_from_rings(coordinates),
    }
}

/// Build one region per feature, preserving feature order.
pub fn regions_from_features(features: &[Feature]) -> Result<Vec<Polygon>> {
    features
        .iter()
        .map(|f| region_from_geometry(&f.geometry))
        .collect()
}

/// Encode a region as a GeoJSON polygon geometry with explicitly closed
/// rings.
pub fn geometry_from_region(region: &Polygon) -> Geometry {
    let coordinates = region
        .loops()
        .map(|lp| {
            // Inclusive upper bound: the wrapping accessor re-emits the
            // first vertex as the ring's closing position.
            (0..=lp.num_vertices())
                .map(|i| {
                    let ll = LatLng::from_point(&lp.vertex(i));
                    [ll.lng, ll.lat]
                })
                .collect()
        })
        .collect();
    Geometry::Polygon { coordinates }
}

/// Wrap a region in a single-feature collection, the response shape of
/// the single-result set operations.
pub fn feature_collection_from_region(region: &Polygon) -> FeatureCollection {
    FeatureCollection::new(vec![Feature::new(geometry_from_region(region))])
}

/// Convert one ring into deduplicated vertices, validating the distinct
/// vertex count.
fn ring_vertices(ring: &[Position]) -> Result<Vec<Point>> {
    let mut vertices: Vec<Point> = Vec::with_capacity(ring.len());
    for &[lng, lat] in ring {
        let ll = LatLng::from_degrees(lat, lng);
        if !ll.is_valid() {
            return Err(GeomError::invalid(format!(
                "coordinate out of range: ({lat}, {lng})"
            )));
        }
        let p = ll.to_point();
        if vertices.last().map(|v| v.key()) == Some(p.key()) {
            continue;
        }
        vertices.push(p);
    }
    // Drop the explicit closing position if present.
    if vertices.len() > 1 && vertices[0].key() == vertices[vertices.len() - 1].key() {
        vertices.pop();
    }
    let distinct = {
        let mut keys: Vec<_> = vertices.iter().map(Point::key).collect();
        keys.sort_unstable();
        keys.dedup();
        keys.len()
    };
    if distinct < 3 {
        return Err(GeomError::invalid(format!(
            "ring has {distinct} distinct vertices, need at least 3"
        )));
    }
    Ok(vertices)
}
