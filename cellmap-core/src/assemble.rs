//! Region assembly from directed edge soups.
//!
//! Thin adapter over the XOR edge builder: surviving edges must chain into
//! closed loops, and anything left dangling turns into a typed error
//! instead of a half-built region.

use crate::error::{GeomError, Result};
use cellmap_s2::{EdgeBuilder, Point, Polygon};

/// Assemble a polygon from a prepared builder, failing if any edges were
/// left dangling after XOR cancellation.
pub fn assemble(builder: EdgeBuilder) -> Result<Polygon> {
    let (polygon, leftovers) = builder.assemble();
    if !leftovers.is_empty() {
        return Err(GeomError::degenerate(format!(
            "{} dangling edges after XOR merge",
            leftovers.len()
        )));
    }
    Ok(polygon)
}

/// Assemble a polygon directly from directed edges.
pub fn assemble_edges(edges: impl IntoIterator<Item = (Point, Point)>) -> Result<Polygon> {
    let mut builder = EdgeBuilder::new();
    for (a, b) in edges {
        builder.add_edge(a, b);
    }
    assemble(builder)
}
