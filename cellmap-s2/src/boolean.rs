//! Binary boolean operations on spherical polygons.
//!
//! Each operation clips the boundary of one operand against the other:
//! edges are split at geodesic crossings, each fragment is classified by
//! the containment of its midpoint, and the kept fragments from both
//! operands are reassembled with the XOR edge builder. Operands are never
//! mutated; every operation yields a fresh polygon.

use crate::builder::EdgeBuilder;
use crate::point::{edge_intersection, simple_crossing, Point};
use crate::polygon::Polygon;

/// A ∪ B: boundary fragments of each operand outside the other.
pub fn union(a: &Polygon, b: &Polygon) -> Polygon {
    let mut builder = EdgeBuilder::new();
    clip_boundary(a, b, false, false, &mut builder);
    clip_boundary(b, a, false, false, &mut builder);
    finish(builder)
}

/// A ∩ B: boundary fragments of each operand inside the other.
pub fn intersection(a: &Polygon, b: &Polygon) -> Polygon {
    let mut builder = EdgeBuilder::new();
    clip_boundary(a, b, true, false, &mut builder);
    clip_boundary(b, a, true, false, &mut builder);
    finish(builder)
}

/// A − B: fragments of A outside B, plus fragments of B inside A with
/// their direction reversed (those become hole boundaries).
pub fn difference(a: &Polygon, b: &Polygon) -> Polygon {
    let mut builder = EdgeBuilder::new();
    clip_boundary(a, b, false, false, &mut builder);
    clip_boundary(b, a, true, true, &mut builder);
    finish(builder)
}

/// Add the fragments of `src`'s boundary whose midpoint containment in
/// `clip` equals `keep_inside`, optionally reversing edge direction.
fn clip_boundary(
    src: &Polygon,
    clip: &Polygon,
    keep_inside: bool,
    reverse: bool,
    builder: &mut EdgeBuilder,
) {
    for lp in src.loops() {
        let n = lp.num_vertices();
        for i in 0..n {
            let v0 = lp.vertex(i);
            let v1 = lp.vertex(i + 1);

            // Split the edge at every crossing with the clip boundary,
            // ordered by distance from v0 along the arc.
            let mut cuts: Vec<(f64, Point)> = Vec::new();
            for (w0, w1) in clip.edges() {
                if simple_crossing(&v0, &v1, &w0, &w1) {
                    let x = edge_intersection(&v0, &v1, &w0, &w1);
                    cuts.push((1.0 - x.dot(&v0), x));
                }
            }
            cuts.sort_by(|p, q| p.0.total_cmp(&q.0));

            let mut prev = v0;
            for next in cuts.into_iter().map(|c| c.1).chain(std::iter::once(v1)) {
                let mid = (prev + next).normalize();
                if clip.contains(&mid) == keep_inside {
                    if reverse {
                        builder.add_edge(next, prev);
                    } else {
                        builder.add_edge(prev, next);
                    }
                }
                prev = next;
            }
        }
    }
}

fn finish(builder: EdgeBuilder) -> Polygon {
    // Fragments from the two clip passes meet at bit-identical crossing
    // points, so every kept edge chains into a closed loop; anything left
    // over is numerical debris and is dropped.
    let (polygon, _leftovers) = builder.assemble();
    polygon
}
