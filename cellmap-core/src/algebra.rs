//! N-ary set operations over ordered region sequences.
//!
//! All four combinators are pure folds over an explicit `&[Polygon]`
//! slice; operands are never mutated and input order is what defines the
//! result for the non-commutative operations.
//!
//! Two of the combinators intentionally do not follow textbook n-ary set
//! semantics, and downstream consumers depend on the exact behavior:
//!
//! - [`intersection`] unions all *pairwise* intersections. For two inputs
//!   this equals the common intersection; for more it keeps any area
//!   shared by at least one pair, rather than the area common to all.
//! - [`symmetric_difference`] emits, per input, the area covered by that
//!   input and no other — one output region per non-empty residual —
//!   rather than the parity-based symmetric difference.

use crate::error::{GeomError, Result};
use cellmap_s2::{boolean, Polygon};

/// Left-fold union of all regions. A single region is returned unchanged.
pub fn union(regions: &[Polygon]) -> Result<Polygon> {
    let (first, rest) = split_first(regions, 1)?;
    let mut acc = first.clone();
    for r in rest {
        acc = boolean::union(&acc, r);
    }
    Ok(acc)
}

/// Union of all pairwise intersections, in pair-enumeration order
/// `(0,1), (0,2), …, (n-2,n-1)`.
pub fn intersection(regions: &[Polygon]) -> Result<Polygon> {
    if regions.len() < 2 {
        return Err(GeomError::InsufficientOperands {
            required: 2,
            actual: regions.len(),
        });
    }
    let mut acc = Polygon::empty();
    for i in 0..regions.len() {
        for j in (i + 1)..regions.len() {
            let pair = boolean::intersection(&regions[i], &regions[j]);
            acc = boolean::union(&acc, &pair);
        }
    }
    Ok(acc)
}

/// Left-fold subtraction: each subsequent region's area is removed from
/// the running accumulator. Order-dependent.
pub fn difference(regions: &[Polygon]) -> Result<Polygon> {
    let (first, rest) = split_first(regions, 1)?;
    let mut acc = first.clone();
    for r in rest {
        acc = boolean::difference(&acc, r);
    }
    Ok(acc)
}

/// Per-input exclusive areas: for each region, subtract every other
/// region in ascending index order; non-empty residuals are emitted in
/// input order.
pub fn symmetric_difference(regions: &[Polygon]) -> Result<Vec<Polygon>> {
    if regions.is_empty() {
        return Err(GeomError::InsufficientOperands {
            required: 1,
            actual: 0,
        });
    }
    let mut out = Vec::new();
    for (i, region) in regions.iter().enumerate() {
        let mut acc = region.clone();
        for (j, other) in regions.iter().enumerate() {
            if i != j {
                acc = boolean::difference(&acc, other);
            }
        }
        if acc.num_loops() > 0 {
            out.push(acc);
        }
    }
    Ok(out)
}

fn split_first(regions: &[Polygon], required: usize) -> Result<(&Polygon, &[Polygon])> {
    regions
        .split_first()
        .ok_or(GeomError::InsufficientOperands { required, actual: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellmap_s2::{LatLng, Loop, Point};

    fn pt(lat: f64, lng: f64) -> Point {
        LatLng::from_degrees(lat, lng).to_point()
    }

    /// Counterclockwise square [lat0..lat1] x [lng0..lng1].
    fn square(lat0: f64, lat1: f64, lng0: f64, lng1: f64) -> Polygon {
        Polygon::new(vec![Loop::new(vec![
            pt(lat0, lng0),
            pt(lat0, lng1),
            pt(lat1, lng1),
            pt(lat1, lng0),
        ])])
    }

    fn contains(p: &Polygon, lat: f64, lng: f64) -> bool {
        p.contains(&pt(lat, lng))
    }

    #[test]
    fn test_union_of_single_region_is_identity() {
        let a = square(0.0, 10.0, 0.0, 10.0);
        let u = union(std::slice::from_ref(&a)).unwrap();
        assert_eq!(u.num_loops(), a.num_loops());
        assert_eq!(
            u.loop_at(0).vertices().len(),
            a.loop_at(0).vertices().len()
        );
        assert!(contains(&u, 5.0, 5.0));
    }

    #[test]
    fn test_union_is_commutative() {
        let a = square(0.0, 10.0, 0.0, 10.0);
        let b = square(5.0, 15.0, 5.0, 15.0);
        let ab = union(&[a.clone(), b.clone()]).unwrap();
        let ba = union(&[b, a]).unwrap();
        for &(lat, lng) in &[
            (2.0, 2.0),
            (7.0, 7.0),
            (13.0, 13.0),
            (2.0, 13.0),
            (-1.0, -1.0),
        ] {
            assert_eq!(
                contains(&ab, lat, lng),
                contains(&ba, lat, lng),
                "({lat},{lng})"
            );
        }
    }

    #[test]
    fn test_union_of_empty_input_fails() {
        assert!(matches!(
            union(&[]),
            Err(GeomError::InsufficientOperands { .. })
        ));
    }

    #[test]
    fn test_intersection_requires_two_regions() {
        let a = square(0.0, 10.0, 0.0, 10.0);
        assert!(matches!(
            intersection(std::slice::from_ref(&a)),
            Err(GeomError::InsufficientOperands {
                required: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_intersection_of_two() {
        let a = square(0.0, 10.0, 0.0, 10.0);
        let b = square(5.0, 15.0, 5.0, 15.0);
        let x = intersection(&[a, b]).unwrap();
        assert!(contains(&x, 7.0, 7.0));
        assert!(!contains(&x, 2.0, 2.0));
        assert!(!contains(&x, 13.0, 13.0));
    }

    #[test]
    fn test_intersection_is_union_of_pairwise_overlaps() {
        // Three pairwise-disjoint squares and one region overlapping all
        // three: the result is (a∩d) ∪ (b∩d) ∪ (c∩d), not the common
        // intersection of all four (which is empty).
        let a = square(0.0, 4.0, 0.0, 4.0);
        let b = square(0.0, 4.0, 10.0, 14.0);
        let c = square(0.0, 4.0, 20.0, 24.0);
        let d = square(2.0, 8.0, -1.0, 25.0);
        let x = intersection(&[a, b, c, d]).unwrap();
        // Inside each pairwise overlap strip.
        assert!(contains(&x, 3.0, 2.0));
        assert!(contains(&x, 3.0, 12.0));
        assert!(contains(&x, 3.0, 22.0));
        // Parts of d overlapping no square stay out.
        assert!(!contains(&x, 6.0, 7.0));
        assert!(!contains(&x, 3.0, 7.0));
        // Parts of the squares outside d stay out.
        assert!(!contains(&x, 1.0, 2.0));
    }

    #[test]
    fn test_difference_depends_on_order() {
        let a = square(0.0, 10.0, 0.0, 10.0);
        let b = square(5.0, 15.0, 5.0, 15.0);
        let ab = difference(&[a.clone(), b.clone()]).unwrap();
        let ba = difference(&[b, a]).unwrap();
        assert!(contains(&ab, 2.0, 2.0));
        assert!(!contains(&ab, 13.0, 13.0));
        assert!(contains(&ba, 13.0, 13.0));
        assert!(!contains(&ba, 2.0, 2.0));
        assert!(!contains(&ab, 7.0, 7.0));
        assert!(!contains(&ba, 7.0, 7.0));
    }

    #[test]
    fn test_difference_folds_left() {
        let a = square(0.0, 10.0, 0.0, 30.0);
        let b = square(-2.0, 12.0, -2.0, 10.0);
        let c = square(-2.0, 12.0, 20.0, 32.0);
        let d = difference(&[a, b, c]).unwrap();
        assert!(contains(&d, 5.0, 15.0));
        assert!(!contains(&d, 5.0, 5.0));
        assert!(!contains(&d, 5.0, 25.0));
    }

    #[test]
    fn test_symmetric_difference_emits_exclusive_areas() {
        let a = square(0.0, 10.0, 0.0, 10.0);
        let b = square(1.0, 11.0, 5.0, 15.0);
        let c = square(2.0, 12.0, 12.0, 20.0);
        let parts = symmetric_difference(&[a, b, c]).unwrap();
        assert_eq!(parts.len(), 3);
        // a's exclusive corner appears in part 0 and nowhere else.
        assert!(contains(&parts[0], 5.0, 2.0));
        assert!(!contains(&parts[1], 5.0, 2.0));
        assert!(!contains(&parts[2], 5.0, 2.0));
        // b's exclusive strip between a and c.
        assert!(contains(&parts[1], 5.0, 11.0));
        assert!(!contains(&parts[0], 5.0, 11.0));
        // c's exclusive area.
        assert!(contains(&parts[2], 5.0, 17.0));
        // Shared areas appear nowhere.
        assert!(!contains(&parts[0], 5.0, 7.0));
        assert!(!contains(&parts[1], 5.0, 7.0));
        assert!(!contains(&parts[2], 5.0, 7.0));
    }

    #[test]
    fn test_symmetric_difference_drops_fully_covered_inputs() {
        let outer = square(0.0, 20.0, 0.0, 20.0);
        let inner = square(5.0, 15.0, 5.0, 15.0);
        let parts = symmetric_difference(&[outer, inner]).unwrap();
        // The inner square is entirely covered by the outer one, so only
        // the outer residual (a ring) is emitted.
        assert_eq!(parts.len(), 1);
        assert!(contains(&parts[0], 2.0, 2.0));
        assert!(!contains(&parts[0], 10.0, 10.0));
    }

    #[test]
    fn test_symmetric_difference_of_single_region() {
        let a = square(0.0, 10.0, 0.0, 10.0);
        let parts = symmetric_difference(std::slice::from_ref(&a)).unwrap();
        assert_eq!(parts.len(), 1);
        assert!(contains(&parts[0], 5.0, 5.0));
    }
}
