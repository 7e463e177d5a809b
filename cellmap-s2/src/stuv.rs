//! Projection math between unit vectors and cube-face (s,t)/(u,v) coordinates.
//!
//! The sphere is projected onto six cube faces. Face coordinates (u,v) range
//! over [-1,1]; cell coordinates (s,t) over [0,1] with the quadratic
//! transform applied so cells have near-uniform area on the sphere.

use crate::point::Point;

/// Cell coordinate to face coordinate (quadratic transform).
pub fn st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

/// Face coordinate to cell coordinate (inverse of [`st_to_uv`]).
pub fn uv_to_st(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

/// The face (0..6) whose axis has the largest absolute component.
pub fn face(p: &Point) -> u8 {
    let ax = p.x.abs();
    let ay = p.y.abs();
    let az = p.z.abs();
    let f = if ax > ay {
        if ax > az {
            0
        } else {
            2
        }
    } else if ay > az {
        1
    } else {
        2
    };
    match f {
        0 if p.x < 0.0 => 3,
        1 if p.y < 0.0 => 4,
        2 if p.z < 0.0 => 5,
        _ => f,
    }
}

/// Project `p` onto the given face. Valid when the face's primary axis
/// component is nonzero and has the face's sign.
pub fn face_xyz_to_uv(face: u8, p: &Point) -> (f64, f64) {
    match face {
        0 => (p.y / p.x, p.z / p.x),
        1 => (-p.x / p.y, p.z / p.y),
        2 => (-p.x / p.z, -p.y / p.z),
        3 => (p.z / p.x, p.y / p.x),
        4 => (p.z / p.y, -p.x / p.y),
        _ => (-p.y / p.z, -p.x / p.z),
    }
}

/// Project `p` onto its own face, returning (face, u, v).
pub fn xyz_to_face_uv(p: &Point) -> (u8, f64, f64) {
    let f = face(p);
    let (u, v) = face_xyz_to_uv(f, p);
    (f, u, v)
}

/// Un-project face coordinates back to a (non-normalized) 3-vector.
pub fn face_uv_to_xyz(face: u8, u: f64, v: f64) -> Point {
    match face {
        0 => Point::new(1.0, u, v),
        1 => Point::new(-u, 1.0, v),
        2 => Point::new(-u, -v, 1.0),
        3 => Point::new(-1.0, -v, -u),
        4 => Point::new(v, -1.0, -u),
        _ => Point::new(v, u, -1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlng::LatLng;

    #[test]
    fn test_st_uv_roundtrip() {
        for i in 0..=100 {
            let s = i as f64 / 100.0;
            let u = st_to_uv(s);
            assert!((-1.0..=1.0).contains(&u));
            assert!((uv_to_st(u) - s).abs() < 1e-12);
        }
    }

    #[test]
    fn test_face_uv_roundtrip() {
        for f in 0..6u8 {
            for &(u, v) in &[(0.0, 0.0), (0.5, -0.5), (-0.9, 0.9), (1.0, -1.0)] {
                let p = face_uv_to_xyz(f, u, v).normalize();
                let (f2, u2, v2) = xyz_to_face_uv(&p);
                assert_eq!(f2, f, "face {f} uv ({u},{v})");
                assert!((u2 - u).abs() < 1e-12);
                assert!((v2 - v).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_face_of_axis_points() {
        assert_eq!(face(&Point::new(1.0, 0.0, 0.0)), 0);
        assert_eq!(face(&Point::new(0.0, 1.0, 0.0)), 1);
        assert_eq!(face(&Point::new(0.0, 0.0, 1.0)), 2);
        assert_eq!(face(&Point::new(-1.0, 0.0, 0.0)), 3);
        assert_eq!(face(&Point::new(0.0, -1.0, 0.0)), 4);
        assert_eq!(face(&Point::new(0.0, 0.0, -1.0)), 5);
    }

    #[test]
    fn test_equator_points_land_on_expected_faces() {
        assert_eq!(face(&LatLng::from_degrees(0.0, 0.0).to_point()), 0);
        assert_eq!(face(&LatLng::from_degrees(0.0, 90.0).to_point()), 1);
        assert_eq!(face(&LatLng::from_degrees(85.0, 0.0).to_point()), 2);
    }
}
