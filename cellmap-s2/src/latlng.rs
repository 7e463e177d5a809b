//! Latitude/longitude pairs in degrees and their unit-vector form.

use crate::point::Point;
use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
///
/// Serializes as `{"lat": .., "lng": ..}`, which is also the wire shape
/// used by cell descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.abs() <= 90.0 && self.lng.abs() <= 180.0
    }

    /// Convert to a unit vector on the sphere.
    pub fn to_point(&self) -> Point {
        let phi = self.lat.to_radians();
        let theta = self.lng.to_radians();
        let cos_phi = phi.cos();
        Point::new(theta.cos() * cos_phi, theta.sin() * cos_phi, phi.sin())
    }

    /// Convert back from a unit vector.
    pub fn from_point(p: &Point) -> Self {
        let lat = p.z.atan2((p.x * p.x + p.y * p.y).sqrt()).to_degrees();
        let lng = p.y.atan2(p.x).to_degrees();
        Self { lat, lng }
    }
}
