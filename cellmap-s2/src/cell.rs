//! Geometric view of a cell id: center, corners, and containment.

use crate::cellid::{CellID, MAX_LEVEL};
use crate::point::Point;
use crate::stuv;

/// A cell id resolved to its face rectangle in (u,v) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub id: CellID,
    pub face: u8,
    pub level: u8,
    u_lo: f64,
    u_hi: f64,
    v_lo: f64,
    v_hi: f64,
}

impl Cell {
    pub fn from(id: CellID) -> Cell {
        let (i_lo, j_lo, size) = id.ij_bounds();
        let max = (1u32 << MAX_LEVEL) as f64;
        Cell {
            id,
            face: id.face(),
            level: id.level(),
            u_lo: stuv::st_to_uv(i_lo as f64 / max),
            u_hi: stuv::st_to_uv((i_lo + size) as f64 / max),
            v_lo: stuv::st_to_uv(j_lo as f64 / max),
            v_hi: stuv::st_to_uv((j_lo + size) as f64 / max),
        }
    }

    pub fn center(&self) -> Point {
        self.id.center_point()
    }

    /// Corner `k` (0..4) in counterclockwise order seen from outside the
    /// sphere: (lo,lo), (hi,lo), (hi,hi), (lo,hi) in (u,v).
    pub fn vertex(&self, k: usize) -> Point {
        let (u, v) = match k & 3 {
            0 => (self.u_lo, self.v_lo),
            1 => (self.u_hi, self.v_lo),
            2 => (self.u_hi, self.v_hi),
            _ => (self.u_lo, self.v_hi),
        };
        stuv::face_uv_to_xyz(self.face, u, v).normalize()
    }

    /// The four boundary edges. Cell boundaries follow lines of constant u
    /// or v, which are great circles, so each edge is a geodesic arc.
    pub fn edges(&self) -> [(Point, Point); 4] {
        let v0 = self.vertex(0);
        let v1 = self.vertex(1);
        let v2 = self.vertex(2);
        let v3 = self.vertex(3);
        [(v0, v1), (v1, v2), (v2, v3), (v3, v0)]
    }

    /// True when `p` projects onto this cell's face inside its uv rectangle.
    pub fn contains_point(&self, p: &Point) -> bool {
        if stuv::face(p) != self.face {
            return false;
        }
        let (u, v) = stuv::face_xyz_to_uv(self.face, p);
        u >= self.u_lo && u <= self.u_hi && v >= self.v_lo && v <= self.v_hi
    }
}
