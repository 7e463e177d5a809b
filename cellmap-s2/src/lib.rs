//! S2-style spherical geometry for cellmap.
//!
//! This crate provides the geometric substrate the rest of the workspace
//! builds on:
//!
//! - **Points and coordinates**: unit 3-vectors ([`point`]) and degree
//!   lat/lng pairs ([`latlng`]).
//! - **Hierarchical cells**: 64-bit Hilbert-curve cell ids ([`cellid`])
//!   and their geometric view ([`cell`]), with the cube-face projection
//!   math in [`stuv`].
//! - **Polygons**: loops and multi-loop regions with parity-based
//!   containment ([`polygon`]), assembled from directed edge soups under
//!   XOR merge semantics ([`builder`]).
//! - **Boolean operations**: union/intersection/difference by boundary
//!   clipping ([`boolean`]).
//! - **Coverings**: approximate minimal cell coverings of regions
//!   ([`region`]).
//!
//! Polygons are immutable once built; boolean operations always produce
//! new values, so regions can be shared freely across combination chains.

pub mod boolean;
pub mod builder;
pub mod cell;
pub mod cellid;
pub mod latlng;
pub mod point;
pub mod polygon;
pub mod region;
pub mod stuv;

pub use builder::{Edge, EdgeBuilder};
pub use cell::Cell;
pub use cellid::{CellID, MAX_LEVEL, NUM_FACES};
pub use latlng::LatLng;
pub use point::Point;
pub use polygon::{Loop, Polygon};
pub use region::{Region, RegionCoverer};
