//! Spherical set algebra and cell coverings over GeoJSON.
//!
//! This crate is the service-independent core: it converts GeoJSON
//! polygons to spherical regions and back, combines ordered region
//! sequences with the four n-ary set operations, and aggregates cell
//! coverings across points and regions.
//!
//! # Modules
//!
//! - [`geojson`]: wire types (positions, geometries, features)
//! - [`codec`]: GeoJSON ⇄ region conversion
//! - [`assemble`]: directed-edge-XOR region assembly
//! - [`algebra`]: n-ary union / intersection / difference / symmetric
//!   difference
//! - [`cover`]: point and region coverings with dedup-merge
//! - [`descriptor`]: display-ready cell descriptors
//! - [`error`]: error types
//!
//! Everything here is per-request and synchronous: regions are built from
//! the input, combined immutably, serialized, and dropped.

pub mod algebra;
pub mod assemble;
pub mod codec;
pub mod cover;
pub mod descriptor;
pub mod error;
pub mod geojson;

pub use cover::CoverOptions;
pub use descriptor::{describe_covering, CellDescriptor};
pub use error::{GeomError, Result};
pub use geojson::{Feature, FeatureCollection, GeoJsonInput, Geometry, Position};
