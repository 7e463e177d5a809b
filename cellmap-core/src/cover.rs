//! Cell-covering aggregation over points and regions.
//!
//! Single regions delegate to the coverer; multiple regions are covered
//! independently and merged with duplicate elimination (a dedup-merge, not
//! a re-covering of the combined area, so the total may exceed
//! `max_cells`). A bare point skips the coverer entirely and enumerates
//! its ancestor cells level by level.

use cellmap_s2::{CellID, LatLng, Polygon, RegionCoverer, MAX_LEVEL};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Covering constraints, matching the coverer's knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverOptions {
    /// Coarsest cell level in the output.
    pub min_level: u8,

    /// Finest cell level in the output.
    pub max_level: u8,

    /// Soft ceiling on cells per covered region.
    pub max_cells: usize,

    /// Output levels step from `min_level` in multiples of this.
    pub level_mod: u8,
}

impl Default for CoverOptions {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: MAX_LEVEL,
            max_cells: 8,
            level_mod: 1,
        }
    }
}

impl CoverOptions {
    /// Clamp fields into valid ranges.
    pub fn normalized(mut self) -> Self {
        self.min_level = self.min_level.min(MAX_LEVEL);
        self.max_level = self.max_level.clamp(self.min_level, MAX_LEVEL);
        self.level_mod = self.level_mod.max(1);
        self.max_cells = self.max_cells.max(1);
        self
    }

    fn coverer(&self) -> RegionCoverer {
        RegionCoverer {
            min_level: self.min_level,
            max_level: self.max_level,
            level_mod: self.level_mod,
            max_cells: self.max_cells,
        }
    }
}

/// Ancestor chain of the cell containing a point: one cell per level from
/// `min_level` to `max_level`, stepping by `level_mod`. No covering
/// algorithm is involved.
pub fn cover_point(ll: &LatLng, options: &CoverOptions) -> Vec<CellID> {
    let options = options.normalized();
    let leaf = CellID::from_latlng(ll);
    let mut out = Vec::new();
    let mut level = options.min_level;
    while level <= options.max_level {
        out.push(leaf.parent(level));
        level = match level.checked_add(options.level_mod) {
            Some(next) => next,
            None => break,
        };
    }
    out
}

/// Ancestor chains for several points, dedup-merged. A single point keeps
/// its chain order; multiple points merge like multiple regions do.
pub fn cover_points(points: &[LatLng], options: &CoverOptions) -> Vec<CellID> {
    match points {
        [single] => cover_point(single, options),
        many => dedup_merge(many.iter().map(|ll| cover_point(ll, options))),
    }
}

/// Covering of one region.
pub fn cover_region(region: &Polygon, options: &CoverOptions) -> Vec<CellID> {
    options.normalized().coverer().covering(region)
}

/// Independent coverings of several regions, dedup-merged into one
/// id-sorted set.
pub fn cover_regions(regions: &[Polygon], options: &CoverOptions) -> Vec<CellID> {
    match regions {
        [single] => cover_region(single, options),
        many => dedup_merge(many.iter().map(|r| cover_region(r, options))),
    }
}

fn dedup_merge(coverings: impl Iterator<Item = Vec<CellID>>) -> Vec<CellID> {
    let mut seen: FxHashSet<CellID> = FxHashSet::default();
    let mut merged: Vec<CellID> = Vec::new();
    for covering in coverings {
        for id in covering {
            if seen.insert(id) {
                merged.push(id);
            }
        }
    }
    merged.sort_unstable();
    merged
}
