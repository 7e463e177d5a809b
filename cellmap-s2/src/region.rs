//! Approximate cell coverings of spherical regions.

use crate::cell::Cell;
use crate::cellid::{CellID, MAX_LEVEL, NUM_FACES};
use crate::point::simple_crossing;
use crate::polygon::Polygon;
use std::collections::VecDeque;

/// A region that can be tested against cells. The coverer only needs the
/// two cell predicates; both may be conservative (`intersects_cell` must
/// never report false for a cell the region actually reaches into).
pub trait Region {
    /// True when the region fully contains the cell.
    fn contains_cell(&self, cell: &Cell) -> bool;

    /// True when the region may intersect the cell.
    fn intersects_cell(&self, cell: &Cell) -> bool;
}

impl Region for Polygon {
    fn contains_cell(&self, cell: &Cell) -> bool {
        if self.is_empty() {
            return false;
        }
        for k in 0..4 {
            if !self.contains(&cell.vertex(k)) {
                return false;
            }
        }
        if !self.contains(&cell.center()) {
            return false;
        }
        // A boundary passing through the cell (or a hole hiding inside it)
        // disqualifies full containment.
        if boundary_touches_cell(self, cell) {
            return false;
        }
        true
    }

    fn intersects_cell(&self, cell: &Cell) -> bool {
        for k in 0..4 {
            if self.contains(&cell.vertex(k)) {
                return true;
            }
        }
        if self.contains(&cell.center()) {
            return true;
        }
        boundary_touches_cell(self, cell)
    }
}

/// True when any polygon vertex lies in the cell or any polygon edge
/// crosses a cell edge.
fn boundary_touches_cell(polygon: &Polygon, cell: &Cell) -> bool {
    for lp in polygon.loops() {
        for v in lp.vertices() {
            if cell.contains_point(v) {
                return true;
            }
        }
    }
    let cell_edges = cell.edges();
    for (a, b) in polygon.edges() {
        for (c, d) in &cell_edges {
            if simple_crossing(&a, &b, c, d) {
                return true;
            }
        }
    }
    false
}

/// Computes approximately minimal coverings under level and cell-count
/// constraints.
///
/// `level_mod` restricts output levels to `min_level + k * level_mod`;
/// `max_cells` is a soft target — the covering may exceed it when the
/// level constraints leave no coarser choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionCoverer {
    pub min_level: u8,
    pub max_level: u8,
    pub level_mod: u8,
    pub max_cells: usize,
}

impl Default for RegionCoverer {
    fn default() -> Self {
        Self {
            min_level: 0,
            max_level: MAX_LEVEL,
            level_mod: 1,
            max_cells: 8,
        }
    }
}

impl RegionCoverer {
    /// Compute a covering: a duplicate-free, id-sorted set of cells whose
    /// union contains the region.
    pub fn covering<R: Region>(&self, region: &R) -> Vec<CellID> {
        let min_level = self.min_level.min(MAX_LEVEL);
        let max_level = self.max_level.clamp(min_level, MAX_LEVEL);
        let level_mod = self.level_mod.max(1);
        let max_cells = self.max_cells.max(1);
        // Deepest level reachable by steps of level_mod from min_level.
        let last_level = min_level + ((max_level - min_level) / level_mod) * level_mod;

        let conforming_floor =
            |level: u8| min_level + ((level - min_level) / level_mod) * level_mod;

        let mut result: Vec<CellID> = Vec::new();
        let mut queue: VecDeque<CellID> = (0..NUM_FACES)
            .map(CellID::from_face)
            .filter(|id| region.intersects_cell(&Cell::from(*id)))
            .collect();

        // Breadth-first refinement: subdivide intersecting cells until they
        // are fully contained, hit the level ceiling, or the cell budget
        // stops paying for further splits.
        while let Some(id) = queue.pop_front() {
            let level = id.level();
            let budget_tight = result.len() + queue.len() + 3 >= max_cells;

            if level >= min_level {
                let conforming = (level - min_level) % level_mod == 0;
                if conforming {
                    let cell = Cell::from(id);
                    if level >= last_level || budget_tight || region.contains_cell(&cell) {
                        result.push(id);
                        continue;
                    }
                } else if level >= max_level || budget_tight {
                    // Cannot emit at this level; fall back to the nearest
                    // conforming ancestor (dedup handles the overlap).
                    result.push(id.parent(conforming_floor(level)));
                    continue;
                }
            }

            for child in id.children() {
                if region.intersects_cell(&Cell::from(child)) {
                    queue.push_back(child);
                }
            }
        }

        result.sort_unstable();
        result.dedup();
        result
    }
}
