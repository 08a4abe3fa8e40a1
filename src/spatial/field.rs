//! Per-cell candidate sets for one solve
//!
//! A field is built fresh from a grid snapshot on every solve request and
//! thrown away once the placement list has been produced.

use ndarray::Array3;

use crate::algorithm::bitset::ModuleSet;
use crate::catalog::module::Catalog;
use crate::spatial::coords::{Direction, GridCoord, GridSize};
use crate::spatial::grid::GridSnapshot;

/// Superposition of every cell in the bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperpositionField {
    cells: Array3<ModuleSet>,
    size: GridSize,
}

impl SuperpositionField {
    /// Initialize candidate sets from occupancy alone
    ///
    /// Empty cells are pinned to the empty module; occupied cells may become
    /// any non-empty module.
    pub fn from_snapshot(snapshot: &GridSnapshot, catalog: &Catalog) -> Self {
        let size = snapshot.size();
        let module_count = catalog.len();
        let empty = catalog.empty_module();

        let open = ModuleSet::all_except(module_count, empty);
        let pinned = ModuleSet::single(module_count, empty);

        let cells = Array3::from_shape_fn(size.shape(), |(x, y, z)| {
            if snapshot.is_occupied(GridCoord::new(x, y, z)) {
                open.clone()
            } else {
                pinned.clone()
            }
        });

        Self { cells, size }
    }

    /// Initialize from a snapshot and apply boundary seeding
    pub fn seeded(snapshot: &GridSnapshot, catalog: &Catalog) -> Self {
        let mut field = Self::from_snapshot(snapshot, catalog);
        field.seed_boundary(catalog);
        field
    }

    /// Remove modules that cannot face open space on the outer faces of the box
    ///
    /// Every cell on a face that looks outward loses any candidate whose
    /// compatibility in that direction omits the empty module. Returns the
    /// number of candidates removed.
    pub fn seed_boundary(&mut self, catalog: &Catalog) -> usize {
        let size = self.size;
        let mut removed = 0;

        for coord in size.coords() {
            let Some(cell) = self.cells.get_mut(coord.index()) else {
                continue;
            };
            for direction in Direction::ALL {
                if size.is_on_face(coord, direction) {
                    removed += cell.retain(|module| catalog.allows_empty(module, direction));
                }
            }
        }

        removed
    }

    /// Bounding box of the field
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Candidate set of a cell
    pub fn get(&self, coord: GridCoord) -> Option<&ModuleSet> {
        self.cells.get(coord.index())
    }

    /// Mutable candidate set of a cell
    pub fn get_mut(&mut self, coord: GridCoord) -> Option<&mut ModuleSet> {
        self.cells.get_mut(coord.index())
    }

    /// Candidate count of a cell, zero if out of bounds
    pub fn entropy(&self, coord: GridCoord) -> usize {
        self.get(coord).map_or(0, ModuleSet::count)
    }

    /// First cell in scan order whose candidate set is empty
    pub fn find_contradiction(&self) -> Option<GridCoord> {
        self.size
            .coords()
            .find(|&coord| self.get(coord).is_none_or(ModuleSet::is_empty))
    }

    /// Whether every cell has exactly one candidate
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| cell.count() == 1)
    }

    /// Resolved module of every cell in scan order, `None` for unresolved cells
    pub fn resolved(&self) -> impl Iterator<Item = (GridCoord, Option<usize>)> + '_ {
        self.size
            .coords()
            .map(|coord| (coord, self.get(coord).and_then(ModuleSet::resolved)))
    }

    /// Candidate counts of every cell in scan order
    pub fn entropies(&self) -> Vec<usize> {
        self.size.coords().map(|coord| self.entropy(coord)).collect()
    }
}
