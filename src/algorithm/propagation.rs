use bitvec::prelude::*;

use crate::{
    algorithm::stamps::NeighbourStamps,
    catalog::module::Catalog,
    io::error::{Result, WfcError},
    spatial::coords::{Direction, GridCoord, GridSize},
    spatial::field::SuperpositionField,
};

/// Counters accumulated over every propagation run of one solve
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PropagationStats {
    /// Cells popped from the work-list
    pub steps: usize,
    /// Candidates removed from neighbours
    pub removals: usize,
}

/// Arc-consistency propagator over a superposition field
///
/// Owns its work-list, pending flags and neighbour stamps so that repeated
/// runs within one solve never allocate.
#[derive(Debug)]
pub struct Propagator<'a> {
    catalog: &'a Catalog,
    size: GridSize,
    stamps: NeighbourStamps,
    stack: Vec<GridCoord>,
    pending: BitVec,
    /// Work done so far
    pub stats: PropagationStats,
}

impl<'a> Propagator<'a> {
    /// Create a propagator for fields of the given size
    pub fn new(catalog: &'a Catalog, size: GridSize) -> Self {
        let cell_count = size.cell_count();
        Self {
            catalog,
            size,
            stamps: NeighbourStamps::new(catalog.len()),
            stack: Vec::with_capacity(cell_count),
            pending: bitvec![0; cell_count],
            stats: PropagationStats::default(),
        }
    }

    /// Propagate the consequences of a change at `seed` until nothing else changes
    ///
    /// Returns the number of candidates removed.
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::Contradiction`] as soon as any cell runs out of candidates
    pub fn propagate(&mut self, field: &mut SuperpositionField, seed: GridCoord) -> Result<usize> {
        self.push(seed);
        self.run(field)
    }

    /// Propagate from every cell of the field
    ///
    /// Used once after seeding, before the first collapse. Returns the number
    /// of candidates removed.
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::Contradiction`] as soon as any cell runs out of candidates
    pub fn propagate_all(&mut self, field: &mut SuperpositionField) -> Result<usize> {
        // Reverse so the LIFO pops cells in scan order
        let coords: Vec<GridCoord> = self.size.coords().collect();
        for &coord in coords.iter().rev() {
            self.push(coord);
        }
        self.run(field)
    }

    fn run(&mut self, field: &mut SuperpositionField) -> Result<usize> {
        let mut removed_total = 0;

        while let Some(current) = self.stack.pop() {
            self.set_pending(current, false);
            self.stats.steps += 1;

            for direction in Direction::ALL {
                let Some(neighbour) = self.size.neighbour(current, direction) else {
                    continue;
                };

                self.permit_neighbours(field, current, direction);

                let stamps = &self.stamps;
                let removed = field
                    .get_mut(neighbour)
                    .map_or(0, |set| set.retain(|module| stamps.contains(module)));
                if removed == 0 {
                    continue;
                }

                removed_total += removed;
                self.stats.removals += removed;

                if field.get(neighbour).is_none_or(|set| set.is_empty()) {
                    self.clear();
                    return Err(WfcError::Contradiction { coord: neighbour });
                }

                self.push(neighbour);
            }
        }

        Ok(removed_total)
    }

    /// Stamp every module that the current cell's candidates accept in `direction`
    fn permit_neighbours(
        &mut self,
        field: &SuperpositionField,
        current: GridCoord,
        direction: Direction,
    ) {
        let catalog = self.catalog;
        self.stamps.begin();
        if let Some(cell) = field.get(current) {
            for module in cell.iter() {
                self.stamps.stamp_all(catalog.compatible(module, direction));
            }
        }
    }

    fn push(&mut self, coord: GridCoord) {
        if !self.is_pending(coord) {
            self.set_pending(coord, true);
            self.stack.push(coord);
        }
    }

    fn is_pending(&self, coord: GridCoord) -> bool {
        self.pending
            .get(self.size.linear_index(coord))
            .as_deref()
            == Some(&true)
    }

    fn set_pending(&mut self, coord: GridCoord, value: bool) {
        if let Some(mut bit) = self.pending.get_mut(self.size.linear_index(coord)) {
            *bit = value;
        }
    }

    /// Drop any queued work after an abandoned run
    fn clear(&mut self) {
        self.stack.clear();
        self.pending.fill(false);
    }

    /// Number of cells currently queued for re-examination
    pub fn pending_len(&self) -> usize {
        self.stack.len()
    }
}
