//! User-built occupancy of the grid and immutable snapshots handed to the solver
//!
//! Only the occupied/empty signal lives here. Which module an occupied cell
//! becomes is decided by the solver on every edit.

use ndarray::Array3;
use std::sync::Arc;

use crate::io::error::{Result, WfcError, invalid_parameter};
use crate::spatial::coords::{GridCoord, GridSize};

/// Reject sizes that have an empty axis or too many cells to allocate
fn validate_size(size: GridSize) -> Result<()> {
    if size.is_degenerate() {
        return Err(invalid_parameter(
            "size",
            &size,
            &"every axis must contain at least one cell",
        ));
    }
    match size.checked_cell_count() {
        Some(cells) if isize::try_from(cells).is_ok() => Ok(()),
        _ => Err(invalid_parameter(
            "size",
            &size,
            &"grid volume overflows the addressable cell count",
        )),
    }
}

/// Sparse set of user-placed cells inside a fixed bounding box
#[derive(Debug, Clone)]
pub struct GridState {
    occupied: Array3<bool>,
    size: GridSize,
    start: GridCoord,
    occupied_count: usize,
}

impl GridState {
    /// Create a grid whose only occupied cell is `start`
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not a usable volume or `start` lies outside it
    pub fn new(size: GridSize, start: GridCoord) -> Result<Self> {
        validate_size(size)?;
        if !size.contains(start) {
            return Err(invalid_parameter(
                "start",
                &start,
                &format!("outside grid of size {size}"),
            ));
        }

        let mut occupied = Array3::from_elem(size.shape(), false);
        if let Some(cell) = occupied.get_mut(start.index()) {
            *cell = true;
        }

        Ok(Self {
            occupied,
            size,
            start,
            occupied_count: 1,
        })
    }

    /// Bounding box of the grid
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Coordinate occupied when the grid was created
    pub const fn start(&self) -> GridCoord {
        self.start
    }

    /// Number of user-placed cells
    pub const fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Check if a user-placed cell exists at `coord`
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.occupied.get(coord.index()).copied().unwrap_or(false)
    }

    /// All occupied coordinates in scan order
    pub fn occupied_coords(&self) -> Vec<GridCoord> {
        self.size
            .coords()
            .filter(|&coord| self.is_occupied(coord))
            .collect()
    }

    /// Place a cell at `coord`
    ///
    /// # Errors
    ///
    /// Returns an error if `coord` is out of bounds or already occupied
    pub fn add(&mut self, coord: GridCoord) -> Result<()> {
        let cell = self
            .occupied
            .get_mut(coord.index())
            .ok_or(WfcError::OutOfBounds { coord })?;
        if *cell {
            return Err(WfcError::AlreadyOccupied { coord });
        }
        *cell = true;
        self.occupied_count += 1;
        Ok(())
    }

    /// Remove the cell at `coord`
    ///
    /// The last remaining cell is never removed so the grid always has
    /// something to click on.
    ///
    /// # Errors
    ///
    /// Returns an error if `coord` is out of bounds, empty, or the last cell
    pub fn destroy(&mut self, coord: GridCoord) -> Result<()> {
        let remaining = self.occupied_count;
        let cell = self
            .occupied
            .get_mut(coord.index())
            .ok_or(WfcError::OutOfBounds { coord })?;
        if !*cell {
            return Err(WfcError::NotOccupied { coord });
        }
        if remaining <= 1 {
            return Err(WfcError::LastCell { coord });
        }
        *cell = false;
        self.occupied_count -= 1;
        Ok(())
    }

    /// Copy the current occupancy into an immutable snapshot
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            occupied: Arc::new(self.occupied.clone()),
            size: self.size,
            occupied_count: self.occupied_count,
        }
    }
}

/// Frozen occupancy used as the boundary condition of one solve
///
/// Cloning shares the underlying array.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    occupied: Arc<Array3<bool>>,
    size: GridSize,
    occupied_count: usize,
}

impl GridSnapshot {
    /// Build a snapshot directly from a list of occupied coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not a usable volume or any coordinate is out of bounds
    pub fn from_coords(size: GridSize, coords: &[GridCoord]) -> Result<Self> {
        validate_size(size)?;

        let mut occupied = Array3::from_elem(size.shape(), false);
        let mut occupied_count = 0;
        for &coord in coords {
            let cell = occupied
                .get_mut(coord.index())
                .ok_or(WfcError::OutOfBounds { coord })?;
            if !*cell {
                *cell = true;
                occupied_count += 1;
            }
        }

        Ok(Self {
            occupied: Arc::new(occupied),
            size,
            occupied_count,
        })
    }

    /// Bounding box of the snapshot
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Number of occupied cells
    pub const fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Check if `coord` was occupied when the snapshot was taken
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.occupied.get(coord.index()).copied().unwrap_or(false)
    }
}
