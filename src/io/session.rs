//! Simulated interactive edits used to drive the solver from the command line

use rand::Rng;
use std::fmt;

use crate::io::configuration::{DESTROY_PROBABILITY, MAX_EDIT_ATTEMPTS};
use crate::spatial::coords::{Direction, GridCoord};
use crate::spatial::grid::GridState;

/// A successful single-cell edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// A cell was placed
    Added(GridCoord),
    /// A cell was removed
    Destroyed(GridCoord),
}

impl Edit {
    /// Cell the edit touched
    pub const fn coord(self) -> GridCoord {
        match self {
            Self::Added(coord) | Self::Destroyed(coord) => coord,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(coord) => write!(f, "add {coord}"),
            Self::Destroyed(coord) => write!(f, "destroy {coord}"),
        }
    }
}

/// Perform one random edit the way a user clicking on faces would
///
/// Mostly adds a cell against a random face of an existing cell, sometimes
/// removes a random cell. Attempts that the grid refuses are retried a bounded
/// number of times; `None` means no edit was possible.
pub fn random_edit<R: Rng>(grid: &mut GridState, rng: &mut R) -> Option<Edit> {
    let size = grid.size();

    for _ in 0..MAX_EDIT_ATTEMPTS {
        let occupied = grid.occupied_coords();
        if occupied.is_empty() {
            return None;
        }
        let Some(&picked) = occupied.get(rng.random_range(0..occupied.len())) else {
            continue;
        };

        if occupied.len() > 1 && rng.random_bool(DESTROY_PROBABILITY) {
            if grid.destroy(picked).is_ok() {
                return Some(Edit::Destroyed(picked));
            }
            continue;
        }

        let direction = Direction::ALL
            .get(rng.random_range(0..Direction::ALL.len()))
            .copied()
            .unwrap_or(Direction::Up);
        if let Some(target) = size.neighbour(picked, direction)
            && grid.add(target).is_ok()
        {
            return Some(Edit::Added(target));
        }
    }

    None
}
