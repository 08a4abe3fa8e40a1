//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Coordinates, directions and grid bounds
//! - Occupancy state and immutable snapshots
//! - Per-cell superpositions of candidate modules

/// Grid coordinates, face directions and bounding boxes
pub mod coords;
/// Per-cell candidate module sets
pub mod field;
/// Occupancy state and snapshots
pub mod grid;

pub use coords::{Direction, GridCoord, GridSize};
pub use field::SuperpositionField;
pub use grid::{GridSnapshot, GridState};
