//! Interactive 3D module grid solved by wave function collapse
//!
//! Cells are added to and removed from a bounded grid one at a time. After every
//! edit the occupied cells are re-solved in the background: each cell holds a
//! superposition of candidate modules, boundary faces are seeded, constraints are
//! propagated through the compatibility tables, and the lowest-entropy cell is
//! collapsed to its highest-priority candidate until every cell is resolved.

#![forbid(unsafe_code)]

/// Constraint propagation, collapse scheduling and the background solve worker
pub mod algorithm;
/// Module definitions, compatibility tables and built-in catalogs
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid coordinates, occupancy state and superposition fields
pub mod spatial;

pub use io::error::{Result, WfcError};
