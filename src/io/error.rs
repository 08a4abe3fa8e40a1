//! Error types and context management for grid editing and solving

use crate::spatial::coords::GridCoord;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid and solver operations
#[derive(Debug)]
pub enum WfcError {
    /// A superposition was reduced to zero candidates
    ///
    /// Always caused by compatibility tables that cannot be satisfied by the
    /// current grid connectivity. The whole solve is abandoned.
    Contradiction {
        /// Cell whose candidate set became empty
        coord: GridCoord,
    },

    /// The collapse loop ran out of rounds before every cell was resolved
    RoundCapExceeded {
        /// Number of collapse rounds performed
        rounds: usize,
    },

    /// Module catalog does not satisfy the solver's structural requirements
    InvalidCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinate lies outside the grid bounding box
    OutOfBounds {
        /// Offending coordinate
        coord: GridCoord,
    },

    /// Tried to add a cell where one already exists
    AlreadyOccupied {
        /// Offending coordinate
        coord: GridCoord,
    },

    /// Tried to destroy a cell that does not exist
    NotOccupied {
        /// Offending coordinate
        coord: GridCoord,
    },

    /// The final remaining cell cannot be destroyed
    LastCell {
        /// Coordinate of the remaining cell
        coord: GridCoord,
    },

    /// JSON document could not be read or written
    Json {
        /// Path of the document
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The background solve worker could not be started
    WorkerSpawn {
        /// Underlying thread creation error
        source: std::io::Error,
    },
}

impl WfcError {
    /// Whether this error is a solve failure rather than a usage error
    pub const fn is_solve_failure(&self) -> bool {
        matches!(
            self,
            Self::Contradiction { .. } | Self::RoundCapExceeded { .. }
        )
    }
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction { coord } => {
                write!(f, "Contradiction: no candidate modules left at {coord}")
            }
            Self::RoundCapExceeded { rounds } => {
                write!(f, "Collapse did not converge within {rounds} rounds")
            }
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid module catalog: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds { coord } => {
                write!(f, "{coord} is out of bounds")
            }
            Self::AlreadyOccupied { coord } => {
                write!(f, "{coord} already contains a cell")
            }
            Self::NotOccupied { coord } => {
                write!(f, "{coord} contains no cell")
            }
            Self::LastCell { coord } => {
                write!(f, "{coord} is the last remaining cell")
            }
            Self::Json { path, source } => {
                write!(
                    f,
                    "JSON error for '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::WorkerSpawn { source } => {
                write!(f, "Failed to start solve worker: {source}")
            }
        }
    }
}

impl std::error::Error for WfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::WorkerSpawn { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid and solver results
pub type Result<T> = std::result::Result<T, WfcError>;

impl From<std::io::Error> for WfcError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WfcError {
    WfcError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> WfcError {
    WfcError::InvalidCatalog {
        reason: reason.to_string(),
    }
}
