//! Solver constants and runtime configuration defaults

// Convergence safety valve; valid catalogs never get near it
/// Maximum collapse rounds per solve
pub const DEFAULT_ROUND_CAP: usize = 1000;

/// Name of the background solve thread
pub const WORKER_THREAD_NAME: &str = "wfc-solver";

// Default values for configurable parameters
/// Grid bounding box used when none is given
pub const DEFAULT_GRID_SIZE: &str = "8,6,8";

/// Fixed seed for reproducible edit sessions
pub const DEFAULT_SEED: u64 = 42;

/// Number of simulated edits in an edit session
pub const DEFAULT_EDIT_COUNT: usize = 40;

/// Chance that a simulated edit removes a cell instead of adding one
pub const DESTROY_PROBABILITY: f64 = 0.2;

// Prevents a session on a nearly full grid from spinning forever
/// Attempts allowed per simulated edit before it is skipped
pub const MAX_EDIT_ATTEMPTS: usize = 32;

// Progress bar display settings
/// Width of the edit progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
