/// Fixed-capacity bitset of candidate module indices
pub mod bitset;
/// Collapse loop and solver configuration
pub mod executor;
/// Background solve worker with latest-snapshot-wins semantics
pub mod orchestrator;
/// Arc-consistency constraint propagation
pub mod propagation;
/// Minimum-entropy cell selection and priority collapse
pub mod selection;
/// Generation-stamped membership set for permitted neighbour modules
pub mod stamps;

pub use bitset::ModuleSet;
pub use executor::{Solution, Solver, SolverConfig};
pub use orchestrator::SolveOrchestrator;
