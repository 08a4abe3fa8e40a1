/// Catalog JSON loading and saving
pub mod catalog_file;
/// Command-line interface and edit session driver
pub mod cli;
/// Solver constants and configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Solution JSON output
pub mod export;
/// Logger installation for the binary
pub mod logging;
/// Progress display for edit sessions
pub mod progress;
/// Simulated user edits
pub mod session;
