//! Module catalogs describing which modules may sit next to each other

/// Module definitions and the validated catalog
pub mod module;
/// Built-in catalogs
pub mod presets;
/// Compatibility symmetry checks
pub mod symmetry;

pub use module::{Catalog, ModuleDefinition};
