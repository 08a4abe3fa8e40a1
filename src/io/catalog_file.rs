//! JSON catalog files produced by the module authoring tool

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::module::{Catalog, EMPTY_MODULE, ModuleDefinition};
use crate::catalog::symmetry;
use crate::io::error::{Result, WfcError};

/// On-disk catalog layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Index of the empty module, must be 0
    #[serde(default)]
    pub empty_module: usize,
    /// Module definitions in index order
    pub modules: Vec<ModuleDefinition>,
}

impl CatalogFile {
    /// Describe an existing catalog in file form
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            empty_module: EMPTY_MODULE,
            modules: catalog.modules().to_vec(),
        }
    }

    /// Validate into a catalog, logging any one-sided compatibility entries
    ///
    /// # Errors
    ///
    /// Returns an error if the definitions fail catalog validation
    pub fn into_catalog(self) -> Result<Catalog> {
        let catalog = Catalog::new(self.modules, self.empty_module)?;

        let violations = symmetry::audit(&catalog);
        if !violations.is_empty() {
            warn!(
                "Catalog has {} one-sided compatibility entries",
                violations.len()
            );
            for violation in &violations {
                warn!("  {violation}");
            }
        }

        Ok(catalog)
    }
}

/// Parse a catalog from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a valid catalog document
pub fn parse_catalog(json: &str, origin: &Path) -> Result<Catalog> {
    let file: CatalogFile =
        serde_json::from_str(json).map_err(|source| WfcError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
    file.into_catalog()
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a valid catalog
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path).map_err(|source| WfcError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source,
    })?;
    let catalog = parse_catalog(&json, path)?;
    info!(
        "Loaded {} modules from '{}'",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Write a catalog as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&CatalogFile::from_catalog(catalog)).map_err(
        |source| WfcError::Json {
            path: path.to_path_buf(),
            source,
        },
    )?;
    fs::write(path, json).map_err(|source| WfcError::FileSystem {
        path: path.to_path_buf(),
        operation: "write catalog",
        source,
    })
}
