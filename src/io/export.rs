//! JSON output of solved placement lists for the visual instantiation step

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algorithm::executor::Solution;
use crate::catalog::module::Catalog;
use crate::io::error::{Result, WfcError};
use crate::spatial::coords::{GridCoord, GridSize};

/// One placed module as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRecord<'a> {
    /// Cell coordinate
    pub coord: GridCoord,
    /// Module index
    pub module: usize,
    /// Module name
    pub name: &'a str,
}

/// Complete placement list with the grid it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionDocument<'a> {
    /// Grid extent as `[x, y, z]`
    pub size: [usize; 3],
    /// Collapse rounds the solve needed
    pub rounds: usize,
    /// Placed modules in scan order
    pub placements: Vec<PlacementRecord<'a>>,
}

impl<'a> SolutionDocument<'a> {
    /// Pair a solution's placements with module names
    pub fn new(solution: &Solution, catalog: &'a Catalog, size: GridSize) -> Self {
        let placements = solution
            .placements
            .iter()
            .map(|placement| PlacementRecord {
                coord: placement.coord,
                module: placement.module,
                name: catalog
                    .module(placement.module)
                    .map_or("<unknown>", |module| module.name.as_str()),
            })
            .collect();

        Self {
            size: [size.x, size.y, size.z],
            rounds: solution.stats.rounds,
            placements,
        }
    }
}

/// Serialize a solution to any writer
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_solution<W: Write>(
    mut writer: W,
    solution: &Solution,
    catalog: &Catalog,
    size: GridSize,
) -> Result<()> {
    let document = SolutionDocument::new(solution, catalog, size);
    serde_json::to_writer_pretty(&mut writer, &document).map_err(|source| {
        WfcError::Json {
            path: "<output>".into(),
            source,
        }
    })?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(|source| WfcError::FileSystem {
            path: "<output>".into(),
            operation: "write",
            source,
        })
}

/// Serialize a solution to a file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn export_solution(
    path: &Path,
    solution: &Solution,
    catalog: &Catalog,
    size: GridSize,
) -> Result<()> {
    let file = File::create(path).map_err(|source| WfcError::FileSystem {
        path: path.to_path_buf(),
        operation: "create output",
        source,
    })?;
    write_solution(BufWriter::new(file), solution, catalog, size)
}
