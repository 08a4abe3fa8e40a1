use log::debug;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    algorithm::propagation::Propagator,
    algorithm::selection::{Selection, collapse_at, select_min_entropy},
    catalog::module::Catalog,
    io::configuration::DEFAULT_ROUND_CAP,
    io::error::{Result, WfcError, invalid_parameter},
    spatial::coords::{GridCoord, GridSize},
    spatial::field::SuperpositionField,
    spatial::grid::GridSnapshot,
};

/// Solver parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of collapse rounds before the solve is declared failed
    ///
    /// Valid catalogs converge in at most one round per occupied cell, so a
    /// cap of at least the grid volume is only hit when the compatibility
    /// data is broken. See [`SolverConfig::for_size`].
    pub round_cap: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            round_cap: DEFAULT_ROUND_CAP,
        }
    }
}

impl SolverConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the round cap is zero
    pub fn validate(&self) -> Result<()> {
        if self.round_cap == 0 {
            return Err(invalid_parameter(
                "round_cap",
                &self.round_cap,
                &"must allow at least one collapse round",
            ));
        }
        Ok(())
    }

    /// Default parameters with the round cap raised to cover every cell of `size`
    pub fn for_size(size: GridSize) -> Self {
        Self {
            round_cap: DEFAULT_ROUND_CAP.max(size.cell_count()),
        }
    }

    /// Check the round cap can resolve every cell of a grid of `size`
    ///
    /// # Errors
    ///
    /// Returns an error if the grid holds more cells than the cap allows rounds
    pub fn validate_for(&self, size: GridSize) -> Result<()> {
        self.validate()?;
        let cells = size.cell_count();
        if cells > self.round_cap {
            return Err(invalid_parameter(
                "round_cap",
                &self.round_cap,
                &format!("grid of size {size} holds {cells} cells, raise the cap to at least that"),
            ));
        }
        Ok(())
    }
}

/// One resolved, non-empty cell of a finished solve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Cell coordinate
    pub coord: GridCoord,
    /// Resolved module index
    pub module: usize,
}

/// Work done by one solve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Collapse rounds performed
    pub rounds: usize,
    /// Candidates removed by boundary seeding
    pub boundary_removals: usize,
    /// Cells examined by the propagator
    pub propagation_steps: usize,
    /// Candidates removed by propagation
    pub removals: usize,
    /// Wall-clock time of the solve
    pub elapsed: Duration,
}

/// Successful solve result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Every non-empty resolved cell in scan order
    pub placements: Vec<Placement>,
    /// Work counters
    pub stats: SolveStats,
}

/// Phases of the collapse loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Propagate from one cell, or from every cell when `None`
    Propagating(Option<GridCoord>),
    /// Pick the next minimum-entropy cell
    Selecting,
    /// Force the chosen cell to a single module
    Collapsing(GridCoord),
}

/// Wave function collapse solver over a fixed module catalog
///
/// Stateless between solves; every call builds and discards its own field.
#[derive(Clone, Debug)]
pub struct Solver {
    catalog: Arc<Catalog>,
    config: SolverConfig,
}

impl Solver {
    /// Create a solver
    pub const fn new(catalog: Arc<Catalog>, config: SolverConfig) -> Self {
        Self { catalog, config }
    }

    /// Catalog shared by every solve
    pub const fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Solver parameters
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Resolve a module for every cell of the snapshot
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::Contradiction`] if any cell runs out of candidates,
    /// or [`WfcError::RoundCapExceeded`] if collapse does not converge
    pub fn solve(&self, snapshot: &GridSnapshot) -> Result<Solution> {
        let start = Instant::now();

        let mut field = SuperpositionField::from_snapshot(snapshot, &self.catalog);
        let boundary_removals = field.seed_boundary(&self.catalog);

        let mut stats = self.solve_field(&mut field)?;
        stats.boundary_removals = boundary_removals;
        stats.elapsed = start.elapsed();

        let placements = placements(&field, &self.catalog);

        debug!(
            "Solved {} occupied cells in {:?}: {} rounds, {} propagation steps, {} removals",
            snapshot.occupied_count(),
            stats.elapsed,
            stats.rounds,
            stats.propagation_steps,
            stats.removals
        );

        Ok(Solution { placements, stats })
    }

    /// Run propagation and collapse on an already-seeded field
    ///
    /// On success every cell of `field` holds exactly one candidate.
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::Contradiction`] if any cell runs out of candidates,
    /// or [`WfcError::RoundCapExceeded`] if collapse does not converge
    pub fn solve_field(&self, field: &mut SuperpositionField) -> Result<SolveStats> {
        if let Some(coord) = field.find_contradiction() {
            return Err(WfcError::Contradiction { coord });
        }

        let catalog = self.catalog.as_ref();
        let mut propagator = Propagator::new(catalog, field.size());
        let mut rounds = 0;
        let mut phase = Phase::Propagating(None);

        loop {
            phase = match phase {
                Phase::Propagating(seed) => {
                    match seed {
                        Some(coord) => propagator.propagate(field, coord)?,
                        None => propagator.propagate_all(field)?,
                    };
                    Phase::Selecting
                }
                Phase::Selecting => match select_min_entropy(field) {
                    Selection::Done => break,
                    Selection::Contradiction(coord) => {
                        return Err(WfcError::Contradiction { coord });
                    }
                    Selection::Collapse(coord) => Phase::Collapsing(coord),
                },
                Phase::Collapsing(coord) => {
                    if rounds >= self.config.round_cap {
                        return Err(WfcError::RoundCapExceeded { rounds });
                    }
                    rounds += 1;
                    collapse_at(field, coord, catalog)
                        .ok_or(WfcError::Contradiction { coord })?;
                    Phase::Propagating(Some(coord))
                }
            };
        }

        Ok(SolveStats {
            rounds,
            propagation_steps: propagator.stats.steps,
            removals: propagator.stats.removals,
            ..SolveStats::default()
        })
    }
}

/// Placement list of a fully collapsed field
///
/// Cells resolved to the empty module, and cells that are not resolved, are
/// omitted.
pub fn placements(field: &SuperpositionField, catalog: &Catalog) -> Vec<Placement> {
    let empty = catalog.empty_module();
    field
        .resolved()
        .filter_map(|(coord, module)| match module {
            Some(module) if module != empty => Some(Placement { coord, module }),
            _ => None,
        })
        .collect()
}
