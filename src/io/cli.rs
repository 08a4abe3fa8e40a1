//! Command-line interface driving an edit session against the background solver

use crate::algorithm::executor::{Solver, SolverConfig};
use crate::algorithm::orchestrator::{SolveOrchestrator, SolveReport};
use crate::catalog::module::Catalog;
use crate::catalog::presets::Preset;
use crate::io::catalog_file::load_catalog;
use crate::io::configuration::{
    DEFAULT_EDIT_COUNT, DEFAULT_GRID_SIZE, DEFAULT_ROUND_CAP, DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{export_solution, write_solution};
use crate::io::progress::{EditProgress, SessionTally};
use crate::io::session::{Edit, random_edit};
use crate::spatial::coords::{GridCoord, GridSize};
use crate::spatial::grid::GridState;
use clap::Parser;
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "modulegrid")]
#[command(
    author,
    version,
    about = "Grow a module grid one cell at a time, re-solving it with wave function collapse after every edit"
)]
/// Command-line arguments for an edit session
pub struct Cli {
    /// Built-in catalog, used when no catalog file is given
    #[arg(short, long, default_value_t = Preset::Terrace)]
    pub preset: Preset,

    /// Module catalog JSON file
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Grid bounding box as X,Y,Z
    #[arg(long, default_value = DEFAULT_GRID_SIZE, value_name = "X,Y,Z")]
    pub size: GridSize,

    /// First occupied cell (defaults to the middle of the floor)
    #[arg(long, value_name = "X,Y,Z")]
    pub start: Option<GridCoord>,

    /// Additional cell to occupy before editing starts (repeatable)
    #[arg(long = "cell", value_name = "X,Y,Z")]
    pub cells: Vec<GridCoord>,

    /// Number of random edits to simulate
    #[arg(short, long, default_value_t = DEFAULT_EDIT_COUNT)]
    pub edits: usize,

    /// Random seed for reproducible edit sessions
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum collapse rounds per solve
    #[arg(long, default_value_t = DEFAULT_ROUND_CAP)]
    pub round_cap: usize,

    /// Write the final placement list here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Start coordinate, defaulting to the centre of the bottom layer
    pub const fn start_coord(&self) -> GridCoord {
        match self.start {
            Some(start) => start,
            None => GridCoord::new(self.size.x / 2, 0, self.size.z / 2),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Load the catalog file, or build the selected preset
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be loaded
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => self.preset.catalog(),
        }
    }
}

/// Outcome of a finished edit session
#[derive(Debug)]
pub struct SessionSummary {
    /// Edit counters
    pub tally: SessionTally,
    /// Occupied cells at the end of the session
    pub occupied: usize,
    /// Report for the final grid state
    pub report: SolveReport,
}

/// Runs a grid edit session and writes the final placement list
pub struct EditSession {
    cli: Cli,
}

impl EditSession {
    /// Create a session from command-line arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the session and write the final placements
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the final solve fails,
    /// or the placement list cannot be written
    pub fn process(&self) -> Result<()> {
        let catalog = Arc::new(self.cli.catalog()?);
        let summary = self.run(Arc::clone(&catalog))?;

        info!(
            "Session finished with {} cells: {}",
            summary.occupied,
            summary.tally.summary()
        );

        let solution = summary.report.outcome?;
        match &self.cli.output {
            Some(path) => export_solution(path, &solution, &catalog, self.cli.size),
            None => write_solution(std::io::stdout().lock(), &solution, &catalog, self.cli.size),
        }
    }

    /// Simulate the edit session, returning the report for the final grid
    ///
    /// Every successful edit issues a solve request, and results are polled
    /// once per edit like a display refresh would.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid or solver configuration is invalid or the
    /// worker cannot be started
    pub fn run(&self, catalog: Arc<Catalog>) -> Result<SessionSummary> {
        let start_time = Instant::now();

        let config = SolverConfig {
            round_cap: self.cli.round_cap,
        };
        config.validate_for(self.cli.size)?;

        let mut grid = GridState::new(self.cli.size, self.cli.start_coord())?;
        let mut tally = SessionTally::default();

        for &cell in &self.cli.cells {
            match grid.add(cell) {
                Ok(()) => tally.added += 1,
                Err(error) => {
                    warn!("Skipping initial cell: {error}");
                    tally.rejected += 1;
                }
            }
        }

        let orchestrator = SolveOrchestrator::new(Solver::new(catalog, config));
        orchestrator.request_solve(grid.snapshot())?;

        let progress = if self.cli.should_show_progress() {
            EditProgress::new(self.cli.edits)
        } else {
            EditProgress::hidden(self.cli.edits)
        };

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut latest: Option<SolveReport> = None;

        for _ in 0..self.cli.edits {
            match random_edit(&mut grid, &mut rng) {
                Some(edit) => {
                    match edit {
                        Edit::Added(_) => tally.added += 1,
                        Edit::Destroyed(_) => tally.destroyed += 1,
                    }
                    debug!("Edit: {edit}");
                    orchestrator.request_solve(grid.snapshot())?;
                }
                None => tally.rejected += 1,
            }

            if let Some(report) = orchestrator.take_result() {
                record(&mut tally, &report);
                latest = Some(report);
            }
            progress.advance(&tally);
        }

        orchestrator.wait_idle();
        if let Some(report) = orchestrator.take_result() {
            record(&mut tally, &report);
            latest = Some(report);
        }
        progress.finish();

        let stats = orchestrator.stats();
        info!(
            "{} requests, {} solved, {} coalesced, {} discarded in {:?}",
            stats.requested,
            stats.published,
            stats.coalesced,
            stats.discarded,
            start_time.elapsed()
        );

        let report = latest.ok_or_else(|| {
            invalid_parameter(
                "edits",
                &self.cli.edits,
                &"session ended without a published result",
            )
        })?;

        Ok(SessionSummary {
            tally,
            occupied: grid.occupied_count(),
            report,
        })
    }
}

fn record(tally: &mut SessionTally, report: &SolveReport) {
    if report.is_failed() {
        tally.failed += 1;
    } else {
        tally.solved += 1;
    }
}
