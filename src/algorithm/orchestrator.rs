//! Background solve scheduling with latest-snapshot-wins semantics
//!
//! At most one worker thread exists per orchestrator. Requests never block:
//! they drop their snapshot into a single-slot mailbox and start the worker
//! if it is not already running. The worker keeps solving whatever is in the
//! mailbox until it finds it empty, then exits.
//!
//! ## Staleness
//! - A snapshot replaced in the mailbox before the worker picks it up is
//!   never solved.
//! - A solve that finishes while a newer snapshot is waiting is discarded
//!   instead of published.
//! - The last request therefore always produces the last published report.
//!
//! Locks are only held to swap slot contents, never while solving.

use log::{trace, warn};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use crate::{
    algorithm::executor::{Placement, Solution, Solver},
    io::configuration::WORKER_THREAD_NAME,
    io::error::{Result, WfcError},
    spatial::grid::GridSnapshot,
};

/// Anything able to turn a grid snapshot into a solution on a worker thread
pub trait SnapshotSolver: Send + Sync + 'static {
    /// Solve one snapshot to completion
    ///
    /// # Errors
    ///
    /// Returns the solve failure; it is published to the caller unchanged
    fn solve_snapshot(&self, snapshot: &GridSnapshot) -> Result<Solution>;
}

impl SnapshotSolver for Solver {
    fn solve_snapshot(&self, snapshot: &GridSnapshot) -> Result<Solution> {
        self.solve(snapshot)
    }
}

impl<F> SnapshotSolver for F
where
    F: Fn(&GridSnapshot) -> Result<Solution> + Send + Sync + 'static,
{
    fn solve_snapshot(&self, snapshot: &GridSnapshot) -> Result<Solution> {
        self(snapshot)
    }
}

/// Published outcome of the most recent request
#[derive(Debug)]
pub struct SolveReport {
    /// Identifier returned by the request that produced this report
    pub request_id: u64,
    /// Placement list, or the reason no placement list was produced
    pub outcome: Result<Solution>,
}

impl SolveReport {
    /// Whether the solve failed and produced nothing usable
    pub const fn is_failed(&self) -> bool {
        self.outcome.is_err()
    }

    /// Placements of a successful solve
    pub fn placements(&self) -> Option<&[Placement]> {
        self.outcome
            .as_ref()
            .ok()
            .map(|solution| solution.placements.as_slice())
    }
}

/// Request bookkeeping, all guarded by the mailbox lock
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorStats {
    /// Requests accepted
    pub requested: u64,
    /// Snapshots replaced before the worker picked them up
    pub coalesced: u64,
    /// Solves started by the worker
    pub started: u64,
    /// Finished solves dropped because a newer snapshot was waiting
    pub discarded: u64,
    /// Reports published
    pub published: u64,
}

#[derive(Debug)]
struct PendingSolve {
    request_id: u64,
    snapshot: GridSnapshot,
}

#[derive(Debug, Default)]
struct Mailbox {
    pending: Option<PendingSolve>,
    worker_active: bool,
    stats: OrchestratorStats,
}

struct Shared<S> {
    solver: S,
    mailbox: Mutex<Mailbox>,
    idle: Condvar,
    published: Mutex<Option<SolveReport>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owner of the single background solve worker
pub struct SolveOrchestrator<S: SnapshotSolver = Solver> {
    shared: Arc<Shared<S>>,
}

impl<S: SnapshotSolver> SolveOrchestrator<S> {
    /// Create an orchestrator; no thread is started until the first request
    pub fn new(solver: S) -> Self {
        Self {
            shared: Arc::new(Shared {
                solver,
                mailbox: Mutex::new(Mailbox::default()),
                idle: Condvar::new(),
                published: Mutex::new(None),
            }),
        }
    }

    /// Solver used by the worker
    pub fn solver(&self) -> &S {
        &self.shared.solver
    }

    /// Ask for `snapshot` to be solved in the background
    ///
    /// Returns immediately with the request's identifier. Any snapshot still
    /// waiting from an earlier request is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::WorkerSpawn`] if a worker was needed and the
    /// operating system refused to start it
    pub fn request_solve(&self, snapshot: GridSnapshot) -> Result<u64> {
        let request_id = {
            let mut mailbox = lock(&self.shared.mailbox);
            mailbox.stats.requested += 1;
            let request_id = mailbox.stats.requested;

            let replaced = mailbox.pending.replace(PendingSolve {
                request_id,
                snapshot,
            });
            if let Some(stale) = replaced {
                mailbox.stats.coalesced += 1;
                trace!("Request {} superseded by {request_id}", stale.request_id);
            }

            if mailbox.worker_active {
                return Ok(request_id);
            }
            mailbox.worker_active = true;
            request_id
        };

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || run_worker(&shared));

        if let Err(source) = spawned {
            let mut mailbox = lock(&self.shared.mailbox);
            mailbox.worker_active = false;
            mailbox.pending = None;
            self.shared.idle.notify_all();
            return Err(WfcError::WorkerSpawn { source });
        }

        Ok(request_id)
    }

    /// Take the latest published report, leaving the slot empty
    ///
    /// Intended to be polled once per refresh tick.
    pub fn take_result(&self) -> Option<SolveReport> {
        lock(&self.shared.published).take()
    }

    /// Whether a worker is currently running
    pub fn is_busy(&self) -> bool {
        lock(&self.shared.mailbox).worker_active
    }

    /// Snapshot of the request counters
    pub fn stats(&self) -> OrchestratorStats {
        lock(&self.shared.mailbox).stats
    }

    /// Block until no worker is running
    ///
    /// Never call this from an interactive path; it exists for shutdown and tests.
    pub fn wait_idle(&self) {
        let mut mailbox = lock(&self.shared.mailbox);
        while mailbox.worker_active {
            mailbox = self
                .shared
                .idle
                .wait(mailbox)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Block until no worker is running or `timeout` elapses
    ///
    /// Returns true if the worker went idle in time.
    pub fn wait_idle_timeout(&self, timeout: Duration) -> bool {
        let guard = lock(&self.shared.mailbox);
        let (guard, _timed_out) = self
            .shared
            .idle
            .wait_timeout_while(guard, timeout, |mailbox| mailbox.worker_active)
            .unwrap_or_else(PoisonError::into_inner);
        !guard.worker_active
    }
}

/// Clears the active flag if the solver panics, so later requests start a new worker
struct ActiveGuard<'a, S> {
    shared: &'a Shared<S>,
}

impl<S> Drop for ActiveGuard<'_, S> {
    fn drop(&mut self) {
        if thread::panicking() {
            let mut mailbox = lock(&self.shared.mailbox);
            mailbox.worker_active = false;
            self.shared.idle.notify_all();
        }
    }
}

fn run_worker<S: SnapshotSolver>(shared: &Shared<S>) {
    let _guard = ActiveGuard { shared };

    let mut job = {
        let mut mailbox = lock(&shared.mailbox);
        if let Some(job) = mailbox.pending.take() {
            mailbox.stats.started += 1;
            job
        } else {
            mailbox.worker_active = false;
            shared.idle.notify_all();
            return;
        }
    };

    loop {
        let outcome = shared.solver.solve_snapshot(&job.snapshot);
        if let Err(error) = &outcome {
            warn!("Solve for request {} failed: {error}", job.request_id);
        }

        let mut mailbox = lock(&shared.mailbox);
        if let Some(next) = mailbox.pending.take() {
            mailbox.stats.discarded += 1;
            mailbox.stats.started += 1;
            trace!(
                "Discarding result of request {}, request {} is waiting",
                job.request_id, next.request_id
            );
            drop(mailbox);
            job = next;
            continue;
        }

        *lock(&shared.published) = Some(SolveReport {
            request_id: job.request_id,
            outcome,
        });
        mailbox.stats.published += 1;
        mailbox.worker_active = false;
        shared.idle.notify_all();
        return;
    }
}
