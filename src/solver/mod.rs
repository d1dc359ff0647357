//! SCAN solver and plan evaluation.
//!
//! `ScanSolver` computes the elevator service order for a request set;
//! `SeekKpi` summarizes a finished plan.
//!
//! # Algorithm
//!
//! SCAN partitions pending requests around the head, services the side
//! selected by [`Direction`](crate::models::Direction) in
//! nearest-first order, sweeps to the disk edge, then services the
//! other side on the way back. The sweep to the edge is mandatory:
//! the head reaches the boundary before reversing even when no request
//! lies there.
//!
//! # Observation
//!
//! The solver is silent by default. Install a [`SeekObserver`] to
//! watch each step as it is planned (e.g. for step-by-step teaching
//! output); observation never alters the plan.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod kpi;
mod scan;

pub use kpi::SeekKpi;
pub use scan::{ScanSolver, SolveRequest};

use crate::models::SeekStep;
use std::fmt::Debug;

/// A callback invoked for every step the solver plans, in order.
///
/// Observers receive the step and the running movement total after
/// that step. They are diagnostic only: the solver's output does not
/// depend on them.
pub trait SeekObserver: Send + Sync {
    /// Called once per planned step, in service order.
    fn on_step(&self, step: &SeekStep, total_so_far: u64);
}

impl<F> SeekObserver for F
where
    F: Fn(&SeekStep, u64) + Send + Sync,
{
    fn on_step(&self, step: &SeekStep, total_so_far: u64) {
        self(step, total_so_far);
    }
}

impl Debug for dyn SeekObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SeekObserver")
    }
}
