//! Educational SCAN ("elevator") disk-scheduling simulator.
//!
//! Given a set of pending track requests, a starting head position, a
//! sweep direction, and the disk's highest track, computes the order
//! in which requests are serviced, the total head movement, and an
//! arithmetic trace that lets a student verify the total by hand.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Track`, `Direction`, `SeekStep`,
//!   `StepKind`, `SeekPlan`
//! - **`solver`**: `ScanSolver`, `SolveRequest`, `SeekKpi`, and the
//!   `SeekObserver` step callback
//! - **`validation`**: Caller-side range checks (the solver itself is
//!   total and never rejects input)
//! - **`workload`**: Seeded random request-set generation for
//!   exercises and property tests
//!
//! # Example
//!
//! ```
//! use disk_scan::models::Direction;
//! use disk_scan::solver::{ScanSolver, SeekKpi};
//!
//! let solver = ScanSolver::new();
//! let plan = solver.solve(&[82, 170, 43, 140, 24, 16, 190], 50, Direction::TowardLarger, 199);
//!
//! assert_eq!(plan.sequence(), vec![50, 82, 140, 170, 190, 199, 43, 24, 16]);
//! assert_eq!(SeekKpi::calculate(&plan).total_movement, 332);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11: Mass-Storage Structure
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

pub mod models;
pub mod solver;
pub mod validation;
pub mod workload;
