//! SCAN (elevator) seek planner.
//!
//! # Algorithm
//!
//! 1. Partition requests around the head: strictly-below ("low") and
//!    strictly-above ("high"). Requests already at the head are
//!    serviced in place with zero cost.
//! 2. Sort low descending and high ascending (nearest-to-head first).
//! 3. Service the group on the chosen side, sweep to that side's disk
//!    edge unless the head already sits there, then service the other
//!    group on the way back.
//!
//! # Complexity
//! O(n log n) in the number of requests (two sorts), O(n) traversal.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::SeekObserver;
use crate::models::{Direction, SeekPlan, SeekStep, Track};

/// Input container for one solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Pending track requests. Order is irrelevant; duplicates are
    /// serviced once per occurrence.
    pub requests: Vec<Track>,
    /// Starting head position.
    pub head: Track,
    /// Side of the head serviced first.
    pub direction: Direction,
    /// Highest addressable track; the lower edge is always 0.
    pub disk_bound: Track,
}

impl SolveRequest {
    /// Creates a request with head 0, sweeping toward larger tracks.
    pub fn new(requests: Vec<Track>, disk_bound: Track) -> Self {
        Self {
            requests,
            head: 0,
            direction: Direction::TowardLarger,
            disk_bound,
        }
    }

    /// Sets the starting head position.
    pub fn with_head(mut self, head: Track) -> Self {
        self.head = head;
        self
    }

    /// Sets the initial sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// SCAN seek planner.
///
/// Stateless and referentially transparent: identical inputs always
/// produce identical plans. The solver does not validate its inputs
/// (see [`validation`](crate::validation)); out-of-range tracks are
/// still planned with well-defined distance arithmetic.
///
/// # Example
///
/// ```
/// use disk_scan::models::Direction;
/// use disk_scan::solver::ScanSolver;
///
/// let solver = ScanSolver::new();
/// let plan = solver.solve(&[82, 170, 43, 140, 24, 16, 190], 50, Direction::TowardLarger, 199);
///
/// assert_eq!(plan.sequence(), vec![50, 82, 140, 170, 190, 199, 43, 24, 16]);
/// assert_eq!(plan.total_movement(), 332);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScanSolver {
    observer: Option<Arc<dyn SeekObserver>>,
}

impl ScanSolver {
    /// Creates a silent solver.
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Installs a step observer.
    ///
    /// The observer sees every planned step in service order; it never
    /// affects the resulting plan.
    pub fn with_observer<O: SeekObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Computes the SCAN service order.
    ///
    /// # Algorithm
    /// 1. Partition requests into low (< head) and high (> head);
    ///    count at-head requests as serviced in place.
    /// 2. Service the group on the `direction` side nearest-first.
    /// 3. Sweep to that side's edge unless already there, provided any
    ///    request required travel at all.
    /// 4. Service the opposite group nearest-first on the way back.
    pub fn solve(
        &self,
        requests: &[Track],
        head: Track,
        direction: Direction,
        disk_bound: Track,
    ) -> SeekPlan {
        let mut plan = SeekPlan::new(head);
        let mut low: Vec<Track> = Vec::new();
        let mut high: Vec<Track> = Vec::new();

        for &track in requests {
            match track.cmp(&head) {
                Ordering::Less => low.push(track),
                Ordering::Greater => high.push(track),
                Ordering::Equal => plan.serviced_at_head += 1,
            }
        }

        // Nothing requires travel: the head stays put, no sweep.
        if low.is_empty() && high.is_empty() {
            return plan;
        }

        low.sort_unstable_by(|a, b| b.cmp(a));
        high.sort_unstable();

        let boundary = direction.boundary(disk_bound);
        let (first, second) = match direction {
            Direction::TowardLarger => (high, low),
            Direction::TowardSmaller => (low, high),
        };

        let mut position = head;
        let mut total: u64 = 0;

        for track in first {
            position = self.emit(&mut plan, SeekStep::service(position, track), &mut total);
        }

        // The elevator reaches the disk edge before reversing, even
        // when no request lies there (and even when the first group
        // was empty), unless it already sits on the edge.
        if position != boundary {
            position = self.emit(
                &mut plan,
                SeekStep::boundary_sweep(position, boundary),
                &mut total,
            );
        }

        for track in second {
            position = self.emit(&mut plan, SeekStep::service(position, track), &mut total);
        }

        plan
    }

    /// Solves from a request container.
    pub fn solve_request(&self, request: &SolveRequest) -> SeekPlan {
        self.solve(
            &request.requests,
            request.head,
            request.direction,
            request.disk_bound,
        )
    }

    fn emit(&self, plan: &mut SeekPlan, step: SeekStep, total: &mut u64) -> Track {
        *total += u64::from(step.distance());
        if let Some(ref observer) = self.observer {
            observer.on_step(&step, *total);
        }
        plan.add_step(step);
        step.to
    }
}
