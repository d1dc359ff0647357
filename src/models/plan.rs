//! Seek plan (solution) model.
//!
//! A seek plan is the complete answer to one SCAN solve: the ordered
//! head movements, the starting position, and enough bookkeeping to
//! reconstruct the total movement by hand.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};

use super::{SeekStep, StepKind, Track};

/// A complete seek plan (solution to a SCAN scheduling problem).
///
/// Contains the head's starting track, every movement in service
/// order, and the count of requests that coincided with the head and
/// were serviced in place at zero cost (not separately listed).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeekPlan {
    /// Starting head position.
    pub head: Track,
    /// Head movements in service order.
    pub steps: Vec<SeekStep>,
    /// Requests equal to the starting head, serviced without movement.
    pub serviced_at_head: usize,
}

impl SeekPlan {
    /// Creates an empty plan for a head that never moves.
    pub fn new(head: Track) -> Self {
        Self {
            head,
            steps: Vec::new(),
            serviced_at_head: 0,
        }
    }

    /// Appends a step.
    pub fn add_step(&mut self, step: SeekStep) {
        self.steps.push(step);
    }

    /// Visited tracks in order, starting with the initial head
    /// position. Boundary tracks are included when a sweep occurred.
    pub fn sequence(&self) -> Vec<Track> {
        let mut seq = Vec::with_capacity(1 + self.steps.len());
        seq.push(self.head);
        seq.extend(self.steps.iter().map(|s| s.to));
        seq
    }

    /// Total head movement: sum of all step distances.
    pub fn total_movement(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.distance())).sum()
    }

    /// Arithmetic trace: each step as `(max - min) = distance`, joined
    /// with ` + ` so the total can be reconstructed by hand. Empty
    /// string when the head never moved.
    pub fn trace(&self) -> String {
        self.steps
            .iter()
            .map(SeekStep::trace_term)
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Number of steps that service a request (excludes boundary sweeps).
    pub fn service_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == StepKind::Service)
            .count()
    }

    /// Number of boundary-sweep steps (0 or 1 for SCAN).
    pub fn boundary_sweeps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == StepKind::BoundarySweep)
            .count()
    }

    /// Total number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Final head position after all movements.
    pub fn final_position(&self) -> Track {
        self.steps.last().map_or(self.head, |s| s.to)
    }
}
