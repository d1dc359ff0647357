//! Seek step model.
//!
//! A seek step is one atomic head movement: from one track to another,
//! either to service a request or to complete the mandatory sweep to
//! the disk edge before reversing.

use serde::{Deserialize, Serialize};

use super::Track;

/// One atomic head movement.
///
/// Distance is derived, never stored, so `distance() == |to - from|`
/// holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekStep {
    /// Track the head moves from.
    pub from: Track,
    /// Track the head moves to.
    pub to: Track,
    /// Why this movement happens.
    pub kind: StepKind,
}

/// Classification of a seek step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Movement to a requested track.
    Service,
    /// Mandatory movement to the disk edge before reversing.
    BoundarySweep,
}

impl SeekStep {
    /// Creates a service step.
    pub fn service(from: Track, to: Track) -> Self {
        Self {
            from,
            to,
            kind: StepKind::Service,
        }
    }

    /// Creates a boundary-sweep step.
    pub fn boundary_sweep(from: Track, to: Track) -> Self {
        Self {
            from,
            to,
            kind: StepKind::BoundarySweep,
        }
    }

    /// Seek distance: absolute difference between the two tracks.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.from.abs_diff(self.to)
    }

    /// Formats this step's contribution to the arithmetic trace,
    /// e.g. `(82 - 50) = 32`.
    pub fn trace_term(&self) -> String {
        let hi = self.from.max(self.to);
        let lo = self.from.min(self.to);
        format!("({hi} - {lo}) = {}", self.distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_absolute() {
        assert_eq!(SeekStep::service(50, 82).distance(), 32);
        assert_eq!(SeekStep::service(199, 43).distance(), 156);
        assert_eq!(SeekStep::service(10, 10).distance(), 0);
    }

    #[test]
    fn test_trace_term_orders_operands() {
        // Larger operand always first, regardless of travel direction
        assert_eq!(SeekStep::service(50, 82).trace_term(), "(82 - 50) = 32");
        assert_eq!(SeekStep::service(199, 43).trace_term(), "(199 - 43) = 156");
    }

    #[test]
    fn test_step_kinds() {
        assert_eq!(SeekStep::service(0, 1).kind, StepKind::Service);
        assert_eq!(
            SeekStep::boundary_sweep(190, 199).kind,
            StepKind::BoundarySweep
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let step = SeekStep::boundary_sweep(190, 199);
        let json = serde_json::to_string(&step).unwrap();
        let back: SeekStep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
