//! Sweep direction model.
//!
//! SCAN services requests on one side of the head first, sweeps to the
//! disk edge, then reverses. `Direction` selects which side goes first.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the head the sweep services first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Sweep toward higher track numbers first (boundary: `disk_bound`).
    TowardLarger,
    /// Sweep toward lower track numbers first (boundary: track 0).
    TowardSmaller,
}

impl Direction {
    /// The opposite direction, taken after the boundary sweep.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::TowardLarger => Direction::TowardSmaller,
            Direction::TowardSmaller => Direction::TowardLarger,
        }
    }

    /// The boundary track the head reaches before reversing.
    #[inline]
    pub fn boundary(self, disk_bound: u32) -> u32 {
        match self {
            Direction::TowardLarger => disk_bound,
            Direction::TowardSmaller => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TowardLarger => write!(f, "toward-larger"),
            Direction::TowardSmaller => write!(f, "toward-smaller"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::TowardLarger.reversed(), Direction::TowardSmaller);
        assert_eq!(Direction::TowardSmaller.reversed(), Direction::TowardLarger);
    }

    #[test]
    fn test_boundary() {
        assert_eq!(Direction::TowardLarger.boundary(199), 199);
        assert_eq!(Direction::TowardSmaller.boundary(199), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::TowardLarger.to_string(), "toward-larger");
        assert_eq!(Direction::TowardSmaller.to_string(), "toward-smaller");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Direction::TowardLarger).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::TowardLarger);
    }
}
