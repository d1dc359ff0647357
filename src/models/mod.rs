//! Disk-scheduling domain models.
//!
//! Provides the core data types for representing SCAN problems and
//! solutions. All entities are transient value types: a solve
//! constructs them fresh and holds no state across calls.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Track` | Integer address on the simulated disk, in `[0, disk_bound]` |
//! | `Direction` | Which side of the head the sweep services first |
//! | `SeekStep` | One atomic head movement (from, to, kind) |
//! | `SeekPlan` | Ordered movements + total-movement and trace accessors |

mod direction;
mod plan;
mod seek;

pub use direction::Direction;
pub use plan::SeekPlan;
pub use seek::{SeekStep, StepKind};

/// An integer track address on the simulated disk.
pub type Track = u32;
