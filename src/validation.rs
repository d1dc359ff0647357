//! Input validation for SCAN problems.
//!
//! Checks range integrity of a request set before solving. The solver
//! itself is total and never rejects input; these checks belong to the
//! caller (e.g. a form layer parsing free text) and are offered here
//! so every caller applies the same policy. Detects:
//! - A zero disk bound
//! - A head position beyond the disk bound
//! - Request tracks beyond the disk bound

use crate::models::Track;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The disk bound is zero; a disk needs more than one track.
    InvalidDiskBound,
    /// The head starts beyond the highest addressable track.
    HeadOutOfRange,
    /// A request addresses a track beyond the disk bound.
    RequestOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a SCAN problem.
///
/// Checks:
/// 1. `disk_bound` is positive
/// 2. `head` lies in `[0, disk_bound]`
/// 3. Every request lies in `[0, disk_bound]`
///
/// All issues are collected; nothing short-circuits.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(requests: &[Track], head: Track, disk_bound: Track) -> ValidationResult {
    let mut errors = Vec::new();

    if disk_bound == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDiskBound,
            "Disk bound must be positive",
        ));
    }

    if head > disk_bound {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!("Head position {head} exceeds disk bound {disk_bound}"),
        ));
    }

    for (index, &track) in requests.iter().enumerate() {
        if track > disk_bound {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestOutOfRange,
                format!("Request #{index} (track {track}) exceeds disk bound {disk_bound}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
