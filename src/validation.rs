//! Input validation for process sets.
//!
//! Schedulers assume well-formed input. This module checks it up front
//! and reports every problem at once:
//! - Duplicate process IDs
//! - Non-positive bursts
//! - Negative arrival times

use crate::models::Process;
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID.
    pub pid: i64,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs no CPU time (or a negative amount).
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, pid: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            pid,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst is > 0
/// 3. Every arrival is >= 0
///
/// An empty set is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues,
/// in input order.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                p.id,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.id,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
