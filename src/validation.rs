//! Input validation for simulation runs.
//!
//! Checks the process list before any policy runs. Detects:
//! - Duplicate IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Negative priorities
//! - Timelines too long for the `i64` clock
//!
//! The policies assume these hold. A zero burst would otherwise stall the
//! reference round-robin loop, and duplicate ids make completion records
//! ambiguous.

use std::collections::HashSet;

use crate::error::Error;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process id.
    pub process_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is before t=0.
    NegativeArrival,
    /// Priority value is below zero.
    NegativePriority,
    /// Latest arrival plus total burst does not fit the simulation clock.
    HorizonOverflow,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        process_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id: process_id.into(),
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// All checks run to completion so that every problem is reported at once.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &p.id,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                &p.id,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                &p.id,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                &p.id,
                format!("Process '{}' has negative priority {}", p.id, p.priority),
            ));
        }
    }

    if let Some(err) = check_horizon(processes) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that `max(arrival) + Σ burst` fits in an `i64`.
///
/// No clock value, completion time or turnaround in any policy exceeds that
/// bound, so the schedulers can use plain arithmetic.
fn check_horizon(processes: &[Process]) -> Option<ValidationError> {
    let mut horizon = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);

    for p in processes.iter().filter(|p| p.burst_time > 0) {
        match horizon.checked_add(p.burst_time) {
            Some(next) => horizon = next,
            None => {
                return Some(ValidationError::new(
                    ValidationErrorKind::HorizonOverflow,
                    &p.id,
                    format!(
                        "Process '{}' pushes the simulated timeline past {}",
                        p.id,
                        i64::MAX
                    ),
                ))
            }
        }
    }
    None
}

/// Validates a process list, converting failures into [`Error::InvalidInput`].
pub fn ensure_valid(processes: &[Process]) -> crate::Result<()> {
    validate_processes(processes).map_err(|errors| {
        tracing::warn!(count = errors.len(), "rejected process list");
        Error::InvalidInput(errors)
    })
}
