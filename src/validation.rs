//! Input validation for simulation runs.
//!
//! Checks the process set and quantum before any simulation state is
//! created. Detects:
//! - Empty process sets
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose clock could run past `i64::MAX`
//! - Non-positive quantum (Round-Robin only)
//!
//! Every problem is reported, not just the first.

use std::collections::HashSet;
use std::fmt;

use crate::dispatching::Policy;
use crate::models::ProcessSpec;

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
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time.
    NonPositiveBurst,
    /// Latest arrival plus total burst time does not fit in `i64`.
    TimeOverflow,
    /// Round-Robin was requested with a quantum below 1.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failure of a simulation call.
///
/// Raised before the run starts; a run that passes validation always
/// produces a complete result.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set or quantum is malformed.
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// The individual validation problems.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid input: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

/// Validates a simulation request.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. All arrival times ≥ 0
/// 4. All burst times ≥ 1
/// 5. Latest arrival + sum of bursts ≤ `i64::MAX` (bounds the clock)
/// 6. Quantum ≥ 1 when `policy` is Round-Robin (ignored otherwise)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(specs: &[ProcessSpec], policy: Policy, quantum: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if specs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for spec in specs {
        if !ids.insert(spec.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", spec.id),
            ));
        }

        if spec.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    spec.id, spec.arrival_time
                ),
            ));
        }

        if spec.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    spec.id, spec.burst_time
                ),
            ));
        }
    }

    let latest_arrival = specs.iter().map(|s| s.arrival_time).max().unwrap_or(0);
    let horizon = specs
        .iter()
        .try_fold(latest_arrival.max(0), |acc, s| acc.checked_add(s.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times overflow the simulation clock",
        ));
    }

    if policy.uses_quantum() && quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("{policy} requires a positive quantum, got {quantum}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
