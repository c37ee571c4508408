//! Schedule integrity checks.
//!
//! Surfaces the data invariants that layout otherwise trips over late:
//! - Duplicate resource names (break tick lookup)
//! - Jobs referencing resources missing from the resource list
//!
//! Validation is advisory — construction never enforces these — but
//! running it before layout turns a mid-render
//! [`LayoutError`](crate::layout::LayoutError) into an upfront report
//! of every problem at once.

use std::collections::HashSet;

use crate::models::Schedule;

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
    /// Two resources share the same name.
    DuplicateResource,
    /// A job references a resource that doesn't exist.
    UnknownResourceReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule's structural integrity.
///
/// Checks:
/// 1. No duplicate resource names
/// 2. Every job's resource appears in the resource list
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    let mut errors = Vec::new();

    let mut resource_names = HashSet::new();
    for name in &schedule.resources {
        if !resource_names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateResource,
                format!("Duplicate resource name: {name}"),
            ));
        }
    }

    for job in &schedule.jobs {
        if !resource_names.contains(job.resource.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownResourceReference,
                format!(
                    "Job '{}' references unknown resource '{}'",
                    job.name, job.resource
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
