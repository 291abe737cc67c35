//! Fee Calculation Errors

use std::fmt;
use thiserror::Error;

/// The injected fee-schedule lookup failed (backend or network error)
///
/// Distinct from a confirmed no-match: a failure is propagated unchanged and
/// never triggers the fallback structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("fee schedule lookup unavailable: {0}")]
pub struct LookupError(pub String);

impl LookupError {
    /// Wrap a backend error message
    pub fn backend(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// What is wrong with a single parameter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    /// Required field was not supplied
    Missing,
    /// Field was supplied but out of range
    OutOfRange(&'static str),
}

/// One offending parameter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name as it appears on `FeeParameters`
    pub field: &'static str,
    /// What is wrong with it
    pub problem: FieldProblem,
}

impl FieldIssue {
    /// A required field that was not supplied
    pub const fn missing(field: &'static str) -> Self {
        Self {
            field,
            problem: FieldProblem::Missing,
        }
    }

    /// A field that was supplied but out of range
    pub const fn out_of_range(field: &'static str, reason: &'static str) -> Self {
        Self {
            field,
            problem: FieldProblem::OutOfRange(reason),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field),
            FieldProblem::OutOfRange(reason) => write!(f, "{} {}", self.field, reason),
        }
    }
}

/// Error during fee calculation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// Required parameters missing or out of range; raised before any
    /// lookup or arithmetic
    #[error("invalid fee parameters: {}", format_issues(.issues))]
    Validation {
        /// Every offending field, in declaration order
        issues: Vec<FieldIssue>,
    },

    /// The injected lookup capability failed
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl FeeError {
    /// Build a validation error from a non-empty issue list
    pub fn validation(issues: Vec<FieldIssue>) -> Self {
        FeeError::Validation { issues }
    }

    /// Names of the offending fields, if this is a validation error
    pub fn offending_fields(&self) -> Vec<&'static str> {
        match self {
            FeeError::Validation { issues } => issues.iter().map(|i| i.field).collect(),
            FeeError::Lookup(_) => Vec::new(),
        }
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for fee operations
pub type FeeResult<T> = Result<T, FeeError>;
