//! Error types for grid table access.

use crate::types::{AxisKind, Dimension};
use std::fmt;
use thiserror::Error;

/// Errors returned by registry lookups, derived queries and validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridTableError {
    /// The resolution identifier is not registered.
    #[error("unknown grid: {0}")]
    UnknownGrid(String),

    /// The resolution exists but does not define this dimension/kind.
    #[error("grid '{resolution}' has no {dimension} {kind} axis")]
    UnknownAxis {
        resolution: String,
        dimension: Dimension,
        kind: AxisKind,
    },

    /// A query value lies outside the edge-defined domain of a non-periodic axis.
    #[error("value {value} is outside the {dimension} domain [{min}, {max}] of grid '{resolution}'")]
    OutOfRange {
        resolution: String,
        dimension: Dimension,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A cell index lies outside `[0, len)`.
    #[error("index {index} is outside [0, {len}) for {dimension} of grid '{resolution}'")]
    IndexOutOfRange {
        resolution: String,
        dimension: Dimension,
        index: isize,
        len: usize,
    },

    /// One or more table invariants do not hold.
    #[error("{} grid consistency violation(s): {}", .0.len(), join_violations(.0))]
    GridConsistency(Vec<Violation>),

    /// A grid with this name was already registered.
    #[error("grid already registered: {0}")]
    DuplicateGrid(String),

    /// A dimension or axis-kind tag could not be parsed.
    #[error("invalid {tag} tag: '{value}'")]
    InvalidTag { tag: &'static str, value: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GridTableError {
    /// Create an UnknownGrid error.
    pub fn unknown_grid(name: impl Into<String>) -> Self {
        Self::UnknownGrid(name.into())
    }

    /// Create an UnknownAxis error.
    pub fn unknown_axis(resolution: impl Into<String>, dimension: Dimension, kind: AxisKind) -> Self {
        Self::UnknownAxis {
            resolution: resolution.into(),
            dimension,
            kind,
        }
    }

    /// Create an OutOfRange error.
    pub fn out_of_range(
        resolution: impl Into<String>,
        dimension: Dimension,
        value: f64,
        (min, max): (f64, f64),
    ) -> Self {
        Self::OutOfRange {
            resolution: resolution.into(),
            dimension,
            value,
            min,
            max,
        }
    }

    /// Create an IndexOutOfRange error.
    pub fn index_out_of_range(
        resolution: impl Into<String>,
        dimension: Dimension,
        index: isize,
        len: usize,
    ) -> Self {
        Self::IndexOutOfRange {
            resolution: resolution.into(),
            dimension,
            index,
            len,
        }
    }

    /// Create an InvalidTag error.
    pub fn invalid_tag(tag: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidTag {
            tag,
            value: value.into(),
        }
    }

    /// Violations carried by a GridConsistency error, empty for every other kind.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::GridConsistency(violations) => violations,
            _ => &[],
        }
    }
}

/// A single invariant violation found by validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Resolution identifier of the offending grid.
    pub resolution: String,
    /// Offending dimension.
    pub dimension: Dimension,
    /// Human-readable description of what is wrong.
    pub message: String,
}

impl Violation {
    pub fn new(resolution: impl Into<String>, dimension: Dimension, message: impl Into<String>) -> Self {
        Self {
            resolution: resolution.into(),
            dimension,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.resolution, self.dimension, self.message)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for grid table operations.
pub type Result<T> = std::result::Result<T, GridTableError>;
