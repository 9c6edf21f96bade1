//! One-dimensional coordinate axes.

use crate::types::{AxisKind, Dimension, Direction};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Full circle in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// An immutable, strictly monotonic sequence of centers or edges.
///
/// Values live behind an `Arc<[f64]>`, so clones share the same table and
/// no handle can mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateAxis {
    /// Resolution identifier this axis belongs to.
    name: String,
    dimension: Dimension,
    kind: AxisKind,
    direction: Direction,
    /// Longitude axes covering the whole circle wrap modulo 360°.
    periodic: bool,
    values: Arc<[f64]>,
}

impl CoordinateAxis {
    /// Create a new axis with a declared direction.
    pub fn new(
        name: impl Into<String>,
        dimension: Dimension,
        kind: AxisKind,
        direction: Direction,
        values: impl Into<Arc<[f64]>>,
    ) -> Self {
        Self {
            name: name.into(),
            dimension,
            kind,
            direction,
            periodic: false,
            values: values.into(),
        }
    }

    /// Flag this axis as wrapping around modulo 360°.
    pub fn periodic(mut self) -> Self {
        self.periodic = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Read-only view of the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Smallest value, regardless of direction.
    pub fn min(&self) -> Option<f64> {
        match self.direction {
            Direction::Ascending => self.first(),
            Direction::Descending => self.last(),
        }
    }

    /// Largest value, regardless of direction.
    pub fn max(&self) -> Option<f64> {
        match self.direction {
            Direction::Ascending => self.last(),
            Direction::Descending => self.first(),
        }
    }

    /// Distance between the outermost values.
    pub fn span(&self) -> f64 {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => max - min,
            _ => 0.0,
        }
    }

    /// Check that every consecutive pair follows the declared direction.
    pub fn is_strictly_monotonic(&self) -> bool {
        self.values
            .windows(2)
            .all(|pair| self.direction.is_ordered(pair[0], pair[1]))
    }

    /// Number of values that come strictly before `value` in axis order.
    ///
    /// Binary search; relies on the axis being strictly monotonic.
    pub fn partition_point(&self, value: f64) -> usize {
        self.values
            .partition_point(|&v| self.direction.is_ordered(v, value))
    }

    /// Index of the value closest to `value`, ties resolved toward the lower index.
    ///
    /// Returns `None` on an empty axis. No domain check is applied here.
    pub fn nearest_index(&self, value: f64) -> Option<usize> {
        if self.values.is_empty() {
            return None;
        }

        let pos = self.partition_point(value);
        if pos == 0 {
            return Some(0);
        }
        if pos == self.values.len() {
            return Some(pos - 1);
        }

        let below = (value - self.values[pos - 1]).abs();
        let above = (self.values[pos] - value).abs();
        if above < below {
            Some(pos)
        } else {
            Some(pos - 1)
        }
    }

    /// Fold `value` into `[start, start + 360)`.
    pub fn wrap_into(value: f64, start: f64) -> f64 {
        start + (value - start).rem_euclid(FULL_CIRCLE)
    }
}
