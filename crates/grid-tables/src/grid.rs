//! Named bundles of coordinate axes sharing a resolution.

use crate::axis::{CoordinateAxis, FULL_CIRCLE};
use crate::error::{GridTableError, Result, Violation};
use crate::types::{AxisKind, Coverage, Dimension, Direction, InterpolationWeights};
use crate::validate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// All center and edge axes for one resolution identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDefinition {
    name: String,
    description: String,
    coverage: Coverage,
    axes: BTreeMap<(Dimension, AxisKind), CoordinateAxis>,
}

impl GridDefinition {
    /// Create an empty grid definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>, coverage: Coverage) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            coverage,
            axes: BTreeMap::new(),
        }
    }

    /// Add an axis, replacing any previous axis with the same dimension and kind.
    pub fn with_axis(mut self, axis: CoordinateAxis) -> Self {
        self.axes.insert((axis.dimension(), axis.kind()), axis);
        self
    }

    /// Add a center/edge pair along one dimension.
    pub fn with_pair(
        self,
        dimension: Dimension,
        direction: Direction,
        centers: impl Into<Arc<[f64]>>,
        edges: impl Into<Arc<[f64]>>,
    ) -> Self {
        let name = self.name.clone();
        self.with_axis(CoordinateAxis::new(name.clone(), dimension, AxisKind::Center, direction, centers))
            .with_axis(CoordinateAxis::new(name, dimension, AxisKind::Edge, direction, edges))
    }

    /// Add an ascending longitude pair that wraps modulo 360°.
    pub fn with_periodic_longitude(
        self,
        centers: impl Into<Arc<[f64]>>,
        edges: impl Into<Arc<[f64]>>,
    ) -> Self {
        let name = self.name.clone();
        let dim = Dimension::Longitude;
        let dir = Direction::Ascending;
        self.with_axis(CoordinateAxis::new(name.clone(), dim, AxisKind::Center, dir, centers).periodic())
            .with_axis(CoordinateAxis::new(name, dim, AxisKind::Edge, dir, edges).periodic())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// Look up an axis by dimension and kind.
    pub fn axis(&self, dimension: Dimension, kind: AxisKind) -> Result<&CoordinateAxis> {
        self.axes
            .get(&(dimension, kind))
            .ok_or_else(|| {
                debug!(resolution = %self.name, dimension = %dimension, kind = %kind, "Unknown axis requested");
                GridTableError::unknown_axis(&self.name, dimension, kind)
            })
    }

    /// Iterate over all axes in (dimension, kind) order.
    pub fn axes(&self) -> impl Iterator<Item = &CoordinateAxis> {
        self.axes.values()
    }

    /// Dimensions with at least one axis, in declaration order of [`Dimension`].
    pub fn dimensions(&self) -> Vec<Dimension> {
        let mut dims: Vec<Dimension> = self.axes.keys().map(|(dim, _)| *dim).collect();
        dims.dedup();
        dims
    }

    pub fn has_dimension(&self, dimension: Dimension) -> bool {
        self.axes.keys().any(|(dim, _)| *dim == dimension)
    }

    /// Number of cells along each dimension that has centers.
    pub fn shape(&self) -> Vec<(Dimension, usize)> {
        self.axes
            .iter()
            .filter(|((_, kind), _)| *kind == AxisKind::Center)
            .map(|((dim, _), axis)| (*dim, axis.len()))
            .collect()
    }

    /// Edge-defined domain of a dimension as `(min, max)`.
    pub fn domain(&self, dimension: Dimension) -> Result<(f64, f64)> {
        let edges = self.axis(dimension, AxisKind::Edge)?;
        match (edges.min(), edges.max()) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Err(GridTableError::unknown_axis(&self.name, dimension, AxisKind::Edge)),
        }
    }

    /// Bring `value` into the edge domain of `dimension`.
    ///
    /// Periodic axes fold the value into `[first_edge, first_edge + 360)`;
    /// every other axis rejects values outside `[min_edge, max_edge]`.
    pub fn normalize(&self, dimension: Dimension, value: f64) -> Result<f64> {
        let edges = self.axis(dimension, AxisKind::Edge)?;
        let domain = self.domain(dimension)?;
        let out_of_range = || {
            debug!(
                resolution = %self.name,
                dimension = %dimension,
                value,
                min = domain.0,
                max = domain.1,
                "Coordinate outside grid domain"
            );
            GridTableError::out_of_range(&self.name, dimension, value, domain)
        };

        if !value.is_finite() {
            return Err(out_of_range());
        }

        if edges.is_periodic() {
            return Ok(CoordinateAxis::wrap_into(value, domain.0));
        }

        if value < domain.0 || value > domain.1 {
            return Err(out_of_range());
        }
        Ok(value)
    }

    /// Index of the center closest to `value`; exact ties resolve to the lower index.
    pub fn nearest_center_index(&self, dimension: Dimension, value: f64) -> Result<usize> {
        let value = self.normalize(dimension, value)?;
        let centers = self.axis(dimension, AxisKind::Center)?;
        centers
            .nearest_index(value)
            .ok_or_else(|| GridTableError::unknown_axis(&self.name, dimension, AxisKind::Center))
    }

    /// Bounding edges of cell `index` in axis order, `(edges[i], edges[i + 1])`.
    ///
    /// For vertical tables this is (bottom, top) of the layer.
    pub fn cell_bounds(&self, dimension: Dimension, index: isize) -> Result<(f64, f64)> {
        let centers = self.axis(dimension, AxisKind::Center)?;
        let edges = self.axis(dimension, AxisKind::Edge)?;

        let len = centers.len();
        let out_of_range = || {
            debug!(resolution = %self.name, dimension = %dimension, index, len, "Cell index out of range");
            GridTableError::index_out_of_range(&self.name, dimension, index, len)
        };

        let i = usize::try_from(index).map_err(|_| out_of_range())?;
        if i >= len {
            return Err(out_of_range());
        }

        match (edges.get(i), edges.get(i + 1)) {
            (Some(lower), Some(upper)) => Ok((lower, upper)),
            _ => Err(out_of_range()),
        }
    }

    /// Linear weights between the two centers that bracket `value`.
    pub fn interpolation_weights(&self, dimension: Dimension, value: f64) -> Result<InterpolationWeights> {
        let value = self.normalize(dimension, value)?;
        let centers = self.axis(dimension, AxisKind::Center)?;
        let c = centers.values();
        let n = c.len();
        if n == 0 {
            return Err(GridTableError::unknown_axis(&self.name, dimension, AxisKind::Center));
        }

        let pos = centers.partition_point(value);

        if pos > 0 && pos < n {
            let (lo, hi) = (c[pos - 1], c[pos]);
            return Ok(InterpolationWeights {
                lower: pos - 1,
                upper: pos,
                weight: (value - lo) / (hi - lo),
            });
        }

        if centers.is_periodic() && n > 1 {
            // Between the last center and the first one shifted by a full turn.
            let lo = c[n - 1];
            let hi = c[0] + FULL_CIRCLE;
            let v = if pos == 0 { value + FULL_CIRCLE } else { value };
            return Ok(InterpolationWeights {
                lower: n - 1,
                upper: 0,
                weight: (v - lo) / (hi - lo),
            });
        }

        let index = if pos == 0 { 0 } else { n - 1 };
        Ok(InterpolationWeights {
            lower: index,
            upper: index,
            weight: 0.0,
        })
    }

    /// Nearest (longitude, latitude) center indices for a horizontal point.
    pub fn locate(&self, lon: f64, lat: f64) -> Result<(usize, usize)> {
        let i = self.nearest_center_index(Dimension::Longitude, lon)?;
        let j = self.nearest_center_index(Dimension::Latitude, lat)?;
        Ok((i, j))
    }

    /// Check every table invariant, collecting all violations.
    pub fn validate(&self, tolerance: f64) -> Vec<Violation> {
        validate::check_grid(self, tolerance)
    }
}
