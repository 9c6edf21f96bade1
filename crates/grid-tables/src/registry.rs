//! The grid table registry.
//!
//! A registry is assembled once through [`RegistryBuilder`] and is immutable
//! afterwards, so a shared reference can be read from any number of threads.
//! Extending a registry means starting a new builder from it with
//! [`GridTableRegistry::to_builder`] and publishing a fresh registry; readers
//! of the old one never observe a partially registered grid.

use crate::axis::CoordinateAxis;
use crate::config::{check_tolerance, RegistryConfig};
use crate::error::{GridTableError, Result};
use crate::grid::GridDefinition;
use crate::tables;
use crate::types::{AxisKind, Coverage, Dimension, InterpolationWeights};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Immutable catalogue of grid definitions keyed by resolution identifier.
#[derive(Debug, Clone)]
pub struct GridTableRegistry {
    grids: HashMap<String, GridDefinition>,
    tolerance: f64,
}

impl GridTableRegistry {
    /// Start an empty registration phase.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The built-in catalogue, unvalidated.
    ///
    /// Registered through [`RegistryBuilder::with_builtin_grids`]; the
    /// built-in names are distinct, so duplicate rejection cannot fire here.
    pub fn standard() -> Self {
        RegistryBuilder::new()
            .with_builtin_grids()
            .expect("built-in grid names are unique")
            .build()
    }

    /// Build the built-in catalogue and validate it if the config asks for it.
    pub fn load(config: &RegistryConfig) -> Result<Self> {
        config.validate().map_err(GridTableError::Config)?;

        let registry = Self::builder()
            .tolerance(config.tolerance)
            .with_builtin_grids()?
            .build();

        if config.validate_on_load {
            registry.validate()?;
        }

        Ok(registry)
    }

    /// Start a new registration phase seeded with this registry's grids.
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            grids: self.grids.clone(),
            tolerance: self.tolerance,
        }
    }

    /// Look up a grid definition by resolution identifier.
    pub fn grid(&self, resolution: &str) -> Result<&GridDefinition> {
        self.grids.get(resolution).ok_or_else(|| {
            debug!(resolution = %resolution, "Unknown grid requested");
            GridTableError::unknown_grid(resolution)
        })
    }

    /// Get a read-only copy of one axis.
    ///
    /// The copy shares its values with the registry but cannot modify them.
    pub fn get_axis(&self, resolution: &str, dimension: Dimension, kind: AxisKind) -> Result<CoordinateAxis> {
        self.grid(resolution)?.axis(dimension, kind).cloned()
    }

    /// Like [`get_axis`](Self::get_axis), taking dimension and kind as string tags.
    pub fn get_axis_by_tags(&self, resolution: &str, dimension: &str, kind: &str) -> Result<CoordinateAxis> {
        self.get_axis(resolution, dimension.parse()?, kind.parse()?)
    }

    /// Every registered resolution identifier, in no particular order.
    pub fn list_resolutions(&self) -> HashSet<&str> {
        self.grids.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, resolution: &str) -> bool {
        self.grids.contains_key(resolution)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Index of the center closest to `value`.
    ///
    /// Exact ties resolve to the lower index. Periodic longitude axes fold
    /// the value into `[first_edge, first_edge + 360)` first; other axes fail
    /// with `OutOfRange` outside their edges.
    pub fn nearest_center_index(&self, resolution: &str, dimension: Dimension, value: f64) -> Result<usize> {
        self.grid(resolution)?.nearest_center_index(dimension, value)
    }

    /// Bounding edges `(edges[index], edges[index + 1])` of one cell.
    pub fn cell_bounds(&self, resolution: &str, dimension: Dimension, index: isize) -> Result<(f64, f64)> {
        self.grid(resolution)?.cell_bounds(dimension, index)
    }

    /// Linear interpolation weights between the centers bracketing `value`.
    pub fn interpolation_weights(
        &self,
        resolution: &str,
        dimension: Dimension,
        value: f64,
    ) -> Result<InterpolationWeights> {
        self.grid(resolution)?.interpolation_weights(dimension, value)
    }

    /// Nearest (longitude, latitude) center indices of a point.
    pub fn locate(&self, resolution: &str, lon: f64, lat: f64) -> Result<(usize, usize)> {
        self.grid(resolution)?.locate(lon, lat)
    }

    /// Check every grid and fail with all violations found.
    ///
    /// A non-positive or non-finite tolerance fails with `Config` before any
    /// grid is checked.
    pub fn validate(&self) -> Result<()> {
        check_tolerance(self.tolerance).map_err(GridTableError::Config)?;

        let mut names: Vec<&String> = self.grids.keys().collect();
        names.sort();

        let violations: Vec<_> = names
            .into_iter()
            .flat_map(|name| self.grids[name].validate(self.tolerance))
            .collect();

        if violations.is_empty() {
            info!(grids = self.grids.len(), "Grid tables validated");
            return Ok(());
        }

        for violation in &violations {
            warn!(
                resolution = %violation.resolution,
                dimension = %violation.dimension,
                "Grid consistency violation: {}",
                violation.message
            );
        }
        Err(GridTableError::GridConsistency(violations))
    }

    /// Serializable overview of every grid, sorted by name.
    pub fn summaries(&self) -> Vec<GridSummary> {
        let mut summaries: Vec<GridSummary> = self.grids.values().map(GridSummary::from).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}

impl Default for GridTableRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Single-writer registration phase for a [`GridTableRegistry`].
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    grids: HashMap<String, GridDefinition>,
    tolerance: f64,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            grids: HashMap::new(),
            tolerance: RegistryConfig::default().tolerance,
        }
    }

    /// Tolerance used by the published registry's `validate`, which rejects
    /// non-positive and non-finite values.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Register one grid; names must be unique.
    pub fn register(mut self, grid: GridDefinition) -> Result<Self> {
        if self.grids.contains_key(grid.name()) {
            return Err(GridTableError::DuplicateGrid(grid.name().to_string()));
        }

        debug!(
            resolution = %grid.name(),
            dimensions = ?grid.dimensions(),
            "Registered grid"
        );
        self.grids.insert(grid.name().to_string(), grid);
        Ok(self)
    }

    /// Register every built-in grid.
    pub fn with_builtin_grids(self) -> Result<Self> {
        tables::builtin_grids()
            .into_iter()
            .try_fold(self, |builder, grid| builder.register(grid))
    }

    /// Publish the registry. The builder is consumed.
    pub fn build(self) -> GridTableRegistry {
        info!(grids = self.grids.len(), "Published grid table registry");
        GridTableRegistry {
            grids: self.grids,
            tolerance: self.tolerance,
        }
    }
}

/// Overview of one grid for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub name: String,
    pub description: String,
    pub coverage: Coverage,
    pub axes: Vec<AxisSummary>,
}

/// Overview of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSummary {
    pub dimension: Dimension,
    pub kind: AxisKind,
    pub len: usize,
    pub first: Option<f64>,
    pub last: Option<f64>,
    pub periodic: bool,
    pub units: String,
}

impl From<&GridDefinition> for GridSummary {
    fn from(grid: &GridDefinition) -> Self {
        Self {
            name: grid.name().to_string(),
            description: grid.description().to_string(),
            coverage: grid.coverage(),
            axes: grid
                .axes()
                .map(|axis| AxisSummary {
                    dimension: axis.dimension(),
                    kind: axis.kind(),
                    len: axis.len(),
                    first: axis.first(),
                    last: axis.last(),
                    periodic: axis.is_periodic(),
                    units: axis.dimension().units().to_string(),
                })
                .collect(),
        }
    }
}
