//! Fixed coordinate tables for GEOS-Chem grids.
//!
//! This crate hard-codes the cell centers and edges of the horizontal and
//! vertical grids used with the GEOS-Chem chemistry-transport model and
//! exposes them through a read-only registry:
//!
//! | Resolution      | Dimensions               | Notes                               |
//! |-----------------|--------------------------|-------------------------------------|
//! | `4x5`           | longitude, latitude      | global, half-size polar cells       |
//! | `2x25`          | longitude, latitude      | global, half-size polar cells       |
//! | `05x0667_CH`    | longitude, latitude      | nested window over China            |
//! | `generic`       | longitude, latitude      | global 1° x 1°                      |
//! | `geos5_reduced` | eta, km, hPa             | 47 levels, level 0 at the surface   |
//!
//! # Architecture
//!
//! ```text
//! GridTableRegistry
//!      │
//!      ├─► GridDefinition ("4x5", "geos5_reduced", ...)
//!      │         │
//!      │         └─► CoordinateAxis per (Dimension, AxisKind)
//!      │
//!      ├─► nearest_center_index / cell_bounds / interpolation_weights
//!      │
//!      └─► validate() ─► every Violation, or Ok
//! ```
//!
//! # Example
//!
//! ```
//! use grid_tables::{registry, AxisKind, Dimension};
//!
//! let lat = registry().get_axis("4x5", Dimension::Latitude, AxisKind::Center)?;
//! assert_eq!(lat.len(), 46);
//!
//! // Longitudes wrap: 185°E is the same cell as -175°.
//! let i = registry().nearest_center_index("4x5", Dimension::Longitude, 185.0)?;
//! assert_eq!(i, 1);
//!
//! let (bottom, top) = registry().cell_bounds("geos5_reduced", Dimension::Pressure, 0)?;
//! assert!(bottom > top);
//! # Ok::<(), grid_tables::GridTableError>(())
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod grid;
pub mod registry;
pub mod tables;
pub mod types;
pub mod validate;

use once_cell::sync::Lazy;

// Re-export commonly used types at crate root
pub use axis::CoordinateAxis;
pub use config::RegistryConfig;
pub use error::{GridTableError, Result, Violation};
pub use grid::GridDefinition;
pub use registry::{AxisSummary, GridSummary, GridTableRegistry, RegistryBuilder};
pub use types::{AxisKind, Coverage, Dimension, Direction, InterpolationWeights};

/// Process-wide built-in catalogue, built on first use.
static REGISTRY: Lazy<GridTableRegistry> = Lazy::new(GridTableRegistry::standard);

/// Shared read-only registry of the built-in grids.
///
/// Not validated on construction; call [`GridTableRegistry::validate`] at
/// startup, or use [`GridTableRegistry::load`] for a validated instance.
pub fn registry() -> &'static GridTableRegistry {
    &REGISTRY
}
