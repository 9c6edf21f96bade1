//! Tag types that key the coordinate tables.

use crate::error::GridTableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical dimension an axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Longitude in degrees east.
    Longitude,
    /// Latitude in degrees north.
    Latitude,
    /// Vertical eta coordinate, `(p - p_top) / (p_surface - p_top)`.
    Eta,
    /// Vertical altitude in kilometers.
    #[serde(rename = "km")]
    Altitude,
    /// Vertical pressure in hectopascals.
    #[serde(rename = "hPa")]
    Pressure,
}

impl Dimension {
    /// All dimensions, horizontal first.
    pub const ALL: [Dimension; 5] = [
        Dimension::Longitude,
        Dimension::Latitude,
        Dimension::Eta,
        Dimension::Altitude,
        Dimension::Pressure,
    ];

    /// Canonical tag used in messages and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::Eta => "eta",
            Self::Altitude => "km",
            Self::Pressure => "hPa",
        }
    }

    /// Physical unit of values along this dimension.
    pub fn units(&self) -> &'static str {
        match self {
            Self::Longitude => "degrees_east",
            Self::Latitude => "degrees_north",
            Self::Eta => "1",
            Self::Altitude => "km",
            Self::Pressure => "hPa",
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Eta | Self::Altitude | Self::Pressure)
    }
}

impl FromStr for Dimension {
    type Err = GridTableError;

    /// Parse from string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "longitude" | "lon" => Ok(Self::Longitude),
            "latitude" | "lat" => Ok(Self::Latitude),
            "eta" | "vertical-eta" => Ok(Self::Eta),
            "km" | "vertical-km" | "altitude" => Ok(Self::Altitude),
            "hpa" | "vertical-hpa" | "pressure" => Ok(Self::Pressure),
            _ => Err(GridTableError::invalid_tag("dimension", s)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an axis holds cell centers or cell edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Center,
    Edge,
}

impl AxisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Edge => "edge",
        }
    }
}

impl FromStr for AxisKind {
    type Err = GridTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "center" | "centre" | "c" => Ok(Self::Center),
            "edge" | "edges" | "e" => Ok(Self::Edge),
            _ => Err(GridTableError::invalid_tag("axis kind", s)),
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared monotonic direction of an axis.
///
/// Horizontal axes ascend. Vertical tables start at the surface, so eta and
/// pressure descend while altitude ascends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// True if `b` strictly follows `a` in this direction.
    #[inline]
    pub fn is_ordered(&self, a: f64, b: f64) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }
}

/// Horizontal extent of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    /// Pole to pole; latitude edges must span [-90, 90].
    #[default]
    Global,
    /// A nested window such as the China grid.
    Regional,
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Regional => write!(f, "regional"),
        }
    }
}

/// Linear interpolation weights between two adjacent centers.
///
/// A value `v` is reproduced as `(1 - weight) * centers[lower] + weight * centers[upper]`.
/// When the value falls outside the outermost centers of a non-periodic axis,
/// `lower == upper` and `weight == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolationWeights {
    pub lower: usize,
    pub upper: usize,
    pub weight: f64,
}

impl InterpolationWeights {
    /// Apply the weights to a column of values defined on the centers.
    pub fn apply(&self, values: &[f64]) -> Option<f64> {
        let lo = *values.get(self.lower)?;
        let hi = *values.get(self.upper)?;
        Some((1.0 - self.weight) * lo + self.weight * hi)
    }
}
