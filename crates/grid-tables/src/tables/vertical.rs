//! Reduced GEOS-5 vertical grid (47 levels).
//!
//! Level 0 is at the surface. Eta and pressure decrease upward, altitude
//! increases upward.

use crate::grid::GridDefinition;
use crate::types::{Coverage, Dimension, Direction};

/// Level edges, eta coordinate (dimensionless).
pub(crate) const E_ETA_GEOS5_R: &[f64] = &[
    1.001796, 0.986769, 0.971665, 0.956562, 0.941459, 0.926356,
    0.911253, 0.896152, 0.881051, 0.865949, 0.850848, 0.835748,
    0.820648, 0.800515, 0.77535, 0.750186, 0.725026, 0.699867,
    0.674708, 0.636974, 0.599251, 0.561527, 0.523819, 0.486118,
    0.448431, 0.410759, 0.373114, 0.335486, 0.285974, 0.242774,
    0.206167, 0.17517, 0.148896, 0.126563, 0.107578, 0.091442,
    0.077726, 0.05582, 0.039768, 0.028077, 0.019586, 0.009191,
    0.004026, 0.001625, 0.000601, 0.000199, 5.5e-05, 0.0,
];

/// Level edges, altitude in km.
pub(crate) const E_KM_GEOS5_R: &[f64] = &[
    0.006, 0.135, 0.266, 0.399, 0.533, 0.669,
    0.806, 0.945, 1.086, 1.229, 1.374, 1.52,
    1.669, 1.871, 2.128, 2.392, 2.663, 2.941,
    3.228, 3.673, 4.14, 4.631, 5.149, 5.698,
    6.283, 6.91, 7.587, 8.324, 9.411, 10.505,
    11.578, 12.633, 13.674, 14.706, 15.731, 16.753,
    17.773, 19.855, 22.004, 24.24, 26.596, 31.716,
    37.574, 44.286, 51.788, 59.926, 68.392, 80.581,
];

/// Level edges, pressure in hPa.
pub(crate) const E_HPA_GEOS5_R: &[f64] = &[
    1011.814, 996.636, 981.382, 966.128, 950.874, 935.621,
    920.367, 905.114, 889.862, 874.61, 859.358, 844.107,
    828.856, 808.522, 783.106, 757.69, 732.279, 706.869,
    681.458, 643.348, 605.247, 567.147, 529.062, 490.984,
    452.921, 414.873, 376.851, 338.848, 288.841, 245.21,
    208.236, 176.93, 150.393, 127.837, 108.663, 92.366,
    78.512, 56.388, 40.175, 28.368, 19.792, 9.293,
    4.077, 1.651, 0.617, 0.211, 0.066, 0.01,
];

/// Level centers, eta coordinate (dimensionless).
pub(crate) const C_ETA_GEOS5_R: &[f64] = &[
    0.994283, 0.979217, 0.964113, 0.94901, 0.933908, 0.918805,
    0.903703, 0.888601, 0.8735, 0.858399, 0.843298, 0.828198,
    0.810582, 0.787933, 0.762768, 0.737606, 0.712447, 0.687287,
    0.655841, 0.618113, 0.580389, 0.542673, 0.504968, 0.467274,
    0.429595, 0.391937, 0.3543, 0.31073, 0.264374, 0.224471,
    0.190668, 0.162033, 0.137729, 0.11707, 0.09951, 0.084584,
    0.066773, 0.047794, 0.033923, 0.023832, 0.014389, 0.006609,
    0.002825, 0.001113, 0.0004, 0.000127, 2.8e-05,
];

/// Level centers, altitude in km.
pub(crate) const C_KM_GEOS5_R: &[f64] = &[
    0.071, 0.201, 0.332, 0.466, 0.601, 0.737,
    0.875, 1.016, 1.157, 1.301, 1.447, 1.594,
    1.769, 1.999, 2.259, 2.527, 2.801, 3.084,
    3.448, 3.904, 4.382, 4.886, 5.419, 5.985,
    6.591, 7.241, 7.947, 8.848, 9.938, 11.021,
    12.086, 13.134, 14.17, 15.198, 16.222, 17.243,
    18.727, 20.836, 23.02, 25.307, 28.654, 34.024,
    40.166, 47.135, 54.834, 63.054, 72.18,
];

/// Level centers, pressure in hPa.
pub(crate) const C_HPA_GEOS5_R: &[f64] = &[
    1004.225, 989.009, 973.755, 958.501, 943.247, 927.994,
    912.741, 897.488, 882.236, 866.984, 851.732, 836.481,
    818.689, 795.814, 770.398, 744.984, 719.574, 694.163,
    662.403, 624.298, 586.197, 548.105, 510.023, 471.952,
    433.897, 395.862, 357.85, 313.844, 267.025, 226.723,
    192.583, 163.661, 139.115, 118.25, 100.514, 85.439,
    67.45, 48.282, 34.272, 24.08, 14.542, 6.685,
    2.864, 1.134, 0.414, 0.139, 0.038,
];

/// Reduced GEOS-5 levels in eta, km and hPa.
///
/// Not tied to any horizontal resolution.
pub fn geos5_reduced() -> GridDefinition {
    GridDefinition::new("geos5_reduced", "reduced GEOS-5 vertical grid, 47 levels", Coverage::Global)
        .with_pair(Dimension::Eta, Direction::Descending, C_ETA_GEOS5_R, E_ETA_GEOS5_R)
        .with_pair(Dimension::Altitude, Direction::Ascending, C_KM_GEOS5_R, E_KM_GEOS5_R)
        .with_pair(Dimension::Pressure, Direction::Descending, C_HPA_GEOS5_R, E_HPA_GEOS5_R)
}
