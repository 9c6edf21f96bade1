//! Reference values for the built-in coordinate tables.
//!
//! Kept separate from the tables themselves so tests compare against an
//! independent transcription.

/// Every built-in resolution identifier.
pub const RESOLUTIONS: [&str; 5] = ["4x5", "2x25", "05x0667_CH", "generic", "geos5_reduced"];

/// Resolutions that carry longitude/latitude axes.
pub const HORIZONTAL: [&str; 4] = ["4x5", "2x25", "05x0667_CH", "generic"];

/// Global resolutions whose longitude wraps modulo 360°.
pub const GLOBAL: [&str; 3] = ["4x5", "2x25", "generic"];

/// Expected cell counts.
pub mod shape {
    /// (longitude cells, latitude cells)
    pub const GRID_4X5: (usize, usize) = (72, 46);
    pub const GRID_2X25: (usize, usize) = (144, 91);
    pub const GRID_05X0667_CH: (usize, usize) = (121, 133);
    pub const GRID_GENERIC: (usize, usize) = (360, 180);

    /// Reduced GEOS-5 vertical levels.
    pub const GEOS5_REDUCED_LEVELS: usize = 47;

    /// Look up the horizontal shape of a resolution.
    pub fn horizontal(resolution: &str) -> Option<(usize, usize)> {
        match resolution {
            "4x5" => Some(GRID_4X5),
            "2x25" => Some(GRID_2X25),
            "05x0667_CH" => Some(GRID_05X0667_CH),
            "generic" => Some(GRID_GENERIC),
            _ => None,
        }
    }
}

/// Nominal longitude cell widths in degrees.
pub mod cell_width {
    pub const LON_4X5: f64 = 5.0;
    pub const LON_2X25: f64 = 2.5;
    pub const LON_05X0667_CH: f64 = 2.0 / 3.0;
    pub const LON_GENERIC: f64 = 1.0;

    pub fn longitude(resolution: &str) -> Option<f64> {
        match resolution {
            "4x5" => Some(LON_4X5),
            "2x25" => Some(LON_2X25),
            "05x0667_CH" => Some(LON_05X0667_CH),
            "generic" => Some(LON_GENERIC),
            _ => None,
        }
    }
}

/// Selected reduced GEOS-5 values (surface level and model top).
pub mod geos5_reduced {
    pub const SURFACE_EDGE_HPA: f64 = 1011.814;
    pub const TOP_EDGE_HPA: f64 = 0.01;
    pub const SURFACE_CENTER_HPA: f64 = 1004.225;
    pub const SURFACE_EDGE_ETA: f64 = 1.001796;
    pub const TOP_EDGE_ETA: f64 = 0.0;
    pub const SURFACE_EDGE_KM: f64 = 0.006;
    pub const TOP_EDGE_KM: f64 = 80.581;
    pub const TOP_CENTER_KM: f64 = 72.18;
}
