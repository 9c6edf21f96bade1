//! Built-in coordinate tables.

mod horizontal;
mod vertical;

use crate::grid::GridDefinition;

pub use horizontal::{grid_05x0667_ch, grid_2x25, grid_4x5, grid_generic};
pub use vertical::geos5_reduced;

/// Every built-in grid, horizontal first.
pub fn builtin_grids() -> Vec<GridDefinition> {
    vec![
        grid_4x5(),
        grid_2x25(),
        grid_05x0667_ch(),
        grid_generic(),
        geos5_reduced(),
    ]
}

/// `cells + 1` evenly spaced edges starting at `start`.
///
/// Each edge is computed from the start rather than accumulated, so the
/// error does not grow along the axis.
pub(crate) fn regular_edges(start: f64, step: f64, cells: usize) -> Vec<f64> {
    (0..=cells).map(|i| start + i as f64 * step).collect()
}

/// Centers halfway between consecutive edges.
pub(crate) fn midpoints(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|pair| 0.5 * (pair[0] + pair[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_edges() {
        assert_eq!(regular_edges(-1.0, 0.5, 4), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(regular_edges(0.0, 1.0, 0), vec![0.0]);
    }

    #[test]
    fn test_midpoints() {
        assert_eq!(midpoints(&[0.0, 2.0, 6.0]), vec![1.0, 4.0]);
        assert!(midpoints(&[1.0]).is_empty());
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let grids = builtin_grids();
        let mut names: Vec<&str> = grids.iter().map(|g| g.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), grids.len());
    }
}
