//! Coordinate generators for building synthetic axes.
//!
//! The corruption helpers reproduce the transcription mistakes that creep
//! into hand-copied coordinate tables, so validation can be tested against
//! realistic damage.

/// Creates `cells + 1` evenly spaced edges starting at `start`.
///
/// # Example
///
/// ```
/// use test_utils::regular_edges;
///
/// let edges = regular_edges(-90.0, 45.0, 4);
/// assert_eq!(edges, vec![-90.0, -45.0, 0.0, 45.0, 90.0]);
/// ```
pub fn regular_edges(start: f64, step: f64, cells: usize) -> Vec<f64> {
    (0..=cells).map(|i| start + i as f64 * step).collect()
}

/// Creates centers halfway between consecutive edges.
///
/// # Example
///
/// ```
/// use test_utils::midpoints;
///
/// assert_eq!(midpoints(&[0.0, 2.0, 6.0]), vec![1.0, 4.0]);
/// ```
pub fn midpoints(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|pair| 0.5 * (pair[0] + pair[1])).collect()
}

/// Creates a center/edge pair for a regular axis.
///
/// # Returns
///
/// `(centers, edges)` with `cells` centers and `cells + 1` edges.
pub fn regular_axis(start: f64, step: f64, cells: usize) -> (Vec<f64>, Vec<f64>) {
    let edges = regular_edges(start, step, cells);
    (midpoints(&edges), edges)
}

/// Re-inserts `len` values starting at `start` right after themselves,
/// like a row pasted twice.
///
/// # Example
///
/// ```
/// use test_utils::duplicate_run;
///
/// let values = duplicate_run(&[1.0, 2.0, 3.0, 4.0], 1, 2);
/// assert_eq!(values, vec![1.0, 2.0, 3.0, 2.0, 3.0, 4.0]);
/// ```
pub fn duplicate_run(values: &[f64], start: usize, len: usize) -> Vec<f64> {
    let end = (start + len).min(values.len());
    let mut out = Vec::with_capacity(values.len() + (end - start));
    out.extend_from_slice(&values[..end]);
    out.extend_from_slice(&values[start..end]);
    out.extend_from_slice(&values[end..]);
    out
}

/// Swaps the values at `i` and `i + 1`.
pub fn swap_pair(values: &[f64], i: usize) -> Vec<f64> {
    let mut out = values.to_vec();
    out.swap(i, i + 1);
    out
}

/// Reverses a table, turning an ascending axis into a descending one.
pub fn reversed(values: &[f64]) -> Vec<f64> {
    values.iter().rev().copied().collect()
}
