//! Shared test utilities for the gchem-grids workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate float assertions
//! - Coordinate generators and corruption helpers
//! - Reference values for the built-in tables
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of a cell's (lower, upper) edge pair.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_bounds_approx_eq;
///
/// assert_bounds_approx_eq!((-90.0001, -87.9999), (-90.0, -88.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_bounds_approx_eq {
    ($actual:expr, ($lo:expr, $hi:expr), $epsilon:expr) => {{
        let (actual_lo, actual_hi) = $actual;
        $crate::assert_approx_eq!(actual_lo, $lo, $epsilon);
        $crate::assert_approx_eq!(actual_hi, $hi, $epsilon);
    }};
}
