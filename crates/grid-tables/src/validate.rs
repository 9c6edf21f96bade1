//! Consistency checks over grid definitions.
//!
//! Every check appends to a violation list instead of returning early, so a
//! single pass reports every broken table at once.

use crate::axis::{CoordinateAxis, FULL_CIRCLE};
use crate::error::Violation;
use crate::grid::GridDefinition;
use crate::types::{AxisKind, Coverage, Dimension};

const SOUTH_POLE: f64 = -90.0;
const NORTH_POLE: f64 = 90.0;

/// Run all checks against one grid.
pub fn check_grid(grid: &GridDefinition, tolerance: f64) -> Vec<Violation> {
    let mut violations = Vec::new();

    for dimension in grid.dimensions() {
        let mut report = |message: String| {
            violations.push(Violation::new(grid.name(), dimension, message));
        };

        let centers = grid.axis(dimension, AxisKind::Center).ok();
        let edges = grid.axis(dimension, AxisKind::Edge).ok();

        for axis in centers.iter().chain(edges.iter()) {
            check_axis(axis, &mut report);
        }

        let (centers, edges) = match (centers, edges) {
            (Some(c), Some(e)) => (c, e),
            (Some(_), None) => {
                report("center axis has no matching edge axis".to_string());
                continue;
            }
            (None, Some(_)) => {
                report("edge axis has no matching center axis".to_string());
                continue;
            }
            (None, None) => continue,
        };

        if centers.direction() != edges.direction() {
            report(format!(
                "centers are {:?} but edges are {:?}",
                centers.direction(),
                edges.direction()
            ));
        }

        if edges.len() != centers.len() + 1 {
            report(format!(
                "expected {} edges for {} centers, found {}",
                centers.len() + 1,
                centers.len(),
                edges.len()
            ));
        } else {
            check_centers_inside_edges(centers, edges, &mut report);
        }

        if dimension == Dimension::Latitude && grid.coverage() == Coverage::Global {
            check_pole_to_pole(edges, tolerance, &mut report);
        }

        if dimension == Dimension::Longitude {
            check_uniform_spacing(edges, tolerance, &mut report);
            if edges.is_periodic() {
                check_full_circle(edges, tolerance, &mut report);
            }
        }
    }

    violations
}

fn check_axis(axis: &CoordinateAxis, report: &mut impl FnMut(String)) {
    if axis.is_empty() {
        report(format!("{} axis is empty", axis.kind()));
        return;
    }

    if let Some(i) = axis.values().iter().position(|v| !v.is_finite()) {
        report(format!("{} axis has a non-finite value at index {}", axis.kind(), i));
        return;
    }

    if let Some(i) = axis
        .values()
        .windows(2)
        .position(|pair| !axis.direction().is_ordered(pair[0], pair[1]))
    {
        report(format!(
            "{} axis is not strictly {:?} at index {} ({} then {})",
            axis.kind(),
            axis.direction(),
            i + 1,
            axis.values()[i],
            axis.values()[i + 1]
        ));
    }
}

fn check_centers_inside_edges(
    centers: &CoordinateAxis,
    edges: &CoordinateAxis,
    report: &mut impl FnMut(String),
) {
    let direction = centers.direction();
    let e = edges.values();

    for (i, &c) in centers.values().iter().enumerate() {
        if !(direction.is_ordered(e[i], c) && direction.is_ordered(c, e[i + 1])) {
            report(format!(
                "center {} at index {} is not strictly between edges {} and {}",
                c,
                i,
                e[i],
                e[i + 1]
            ));
        }
    }
}

fn check_pole_to_pole(edges: &CoordinateAxis, tolerance: f64, report: &mut impl FnMut(String)) {
    let (Some(min), Some(max)) = (edges.min(), edges.max()) else {
        return;
    };

    if (min - SOUTH_POLE).abs() > tolerance || (max - NORTH_POLE).abs() > tolerance {
        report(format!(
            "latitude edges span [{}, {}], expected [{}, {}]",
            min, max, SOUTH_POLE, NORTH_POLE
        ));
    }
}

fn check_uniform_spacing(edges: &CoordinateAxis, tolerance: f64, report: &mut impl FnMut(String)) {
    let e = edges.values();
    if e.len() < 2 {
        return;
    }

    let width = e[1] - e[0];
    if let Some(i) = e
        .windows(2)
        .position(|pair| ((pair[1] - pair[0]) - width).abs() > tolerance)
    {
        report(format!(
            "longitude edge spacing {} at index {} differs from cell width {}",
            e[i + 1] - e[i],
            i,
            width
        ));
        return;
    }

    let cells = (e.len() - 1) as f64;
    // Accumulated rounding grows with the number of cells.
    if (edges.span() - cells * width.abs()).abs() > tolerance * cells {
        report(format!(
            "longitude edges span {} but {} cells of width {} span {}",
            edges.span(),
            cells,
            width,
            cells * width.abs()
        ));
    }
}

fn check_full_circle(edges: &CoordinateAxis, tolerance: f64, report: &mut impl FnMut(String)) {
    if (edges.span() - FULL_CIRCLE).abs() > tolerance {
        report(format!(
            "periodic longitude edges span {} degrees, expected {}",
            edges.span(),
            FULL_CIRCLE
        ));
    }
}
