//! Properties of the built-in coordinate tables.
//!
//! Every property is checked against every registered grid, not just one
//! sample resolution.

use grid_tables::{registry, AxisKind, Dimension, GridTableError, GridTableRegistry, RegistryConfig};
use test_utils::fixtures::{self, cell_width, geos5_reduced, shape};
use test_utils::{assert_approx_eq, assert_bounds_approx_eq};

/// (resolution, dimension) for every center/edge pair in the registry.
fn all_pairs() -> Vec<(String, Dimension)> {
    let reg = registry();
    let mut pairs = Vec::new();
    for name in reg.list_resolutions() {
        for dim in reg.grid(name).unwrap().dimensions() {
            pairs.push((name.to_string(), dim));
        }
    }
    pairs
}

// =============================================================================
// Catalogue
// =============================================================================

#[test]
fn test_lists_every_builtin_resolution() {
    let names = registry().list_resolutions();
    assert_eq!(names.len(), fixtures::RESOLUTIONS.len());
    for name in fixtures::RESOLUTIONS {
        assert!(names.contains(name), "missing resolution {}", name);
    }
}

#[test]
fn test_standard_registry_is_consistent() {
    registry().validate().expect("built-in tables must validate");
}

#[test]
fn test_load_with_default_config_validates() {
    let registry = GridTableRegistry::load(&RegistryConfig::default()).unwrap();
    assert_eq!(registry.len(), fixtures::RESOLUTIONS.len());
}

#[test]
fn test_horizontal_shapes() {
    for name in fixtures::HORIZONTAL {
        let grid = registry().grid(name).unwrap();
        let expected = shape::horizontal(name).unwrap();
        assert_eq!(
            grid.shape(),
            vec![(Dimension::Longitude, expected.0), (Dimension::Latitude, expected.1)],
            "shape of {}",
            name
        );
    }
}

#[test]
fn test_vertical_grid_has_three_units() {
    let grid = registry().grid("geos5_reduced").unwrap();
    assert_eq!(
        grid.dimensions(),
        vec![Dimension::Eta, Dimension::Altitude, Dimension::Pressure]
    );
    for (_, levels) in grid.shape() {
        assert_eq!(levels, shape::GEOS5_REDUCED_LEVELS);
    }
}

// =============================================================================
// Table invariants
// =============================================================================

#[test]
fn test_edges_outnumber_centers_by_one() {
    for (name, dim) in all_pairs() {
        let centers = registry().get_axis(&name, dim, AxisKind::Center).unwrap();
        let edges = registry().get_axis(&name, dim, AxisKind::Edge).unwrap();
        assert_eq!(edges.len(), centers.len() + 1, "{}/{}", name, dim);
    }
}

#[test]
fn test_centers_strictly_inside_their_cells() {
    for (name, dim) in all_pairs() {
        let centers = registry().get_axis(&name, dim, AxisKind::Center).unwrap();
        let direction = centers.direction();
        for (i, &c) in centers.values().iter().enumerate() {
            let (lower, upper) = registry().cell_bounds(&name, dim, i as isize).unwrap();
            assert!(
                direction.is_ordered(lower, c) && direction.is_ordered(c, upper),
                "{}/{} center {} not inside ({}, {})",
                name,
                dim,
                c,
                lower,
                upper
            );
        }
    }
}

#[test]
fn test_every_axis_is_strictly_monotonic() {
    for name in registry().list_resolutions() {
        for axis in registry().grid(name).unwrap().axes() {
            assert!(
                axis.is_strictly_monotonic(),
                "{}/{} {} axis",
                name,
                axis.dimension(),
                axis.kind()
            );
        }
    }
}

#[test]
fn test_global_latitude_edges_reach_the_poles() {
    for name in fixtures::GLOBAL {
        let edges = registry().get_axis(name, Dimension::Latitude, AxisKind::Edge).unwrap();
        assert_eq!(edges.first(), Some(-90.0), "{}", name);
        assert_eq!(edges.last(), Some(90.0), "{}", name);
    }
}

#[test]
fn test_longitude_edges_span_cells_times_width() {
    for name in fixtures::HORIZONTAL {
        let edges = registry().get_axis(name, Dimension::Longitude, AxisKind::Edge).unwrap();
        let width = cell_width::longitude(name).unwrap();
        let cells = (edges.len() - 1) as f64;
        assert_approx_eq!(edges.span(), cells * width, 1e-9);
    }
}

#[test]
fn test_global_longitude_edges_are_symmetric_about_first_center() {
    for name in fixtures::GLOBAL {
        let centers = registry().get_axis(name, Dimension::Longitude, AxisKind::Center).unwrap();
        let edges = registry().get_axis(name, Dimension::Longitude, AxisKind::Edge).unwrap();
        let origin = centers.first().unwrap();
        let half = cell_width::longitude(name).unwrap() / 2.0;

        assert_bounds_approx_eq!(
            (edges.values()[0], edges.values()[1]),
            (origin - half, origin + half),
            1e-12
        );
        assert_approx_eq!(edges.span(), 360.0, 1e-12);
    }
}

#[test]
fn test_vertical_directions() {
    let reg = registry();
    let eta = reg.get_axis("geos5_reduced", Dimension::Eta, AxisKind::Edge).unwrap();
    let km = reg.get_axis("geos5_reduced", Dimension::Altitude, AxisKind::Edge).unwrap();
    let hpa = reg.get_axis("geos5_reduced", Dimension::Pressure, AxisKind::Edge).unwrap();

    assert_eq!(eta.direction(), grid_tables::Direction::Descending);
    assert_eq!(km.direction(), grid_tables::Direction::Ascending);
    assert_eq!(hpa.direction(), grid_tables::Direction::Descending);

    assert_eq!(eta.first(), Some(geos5_reduced::SURFACE_EDGE_ETA));
    assert_eq!(eta.last(), Some(geos5_reduced::TOP_EDGE_ETA));
    assert_eq!(km.first(), Some(geos5_reduced::SURFACE_EDGE_KM));
    assert_eq!(km.last(), Some(geos5_reduced::TOP_EDGE_KM));
    assert_eq!(hpa.first(), Some(geos5_reduced::SURFACE_EDGE_HPA));
    assert_eq!(hpa.last(), Some(geos5_reduced::TOP_EDGE_HPA));
}

// =============================================================================
// Lookups
// =============================================================================

#[test]
fn test_end_to_end_4x5_latitude() {
    let centers = registry().get_axis("4x5", Dimension::Latitude, AxisKind::Center).unwrap();
    assert_eq!(centers.len(), 46);
    assert_eq!(centers.first(), Some(-89.0));
    assert_eq!(centers.last(), Some(89.0));

    let edges = registry().get_axis("4x5", Dimension::Latitude, AxisKind::Edge).unwrap();
    assert_eq!(edges.len(), 47);
    assert_eq!(edges.first(), Some(-90.0));
    assert_eq!(edges.last(), Some(90.0));
}

#[test]
fn test_end_to_end_with_string_tags() {
    let centers = registry().get_axis_by_tags("4x5", "latitude", "center").unwrap();
    assert_eq!(centers.len(), 46);
    let levels = registry().get_axis_by_tags("geos5_reduced", "vertical-km", "center").unwrap();
    assert_eq!(levels.last(), Some(geos5_reduced::TOP_CENTER_KM));
}

#[test]
fn test_nearest_center_round_trip() {
    for (name, dim) in all_pairs() {
        let centers = registry().get_axis(&name, dim, AxisKind::Center).unwrap();
        for (i, &v) in centers.values().iter().enumerate() {
            assert_eq!(
                registry().nearest_center_index(&name, dim, v).unwrap(),
                i,
                "{}/{} value {}",
                name,
                dim,
                v
            );
        }
    }
}

#[test]
fn test_nearest_center_tie_goes_to_lower_index() {
    let i = registry().nearest_center_index("4x5", Dimension::Longitude, -177.5).unwrap();
    assert_eq!(i, 0);

    // Halfway between 2x2.5 latitude centers -2 and 0.
    let j = registry().nearest_center_index("2x25", Dimension::Latitude, -1.0).unwrap();
    assert_eq!(j, 44);
}

#[test]
fn test_longitude_wraps_around() {
    for name in fixtures::GLOBAL {
        let wrapped = registry().nearest_center_index(name, Dimension::Longitude, 185.0).unwrap();
        let direct = registry().nearest_center_index(name, Dimension::Longitude, -175.0).unwrap();
        assert_eq!(wrapped, direct, "{}", name);

        let west = registry().nearest_center_index(name, Dimension::Longitude, -535.0).unwrap();
        assert_eq!(west, direct, "{}", name);
    }
    assert_eq!(
        registry().nearest_center_index("4x5", Dimension::Longitude, 185.0).unwrap(),
        1
    );
}

#[test]
fn test_longitude_past_last_edge_wraps_to_first_cell() {
    // 178°E lies beyond the last 4x5 edge (177.5) and belongs to the -180 cell.
    let i = registry().nearest_center_index("4x5", Dimension::Longitude, 178.0).unwrap();
    assert_eq!(i, 0);
    let i = registry().nearest_center_index("4x5", Dimension::Longitude, 360.0).unwrap();
    assert_eq!(i, 36);
}

#[test]
fn test_regional_longitude_does_not_wrap() {
    let err = registry()
        .nearest_center_index("05x0667_CH", Dimension::Longitude, 60.0)
        .unwrap_err();
    assert!(matches!(err, GridTableError::OutOfRange { .. }));

    let err = registry()
        .nearest_center_index("05x0667_CH", Dimension::Longitude, 430.0)
        .unwrap_err();
    assert!(matches!(err, GridTableError::OutOfRange { .. }));
}

#[test]
fn test_out_of_range_on_bounded_axes() {
    let reg = registry();
    assert!(matches!(
        reg.nearest_center_index("4x5", Dimension::Latitude, 90.5),
        Err(GridTableError::OutOfRange { .. })
    ));
    assert!(matches!(
        reg.nearest_center_index("geos5_reduced", Dimension::Pressure, 1020.0),
        Err(GridTableError::OutOfRange { .. })
    ));
    assert!(matches!(
        reg.nearest_center_index("geos5_reduced", Dimension::Altitude, -1.0),
        Err(GridTableError::OutOfRange { .. })
    ));

    // Exactly on the outermost edges is inside the domain.
    assert_eq!(reg.nearest_center_index("4x5", Dimension::Latitude, -90.0).unwrap(), 0);
    assert_eq!(
        reg.nearest_center_index("geos5_reduced", Dimension::Eta, 0.0).unwrap(),
        shape::GEOS5_REDUCED_LEVELS - 1
    );
}

#[test]
fn test_unknown_grid() {
    let err = registry()
        .get_axis("9x9", Dimension::Latitude, AxisKind::Center)
        .unwrap_err();
    assert_eq!(err, GridTableError::UnknownGrid("9x9".to_string()));

    assert!(matches!(
        registry().nearest_center_index("9x9", Dimension::Latitude, 0.0),
        Err(GridTableError::UnknownGrid(_))
    ));
}

#[test]
fn test_unknown_axis() {
    let err = registry()
        .get_axis("4x5", Dimension::Pressure, AxisKind::Center)
        .unwrap_err();
    assert!(matches!(
        err,
        GridTableError::UnknownAxis { dimension: Dimension::Pressure, kind: AxisKind::Center, .. }
    ));

    assert!(matches!(
        registry().get_axis("geos5_reduced", Dimension::Longitude, AxisKind::Edge),
        Err(GridTableError::UnknownAxis { .. })
    ));
}

#[test]
fn test_cell_bounds_index_range() {
    for (name, dim) in all_pairs() {
        let n = registry().get_axis(&name, dim, AxisKind::Center).unwrap().len();

        assert!(matches!(
            registry().cell_bounds(&name, dim, -1),
            Err(GridTableError::IndexOutOfRange { index: -1, .. })
        ));
        assert!(matches!(
            registry().cell_bounds(&name, dim, n as isize),
            Err(GridTableError::IndexOutOfRange { len, .. }) if len == n
        ));
        assert!(registry().cell_bounds(&name, dim, n as isize - 1).is_ok());
    }
}

#[test]
fn test_cell_bounds_values() {
    assert_eq!(
        registry().cell_bounds("4x5", Dimension::Latitude, 0).unwrap(),
        (-90.0, -88.0)
    );
    assert_eq!(
        registry().cell_bounds("geos5_reduced", Dimension::Pressure, 0).unwrap(),
        (geos5_reduced::SURFACE_EDGE_HPA, 996.636)
    );
}

// =============================================================================
// Derived queries
// =============================================================================

#[test]
fn test_interpolation_weights_on_latitude() {
    let w = registry()
        .interpolation_weights("4x5", Dimension::Latitude, 0.0)
        .unwrap();
    assert_eq!((w.lower, w.upper), (22, 23));
    assert_approx_eq!(w.weight, 0.5, 1e-12);
}

#[test]
fn test_interpolation_weights_reproduce_pressure() {
    let centers = registry()
        .get_axis("geos5_reduced", Dimension::Pressure, AxisKind::Center)
        .unwrap();
    let w = registry()
        .interpolation_weights("geos5_reduced", Dimension::Pressure, 1000.0)
        .unwrap();

    assert_eq!((w.lower, w.upper), (0, 1));
    assert!(w.weight > 0.0 && w.weight < 1.0);
    assert_approx_eq!(w.apply(centers.values()).unwrap(), 1000.0, 1e-9);

    let surface = registry()
        .interpolation_weights("geos5_reduced", Dimension::Pressure, 1010.0)
        .unwrap();
    assert_eq!((surface.lower, surface.upper), (0, 0));
    assert_approx_eq!(
        surface.apply(centers.values()).unwrap(),
        geos5_reduced::SURFACE_CENTER_HPA,
        1e-12
    );
}

#[test]
fn test_interpolation_weights_across_dateline() {
    let w = registry()
        .interpolation_weights("4x5", Dimension::Longitude, 177.5)
        .unwrap();
    assert_eq!((w.lower, w.upper), (71, 0));
    assert_approx_eq!(w.weight, 0.5, 1e-12);
}

#[test]
fn test_interpolation_weights_east_of_last_center() {
    let w = registry()
        .interpolation_weights("4x5", Dimension::Longitude, 176.0)
        .unwrap();
    assert_eq!((w.lower, w.upper), (71, 0));
    assert_approx_eq!(w.weight, 0.2, 1e-9);

    // Same cell reached from the west side of the first edge.
    let w = registry()
        .interpolation_weights("4x5", Dimension::Longitude, -181.0)
        .unwrap();
    assert_eq!((w.lower, w.upper), (71, 0));
    assert_approx_eq!(w.weight, 0.8, 1e-9);
}

#[test]
fn test_locate() {
    assert_eq!(registry().locate("2x25", 0.0, 0.0).unwrap(), (72, 45));
    assert_eq!(registry().locate("generic", 0.2, -89.9).unwrap(), (180, 0));
    assert!(matches!(
        registry().locate("geos5_reduced", 0.0, 0.0),
        Err(GridTableError::UnknownAxis { .. })
    ));
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_axis_copies_share_registry_storage() {
    let a = registry().get_axis("2x25", Dimension::Longitude, AxisKind::Edge).unwrap();
    let b = registry().get_axis("2x25", Dimension::Longitude, AxisKind::Edge).unwrap();
    assert!(std::ptr::eq(a.values().as_ptr(), b.values().as_ptr()));
}

#[test]
fn test_concurrent_readers() {
    std::thread::scope(|s| {
        for t in 0..8 {
            s.spawn(move || {
                let lon = -180.0 + t as f64 * 45.0;
                let i = registry().nearest_center_index("4x5", Dimension::Longitude, lon).unwrap();
                assert_eq!(i, t * 9);
            });
        }
    });
}

#[test]
fn test_axis_serializes_to_json() {
    let axis = registry()
        .get_axis("geos5_reduced", Dimension::Altitude, AxisKind::Center)
        .unwrap();
    let json = serde_json::to_value(&axis).unwrap();

    assert_eq!(json["name"], "geos5_reduced");
    assert_eq!(json["dimension"], "km");
    assert_eq!(json["kind"], "center");
    assert_eq!(json["direction"], "ascending");
    assert_eq!(json["periodic"], false);
    assert_eq!(json["values"].as_array().unwrap().len(), 47);

    let back: grid_tables::CoordinateAxis = serde_json::from_value(json).unwrap();
    assert_eq!(back, axis);
}

#[test]
fn test_summaries_serialize() {
    let summaries = registry().summaries();
    let json = serde_json::to_string(&summaries).unwrap();
    assert!(json.contains("\"hPa\""));
    assert!(json.contains("\"regional\""));

    let grid = summaries.iter().find(|s| s.name == "4x5").unwrap();
    let lon_edges = grid
        .axes
        .iter()
        .find(|a| a.dimension == Dimension::Longitude && a.kind == AxisKind::Edge)
        .unwrap();
    assert_eq!(lon_edges.len, 73);
    assert_eq!(lon_edges.first, Some(-182.5));
    assert!(lon_edges.periodic);
    assert_eq!(lon_edges.units, "degrees_east");
}
