//! Horizontal grids: 4x5, 2x2.5, the 0.5x0.667 China nested window and the
//! generic 1x1 grid.

use super::{midpoints, regular_edges};
use crate::grid::GridDefinition;
use crate::types::{Coverage, Dimension, Direction};

/// Longitude centers, 4x5.
pub(crate) const C_LON_4X5: &[f64] = &[
    -180.0, -175.0, -170.0, -165.0, -160.0, -155.0, -150.0, -145.0, -140.0,
    -135.0, -130.0, -125.0, -120.0, -115.0, -110.0, -105.0, -100.0, -95.0,
    -90.0, -85.0, -80.0, -75.0, -70.0, -65.0, -60.0, -55.0, -50.0,
    -45.0, -40.0, -35.0, -30.0, -25.0, -20.0, -15.0, -10.0, -5.0,
    0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0,
    45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0,
    90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0, 125.0, 130.0,
    135.0, 140.0, 145.0, 150.0, 155.0, 160.0, 165.0, 170.0, 175.0,
];

/// Longitude edges, 4x5.
pub(crate) const E_LON_4X5: &[f64] = &[
    -182.5, -177.5, -172.5, -167.5, -162.5, -157.5, -152.5, -147.5,
    -142.5, -137.5, -132.5, -127.5, -122.5, -117.5, -112.5, -107.5,
    -102.5, -97.5, -92.5, -87.5, -82.5, -77.5, -72.5, -67.5,
    -62.5, -57.5, -52.5, -47.5, -42.5, -37.5, -32.5, -27.5,
    -22.5, -17.5, -12.5, -7.5, -2.5, 2.5, 7.5, 12.5,
    17.5, 22.5, 27.5, 32.5, 37.5, 42.5, 47.5, 52.5,
    57.5, 62.5, 67.5, 72.5, 77.5, 82.5, 87.5, 92.5,
    97.5, 102.5, 107.5, 112.5, 117.5, 122.5, 127.5, 132.5,
    137.5, 142.5, 147.5, 152.5, 157.5, 162.5, 167.5, 172.5,
    177.5,
];

/// Latitude centers, 4x5. Polar cells are half-size.
pub(crate) const C_LAT_4X5: &[f64] = &[
    -89.0, -86.0, -82.0, -78.0, -74.0, -70.0, -66.0, -62.0, -58.0, -54.0, -50.0,
    -46.0, -42.0, -38.0, -34.0, -30.0, -26.0, -22.0, -18.0, -14.0, -10.0, -6.0,
    -2.0, 2.0, 6.0, 10.0, 14.0, 18.0, 22.0, 26.0, 30.0, 34.0, 38.0,
    42.0, 46.0, 50.0, 54.0, 58.0, 62.0, 66.0, 70.0, 74.0, 78.0, 82.0,
    86.0, 89.0,
];

/// Latitude edges, 4x5.
pub(crate) const E_LAT_4X5: &[f64] = &[
    -90.0, -88.0, -84.0, -80.0, -76.0, -72.0, -68.0, -64.0, -60.0, -56.0, -52.0,
    -48.0, -44.0, -40.0, -36.0, -32.0, -28.0, -24.0, -20.0, -16.0, -12.0, -8.0,
    -4.0, 0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 28.0, 32.0, 36.0,
    40.0, 44.0, 48.0, 52.0, 56.0, 60.0, 64.0, 68.0, 72.0, 76.0, 80.0,
    84.0, 88.0, 90.0,
];

/// Longitude centers, 2x2.5.
pub(crate) const C_LON_2X25: &[f64] = &[
    -180.0, -177.5, -175.0, -172.5, -170.0, -167.5, -165.0, -162.5,
    -160.0, -157.5, -155.0, -152.5, -150.0, -147.5, -145.0, -142.5,
    -140.0, -137.5, -135.0, -132.5, -130.0, -127.5, -125.0, -122.5,
    -120.0, -117.5, -115.0, -112.5, -110.0, -107.5, -105.0, -102.5,
    -100.0, -97.5, -95.0, -92.5, -90.0, -87.5, -85.0, -82.5,
    -80.0, -77.5, -75.0, -72.5, -70.0, -67.5, -65.0, -62.5,
    -60.0, -57.5, -55.0, -52.5, -50.0, -47.5, -45.0, -42.5,
    -40.0, -37.5, -35.0, -32.5, -30.0, -27.5, -25.0, -22.5,
    -20.0, -17.5, -15.0, -12.5, -10.0, -7.5, -5.0, -2.5,
    0.0, 2.5, 5.0, 7.5, 10.0, 12.5, 15.0, 17.5,
    20.0, 22.5, 25.0, 27.5, 30.0, 32.5, 35.0, 37.5,
    40.0, 42.5, 45.0, 47.5, 50.0, 52.5, 55.0, 57.5,
    60.0, 62.5, 65.0, 67.5, 70.0, 72.5, 75.0, 77.5,
    80.0, 82.5, 85.0, 87.5, 90.0, 92.5, 95.0, 97.5,
    100.0, 102.5, 105.0, 107.5, 110.0, 112.5, 115.0, 117.5,
    120.0, 122.5, 125.0, 127.5, 130.0, 132.5, 135.0, 137.5,
    140.0, 142.5, 145.0, 147.5, 150.0, 152.5, 155.0, 157.5,
    160.0, 162.5, 165.0, 167.5, 170.0, 172.5, 175.0, 177.5,
];

/// Longitude edges, 2x2.5.
pub(crate) const E_LON_2X25: &[f64] = &[
    -181.25, -178.75, -176.25, -173.75, -171.25, -168.75, -166.25,
    -163.75, -161.25, -158.75, -156.25, -153.75, -151.25, -148.75,
    -146.25, -143.75, -141.25, -138.75, -136.25, -133.75, -131.25,
    -128.75, -126.25, -123.75, -121.25, -118.75, -116.25, -113.75,
    -111.25, -108.75, -106.25, -103.75, -101.25, -98.75, -96.25,
    -93.75, -91.25, -88.75, -86.25, -83.75, -81.25, -78.75,
    -76.25, -73.75, -71.25, -68.75, -66.25, -63.75, -61.25,
    -58.75, -56.25, -53.75, -51.25, -48.75, -46.25, -43.75,
    -41.25, -38.75, -36.25, -33.75, -31.25, -28.75, -26.25,
    -23.75, -21.25, -18.75, -16.25, -13.75, -11.25, -8.75,
    -6.25, -3.75, -1.25, 1.25, 3.75, 6.25, 8.75,
    11.25, 13.75, 16.25, 18.75, 21.25, 23.75, 26.25,
    28.75, 31.25, 33.75, 36.25, 38.75, 41.25, 43.75,
    46.25, 48.75, 51.25, 53.75, 56.25, 58.75, 61.25,
    63.75, 66.25, 68.75, 71.25, 73.75, 76.25, 78.75,
    81.25, 83.75, 86.25, 88.75, 91.25, 93.75, 96.25,
    98.75, 101.25, 103.75, 106.25, 108.75, 111.25, 113.75,
    116.25, 118.75, 121.25, 123.75, 126.25, 128.75, 131.25,
    133.75, 136.25, 138.75, 141.25, 143.75, 146.25, 148.75,
    151.25, 153.75, 156.25, 158.75, 161.25, 163.75, 166.25,
    168.75, 171.25, 173.75, 176.25, 178.75,
];

/// Latitude centers, 2x2.5. Polar cells are half-size.
pub(crate) const C_LAT_2X25: &[f64] = &[
    -89.5, -88.0, -86.0, -84.0, -82.0, -80.0, -78.0, -76.0, -74.0,
    -72.0, -70.0, -68.0, -66.0, -64.0, -62.0, -60.0, -58.0, -56.0,
    -54.0, -52.0, -50.0, -48.0, -46.0, -44.0, -42.0, -40.0, -38.0,
    -36.0, -34.0, -32.0, -30.0, -28.0, -26.0, -24.0, -22.0, -20.0,
    -18.0, -16.0, -14.0, -12.0, -10.0, -8.0, -6.0, -4.0, -2.0,
    0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0,
    18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0,
    36.0, 38.0, 40.0, 42.0, 44.0, 46.0, 48.0, 50.0, 52.0,
    54.0, 56.0, 58.0, 60.0, 62.0, 64.0, 66.0, 68.0, 70.0,
    72.0, 74.0, 76.0, 78.0, 80.0, 82.0, 84.0, 86.0, 88.0,
    89.5,
];

/// Latitude edges, 2x2.5.
pub(crate) const E_LAT_2X25: &[f64] = &[
    -90.0, -89.0, -87.0, -85.0, -83.0, -81.0, -79.0, -77.0, -75.0, -73.0, -71.0,
    -69.0, -67.0, -65.0, -63.0, -61.0, -59.0, -57.0, -55.0, -53.0, -51.0, -49.0,
    -47.0, -45.0, -43.0, -41.0, -39.0, -37.0, -35.0, -33.0, -31.0, -29.0, -27.0,
    -25.0, -23.0, -21.0, -19.0, -17.0, -15.0, -13.0, -11.0, -9.0, -7.0, -5.0,
    -3.0, -1.0, 1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0,
    19.0, 21.0, 23.0, 25.0, 27.0, 29.0, 31.0, 33.0, 35.0, 37.0, 39.0,
    41.0, 43.0, 45.0, 47.0, 49.0, 51.0, 53.0, 55.0, 57.0, 59.0, 61.0,
    63.0, 65.0, 67.0, 69.0, 71.0, 73.0, 75.0, 77.0, 79.0, 81.0, 83.0,
    85.0, 87.0, 89.0, 90.0,
];

/// Longitude centers, 0.5x0.667 China nested grid (rounded to 1e-3).
pub(crate) const C_LON_05X0667_CH: &[f64] = &[
    70.0, 70.667, 71.333, 72.0, 72.667, 73.333,
    74.0, 74.667, 75.333, 76.0, 76.667, 77.333,
    78.0, 78.667, 79.333, 80.0, 80.667, 81.333,
    82.0, 82.667, 83.333, 84.0, 84.667, 85.333,
    86.0, 86.667, 87.333, 88.0, 88.667, 89.333,
    90.0, 90.667, 91.333, 92.0, 92.667, 93.333,
    94.0, 94.667, 95.333, 96.0, 96.667, 97.333,
    98.0, 98.667, 99.333, 100.0, 100.667, 101.333,
    102.0, 102.667, 103.333, 104.0, 104.667, 105.333,
    106.0, 106.667, 107.333, 108.0, 108.667, 109.333,
    110.0, 110.667, 111.333, 112.0, 112.667, 113.333,
    114.0, 114.667, 115.333, 116.0, 116.667, 117.333,
    118.0, 118.667, 119.333, 120.0, 120.667, 121.333,
    122.0, 122.667, 123.333, 124.0, 124.667, 125.333,
    126.0, 126.667, 127.333, 128.0, 128.667, 129.333,
    130.0, 130.667, 131.333, 132.0, 132.667, 133.333,
    134.0, 134.667, 135.333, 136.0, 136.667, 137.333,
    138.0, 138.667, 139.333, 140.0, 140.667, 141.333,
    142.0, 142.667, 143.333, 144.0, 144.667, 145.333,
    146.0, 146.667, 147.333, 148.0, 148.667, 149.333,
    150.0,
];

/// Latitude centers, 0.5x0.667 China nested grid.
pub(crate) const C_LAT_05X0667_CH: &[f64] = &[
    -11.0, -10.5, -10.0, -9.5, -9.0, -8.5, -8.0, -7.5, -7.0,
    -6.5, -6.0, -5.5, -5.0, -4.5, -4.0, -3.5, -3.0, -2.5,
    -2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0,
    2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5,
    7.0, 7.5, 8.0, 8.5, 9.0, 9.5, 10.0, 10.5, 11.0,
    11.5, 12.0, 12.5, 13.0, 13.5, 14.0, 14.5, 15.0, 15.5,
    16.0, 16.5, 17.0, 17.5, 18.0, 18.5, 19.0, 19.5, 20.0,
    20.5, 21.0, 21.5, 22.0, 22.5, 23.0, 23.5, 24.0, 24.5,
    25.0, 25.5, 26.0, 26.5, 27.0, 27.5, 28.0, 28.5, 29.0,
    29.5, 30.0, 30.5, 31.0, 31.5, 32.0, 32.5, 33.0, 33.5,
    34.0, 34.5, 35.0, 35.5, 36.0, 36.5, 37.0, 37.5, 38.0,
    38.5, 39.0, 39.5, 40.0, 40.5, 41.0, 41.5, 42.0, 42.5,
    43.0, 43.5, 44.0, 44.5, 45.0, 45.5, 46.0, 46.5, 47.0,
    47.5, 48.0, 48.5, 49.0, 49.5, 50.0, 50.5, 51.0, 51.5,
    52.0, 52.5, 53.0, 53.5, 54.0, 54.5, 55.0,
];

/// 4° latitude x 5° longitude global grid.
pub fn grid_4x5() -> GridDefinition {
    GridDefinition::new("4x5", "4° x 5° global grid", Coverage::Global)
        .with_periodic_longitude(C_LON_4X5, E_LON_4X5)
        .with_pair(Dimension::Latitude, Direction::Ascending, C_LAT_4X5, E_LAT_4X5)
}

/// 2° latitude x 2.5° longitude global grid.
pub fn grid_2x25() -> GridDefinition {
    GridDefinition::new("2x25", "2° x 2.5° global grid", Coverage::Global)
        .with_periodic_longitude(C_LON_2X25, E_LON_2X25)
        .with_pair(Dimension::Latitude, Direction::Ascending, C_LAT_2X25, E_LAT_2X25)
}

/// 0.5° latitude x 0.667° longitude nested grid over China.
///
/// Only centers are tabulated; edges sit half a cell either side of the
/// nominal (unrounded) centers.
pub fn grid_05x0667_ch() -> GridDefinition {
    let lon_step = 2.0 / 3.0;
    let lat_step = 0.5;
    let lon_edges = regular_edges(C_LON_05X0667_CH[0] - lon_step / 2.0, lon_step, C_LON_05X0667_CH.len());
    let lat_edges = regular_edges(C_LAT_05X0667_CH[0] - lat_step / 2.0, lat_step, C_LAT_05X0667_CH.len());

    GridDefinition::new("05x0667_CH", "0.5° x 0.667° nested grid over China", Coverage::Regional)
        .with_pair(Dimension::Longitude, Direction::Ascending, C_LON_05X0667_CH, lon_edges)
        .with_pair(Dimension::Latitude, Direction::Ascending, C_LAT_05X0667_CH, lat_edges)
}

/// 1° x 1° global grid with edges on whole degrees.
pub fn grid_generic() -> GridDefinition {
    let lon_edges = regular_edges(-180.0, 1.0, 360);
    let lat_edges = regular_edges(-90.0, 1.0, 180);
    let lon_centers = midpoints(&lon_edges);
    let lat_centers = midpoints(&lat_edges);

    GridDefinition::new("generic", "1° x 1° generic global grid", Coverage::Global)
        .with_periodic_longitude(lon_centers, lon_edges)
        .with_pair(Dimension::Latitude, Direction::Ascending, lat_centers, lat_edges)
}
