//! Reusable coordinate fixtures.
//!
//! - [`coord`]: terse coordinate constructor.
//! - [`line`]: evenly spaced release points between two positions.
//! - [`radial_release`]: the two-particle radial rotation release.

use drift_core::Coordinate;

pub fn coord(x: f64, y: f64, depth: f64, time: f64) -> Coordinate {
    Coordinate::new(x, y, depth, time)
}

/// `size` surface points from `start` to `finish` inclusive, all at `time`.
pub fn line(size: usize, start: (f64, f64), finish: (f64, f64), time: f64) -> Vec<Coordinate> {
    (0..size)
        .map(|i| {
            let t = if size > 1 {
                i as f64 / (size - 1) as f64
            } else {
                0.0
            };
            Coordinate::surface(
                start.0 + t * (finish.0 - start.0),
                start.1 + t * (finish.1 - start.1),
                time,
            )
        })
        .collect()
}

/// One particle at the centre of the rotation, one on its periphery.
pub fn radial_release() -> Vec<Coordinate> {
    line(2, (30.0, 30.0), (30.0, 50.0), 0.0)
}
