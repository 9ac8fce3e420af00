//! Benchmark profiles and utilities for the Drift framework.
//!
//! - [`reference_service`]: a service configured with the default bounds
//! - [`release_grid`]: deterministic grid of release coordinates

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use drift_core::Coordinate;
use drift_idgen::{GeneratorKind, IdService, IdServiceConfig};

/// Build a service for `kind` with depth `(0, 100)` and time line `(0, 240)`.
pub fn reference_service(kind: GeneratorKind) -> IdService {
    let config = IdServiceConfig {
        generator: kind,
        ..IdServiceConfig::default()
    };
    IdService::from_config(&config).expect("default bounds are valid")
}

/// `side * side` surface coordinates on a 60x60 box, all at `time`.
pub fn release_grid(side: usize, time: f64) -> Vec<Coordinate> {
    let step = if side > 1 { 60.0 / (side - 1) as f64 } else { 0.0 };
    (0..side)
        .flat_map(|i| {
            (0..side).map(move |j| Coordinate::surface(i as f64 * step, j as f64 * step, time))
        })
        .collect()
}
