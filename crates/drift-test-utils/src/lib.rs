//! Test utilities and mock types for Drift development.
//!
//! Provides a finite-capacity mock of the [`IdGenerator`] trait and small
//! coordinate fixtures. Depends only on `drift-core`, so any crate in the
//! workspace can use it from its unit tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{coord, line, radial_release};

use drift_core::{Bounds, Coordinate, IdBounds, IdError, IdGenerator, ParticleId};

/// Mock strategy with a fixed number of IDs.
///
/// Issues `0..capacity` in order, then fails with
/// [`IdError::GeneratorExhausted`]. Every accepted coordinate is recorded
/// so tests can assert on what a consumer requested.
pub struct CountingGenerator {
    capacity: u64,
    issued: u64,
    bounds: IdBounds,
    requests: Vec<Coordinate>,
}

impl CountingGenerator {
    pub const NAME: &'static str = "counting";

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            capacity,
            issued: 0,
            bounds: IdBounds::default(),
            requests: Vec::new(),
        }
    }

    /// Coordinates accepted so far, in request order.
    pub fn requests(&self) -> &[Coordinate] {
        &self.requests
    }
}

impl Default for CountingGenerator {
    fn default() -> Self {
        Self::with_capacity(u64::MAX)
    }
}

impl IdGenerator for CountingGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn configure_depth(&mut self, bounds: Bounds) {
        self.bounds.depth = Some(bounds);
    }

    fn configure_time(&mut self, bounds: Bounds) {
        self.bounds.time = Some(bounds);
    }

    fn bounds(&self) -> IdBounds {
        self.bounds
    }

    fn next(&mut self, coord: &Coordinate) -> Result<ParticleId, IdError> {
        self.bounds.check(coord)?;
        if self.issued >= self.capacity {
            return Err(IdError::GeneratorExhausted {
                generator: Self::NAME.to_string(),
            });
        }
        let id = ParticleId::from_raw(self.issued);
        self.issued += 1;
        self.requests.push(*coord);
        Ok(id)
    }
}
