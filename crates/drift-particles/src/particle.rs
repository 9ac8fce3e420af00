//! A single tracked particle.

use drift_core::{Coordinate, ParticleId};

/// A particle with its identifier and current space-time position.
///
/// The identifier is fixed at creation; position and time are advanced
/// by kernels during [`ParticleSet::execute`](crate::ParticleSet::execute).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    /// Horizontal x (longitude or grid units).
    pub x: f64,
    /// Horizontal y (latitude or grid units).
    pub y: f64,
    /// Depth.
    pub depth: f64,
    /// Current particle time in seconds.
    pub time: f64,
}

impl Particle {
    /// Create a particle at `coord` carrying an already-issued `id`.
    pub fn new(id: ParticleId, coord: Coordinate) -> Self {
        Self {
            id,
            x: coord.x,
            y: coord.y,
            depth: coord.depth,
            time: coord.time,
        }
    }

    /// The identifier issued when the particle was created.
    pub fn id(&self) -> ParticleId {
        self.id
    }

    /// Current position as a coordinate.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y, self.depth, self.time)
    }
}
