//! Particle identifiers and the [`Coordinate`] type.

use std::fmt;

/// Opaque, globally unique identifier assigned to a particle at creation.
///
/// Identifiers are totally ordered so downstream consumers can sort and
/// compare particles deterministically. How the bits are laid out depends
/// on the generator strategy that issued the ID; callers should treat the
/// value as opaque and only compare it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u64);

impl ParticleId {
    /// Wrap a raw value, e.g. one read back from a trajectory record.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw 64-bit value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ParticleId> for u64 {
    fn from(id: ParticleId) -> Self {
        id.0
    }
}

/// A point in simulation space-time where a particle is created.
///
/// Horizontal position is in degrees or grid units, depth in physical
/// depth units, and time in seconds since the start of the run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// First horizontal component (longitude or grid x).
    pub x: f64,
    /// Second horizontal component (latitude or grid y).
    pub y: f64,
    /// Depth below the reference surface.
    pub depth: f64,
    /// Simulation time in seconds.
    pub time: f64,
}

impl Coordinate {
    /// Create a coordinate from its four components.
    pub const fn new(x: f64, y: f64, depth: f64, time: f64) -> Self {
        Self { x, y, depth, time }
    }

    /// A coordinate at zero depth.
    pub const fn surface(x: f64, y: f64, time: f64) -> Self {
        Self::new(x, y, 0.0, time)
    }

    /// The same horizontal position and depth at a different time.
    pub const fn at_time(self, time: f64) -> Self {
        Self { time, ..self }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x={}, y={}, depth={}, time={})",
            self.x, self.y, self.depth, self.time
        )
    }
}
