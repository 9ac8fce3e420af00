//! The identifier strategy trait.

use crate::bounds::{Bounds, IdBounds};
use crate::error::IdError;
use crate::id::{Coordinate, ParticleId};

/// A pluggable algorithm that turns a coordinate into a unique identifier.
///
/// # Contract
///
/// - `next()` MUST never return the same [`ParticleId`] twice from one
///   instance, regardless of input or reconfiguration.
/// - Before both bounds are configured, `next()` fails with
///   [`IdError::NotConfigured`]; there is no implicit unbounded default.
/// - Coordinates outside the configured bounds fail with
///   [`IdError::OutOfRange`]; strategies never clamp.
/// - `configure_*` receive already-validated [`Bounds`] and replace the
///   previous range wholesale.
///
/// [`IdBounds::check`] implements the two precondition rules above and
/// should be the first call in every `next()` implementation.
///
/// # Object safety
///
/// This trait is object-safe; services store strategies as
/// `Box<dyn IdGenerator>`.
pub trait IdGenerator: Send {
    /// Human-readable strategy name for diagnostics.
    fn name(&self) -> &str;

    /// Replace the valid depth range.
    fn configure_depth(&mut self, bounds: Bounds);

    /// Replace the valid time line.
    fn configure_time(&mut self, bounds: Bounds);

    /// The bounds currently in effect.
    fn bounds(&self) -> IdBounds;

    /// Produce a fresh identifier for a particle created at `coord`.
    fn next(&mut self, coord: &Coordinate) -> Result<ParticleId, IdError>;
}
