//! Plain counter strategy.

use drift_core::{Bounds, Coordinate, IdBounds, IdError, IdGenerator, ParticleId};

/// Issues 0, 1, 2, … in request order.
///
/// Coordinates still go through the bounds checks, so swapping this in
/// for [`SpatioTemporalIdGenerator`](crate::SpatioTemporalIdGenerator)
/// does not change which requests are accepted. IDs carry no spatial or
/// temporal information; they sort by submission order only.
///
/// The identifier space is the full `u64` range. After `u64::MAX` has
/// been issued, `next()` returns [`IdError::GeneratorExhausted`].
#[derive(Debug)]
pub struct SequentialIdGenerator {
    bounds: IdBounds,
    /// `None` once `u64::MAX` has been handed out.
    next: Option<u64>,
}

impl SequentialIdGenerator {
    /// Strategy name reported in diagnostics and errors.
    pub const NAME: &'static str = "sequential";

    /// Create a generator that starts counting at 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a generator whose first ID is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            bounds: IdBounds::default(),
            next: Some(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
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
        let Some(raw) = self.next else {
            return Err(IdError::GeneratorExhausted {
                generator: Self::NAME.to_string(),
            });
        };
        self.next = raw.checked_add(1);
        Ok(ParticleId::from_raw(raw))
    }
}
