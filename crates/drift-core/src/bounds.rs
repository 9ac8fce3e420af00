//! Depth and time validity bounds.
//!
//! Bounds are a validity contract, not a normalisation step: a coordinate
//! outside the configured range is rejected with [`IdError::OutOfRange`],
//! never clamped. Invalid ranges are rejected when they are constructed,
//! so a generator only ever holds well-formed [`Bounds`].

use std::fmt;

use crate::error::IdError;
use crate::id::Coordinate;

/// The bounded axes of a [`Coordinate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical position.
    Depth,
    /// Simulation time.
    Time,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depth => write!(f, "depth"),
            Self::Time => write!(f, "time"),
        }
    }
}

/// A closed, finite interval `[min, max]` with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Validate and build a range for `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidBounds`] if either end is NaN or infinite,
    /// or if `min > max`.
    pub fn new(axis: Axis, min: f64, max: f64) -> Result<Self, IdError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(IdError::InvalidBounds { axis, min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower end of the range.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper end of the range.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the range (`max - min`).
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies in `[min, max]`. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    ///
    /// A degenerate range (`min == max`) maps everything to 0. Callers
    /// are expected to have checked [`contains`](Self::contains) first.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Lifecycle state of an identifier service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceState {
    /// At least one of the depth or time bounds has never been set.
    Uninitialized,
    /// Both bounds have been set; IDs can be issued.
    BoundsConfigured,
}

/// The depth and time bounds currently held by a generator.
///
/// `None` means the axis has never been configured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IdBounds {
    /// Valid depth range.
    pub depth: Option<Bounds>,
    /// Valid time line.
    pub time: Option<Bounds>,
}

impl IdBounds {
    /// Service state implied by which axes are configured.
    pub fn state(&self) -> ServiceState {
        if self.depth.is_some() && self.time.is_some() {
            ServiceState::BoundsConfigured
        } else {
            ServiceState::Uninitialized
        }
    }

    /// Check a coordinate against both bounds.
    ///
    /// Returns the `(depth, time)` ranges on success so generators can
    /// normalise without re-reading their state.
    ///
    /// # Errors
    ///
    /// - [`IdError::NotConfigured`] if an axis was never configured
    ///   (depth is checked before time).
    /// - [`IdError::OutOfRange`] if depth or time lies outside its range
    ///   or is not finite.
    pub fn check(&self, coord: &Coordinate) -> Result<(Bounds, Bounds), IdError> {
        let depth = self.depth.ok_or(IdError::NotConfigured { axis: Axis::Depth })?;
        let time = self.time.ok_or(IdError::NotConfigured { axis: Axis::Time })?;
        if !depth.contains(coord.depth) {
            return Err(IdError::OutOfRange {
                axis: Axis::Depth,
                value: coord.depth,
                bounds: depth,
            });
        }
        if !time.contains(coord.time) {
            return Err(IdError::OutOfRange {
                axis: Axis::Time,
                value: coord.time,
                bounds: time,
            });
        }
        Ok((depth, time))
    }
}
