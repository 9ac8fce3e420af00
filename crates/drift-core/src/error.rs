//! Error types for identifier generation.
//!
//! Every variant is a programmer or configuration error detected at the
//! service boundary. Nothing here is transient, so callers should fix the
//! call site rather than retry.

use std::error::Error;
use std::fmt;

use crate::bounds::{Axis, Bounds};

/// Errors from configuring bounds or requesting identifiers.
#[derive(Clone, Debug, PartialEq)]
pub enum IdError {
    /// A bounds update had `min > max` or a non-finite end.
    InvalidBounds {
        /// The axis being configured.
        axis: Axis,
        /// Requested lower end.
        min: f64,
        /// Requested upper end.
        max: f64,
    },
    /// An ID was requested before the axis had any bounds.
    NotConfigured {
        /// The first axis found without bounds.
        axis: Axis,
    },
    /// The coordinate's depth or time falls outside the configured bounds.
    OutOfRange {
        /// The offending axis.
        axis: Axis,
        /// The rejected value.
        value: f64,
        /// The bounds in effect when the request was made.
        bounds: Bounds,
    },
    /// The strategy's identifier space is used up.
    GeneratorExhausted {
        /// Name of the exhausted strategy.
        generator: String,
    },
    /// The process-wide service has already been installed.
    AlreadyInstalled,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { axis, min, max } => {
                write!(f, "invalid {axis} bounds: min {min} must be <= max {max}")
            }
            Self::NotConfigured { axis } => {
                write!(f, "{axis} bounds not configured")
            }
            Self::OutOfRange {
                axis,
                value,
                bounds,
            } => {
                write!(f, "{axis} {value} outside configured bounds {bounds}")
            }
            Self::GeneratorExhausted { generator } => {
                write!(f, "id generator '{generator}' exhausted")
            }
            Self::AlreadyInstalled => write!(f, "id service already installed"),
        }
    }
}

impl Error for IdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_axis_and_values() {
        let err = IdError::InvalidBounds {
            axis: Axis::Depth,
            min: 10.0,
            max: 5.0,
        };
        assert_eq!(err.to_string(), "invalid depth bounds: min 10 must be <= max 5");

        let bounds = Bounds::new(Axis::Time, 0.0, 240.0).unwrap();
        let err = IdError::OutOfRange {
            axis: Axis::Time,
            value: 300.0,
            bounds,
        };
        assert_eq!(
            err.to_string(),
            "time 300 outside configured bounds [0, 240]"
        );
    }
}
