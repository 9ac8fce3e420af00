//! Particle-set error types.

use std::error::Error;
use std::fmt;

use drift_core::IdError;

/// Errors from releasing or executing a [`ParticleSet`](crate::ParticleSet).
#[derive(Clone, Debug, PartialEq)]
pub enum ParticleError {
    /// The identifier service refused a particle.
    Id(IdError),
    /// A release was asked to create zero particles.
    EmptyRelease,
    /// A release region is inverted or not finite.
    InvalidRegion {
        /// Description of the invalid region.
        reason: String,
    },
    /// The timestep is zero, negative or not finite.
    InvalidTimestep {
        /// The rejected timestep in seconds.
        dt: f64,
    },
    /// The output interval is zero, negative or not finite.
    InvalidInterval {
        /// The rejected interval in seconds.
        interval: f64,
    },
    /// The requested end time precedes the set's earliest particle time.
    EndtimeBeforeStart {
        /// The requested end time.
        endtime: f64,
        /// The earliest particle time.
        start: f64,
    },
}

impl fmt::Display for ParticleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(e) => write!(f, "particle id: {e}"),
            Self::EmptyRelease => write!(f, "release must create at least one particle"),
            Self::InvalidRegion { reason } => write!(f, "invalid release region: {reason}"),
            Self::InvalidTimestep { dt } => {
                write!(f, "dt must be finite and positive, got {dt}")
            }
            Self::InvalidInterval { interval } => {
                write!(f, "output interval must be finite and positive, got {interval}")
            }
            Self::EndtimeBeforeStart { endtime, start } => {
                write!(f, "endtime {endtime} precedes particle start time {start}")
            }
        }
    }
}

impl Error for ParticleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Id(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IdError> for ParticleError {
    fn from(e: IdError) -> Self {
        Self::Id(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::Axis;

    #[test]
    fn id_errors_keep_their_source() {
        let err = ParticleError::from(IdError::NotConfigured { axis: Axis::Time });
        assert_eq!(err.to_string(), "particle id: time bounds not configured");
        assert!(err.source().is_some());
        assert!(ParticleError::EmptyRelease.source().is_none());
    }
}
