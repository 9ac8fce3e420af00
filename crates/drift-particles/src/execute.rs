//! Execution parameters for [`ParticleSet::execute`](crate::ParticleSet::execute).

use crate::error::ParticleError;

/// Time-stepping parameters for one execution run.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecuteConfig {
    /// Absolute simulation time at which the run stops, in seconds.
    pub endtime: f64,
    /// Timestep in seconds. The final step is shortened to land on
    /// `endtime` exactly.
    pub dt: f64,
    /// Seconds between trajectory samples. Default: `dt`.
    pub interval: f64,
}

impl ExecuteConfig {
    /// Run until `endtime` with steps of `dt`, sampling every step.
    pub fn new(endtime: f64, dt: f64) -> Self {
        Self {
            endtime,
            dt,
            interval: dt,
        }
    }

    /// Sample trajectories every `interval` seconds instead.
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    /// Check the parameters against a run starting at `start`.
    ///
    /// # Errors
    ///
    /// - [`ParticleError::InvalidTimestep`] if `dt` is not finite and positive.
    /// - [`ParticleError::InvalidInterval`] if `interval` is not finite and positive.
    /// - [`ParticleError::EndtimeBeforeStart`] if `endtime` is not finite
    ///   or precedes `start`.
    pub fn validate(&self, start: f64) -> Result<(), ParticleError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ParticleError::InvalidTimestep { dt: self.dt });
        }
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(ParticleError::InvalidInterval {
                interval: self.interval,
            });
        }
        if !self.endtime.is_finite() || self.endtime < start {
            return Err(ParticleError::EndtimeBeforeStart {
                endtime: self.endtime,
                start,
            });
        }
        Ok(())
    }
}

/// Outcome of a completed execution run.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecuteSummary {
    /// Name of the kernel that was run.
    pub kernel: String,
    /// Number of timesteps taken.
    pub steps: u64,
    /// Time at which the run started.
    pub start: f64,
    /// Time at which the run stopped.
    pub end: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_defaults_to_dt() {
        assert_eq!(ExecuteConfig::new(100.0, 5.0).interval, 5.0);
        assert_eq!(
            ExecuteConfig::new(100.0, 5.0).with_interval(20.0).interval,
            20.0
        );
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            ExecuteConfig::new(100.0, 0.0).validate(0.0),
            Err(ParticleError::InvalidTimestep { dt: 0.0 })
        );
        assert!(matches!(
            ExecuteConfig::new(100.0, f64::NAN).validate(0.0),
            Err(ParticleError::InvalidTimestep { .. })
        ));
        assert_eq!(
            ExecuteConfig::new(100.0, 1.0)
                .with_interval(-1.0)
                .validate(0.0),
            Err(ParticleError::InvalidInterval { interval: -1.0 })
        );
        assert_eq!(
            ExecuteConfig::new(10.0, 1.0).validate(20.0),
            Err(ParticleError::EndtimeBeforeStart {
                endtime: 10.0,
                start: 20.0
            })
        );
        assert!(ExecuteConfig::new(20.0, 1.0).validate(20.0).is_ok());
    }
}
