//! Service configuration.

use drift_core::{Axis, Bounds, IdError};

use crate::kind::GeneratorKind;

/// Builder-input for [`IdService::from_config`](crate::IdService::from_config).
///
/// Leaving an axis as `None` builds a service that stays
/// [`ServiceState::Uninitialized`](drift_core::ServiceState) until the
/// caller configures that axis by hand.
#[derive(Clone, Debug, PartialEq)]
pub struct IdServiceConfig {
    /// Which strategy to instantiate. Default: spatio-temporal.
    pub generator: GeneratorKind,
    /// Valid depth range `(min, max)`. Default: `(0, 100)`.
    pub depth_limits: Option<(f64, f64)>,
    /// Valid time line `(min, max)` in seconds. Default: `(0, 240)`.
    pub time_line: Option<(f64, f64)>,
}

impl IdServiceConfig {
    /// Default depth range.
    pub const DEFAULT_DEPTH_LIMITS: (f64, f64) = (0.0, 100.0);

    /// Default time line.
    pub const DEFAULT_TIME_LINE: (f64, f64) = (0.0, 240.0);

    /// A config for `generator` with no bounds set.
    pub fn unconfigured(generator: GeneratorKind) -> Self {
        Self {
            generator,
            depth_limits: None,
            time_line: None,
        }
    }

    /// Set the depth range.
    pub fn with_depth_limits(mut self, min: f64, max: f64) -> Self {
        self.depth_limits = Some((min, max));
        self
    }

    /// Set the time line.
    pub fn with_time_line(mut self, min: f64, max: f64) -> Self {
        self.time_line = Some((min, max));
        self
    }

    /// Check every configured range without building anything.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidBounds`] for the first invalid range,
    /// depth before time.
    pub fn validate(&self) -> Result<(), IdError> {
        if let Some((min, max)) = self.depth_limits {
            Bounds::new(Axis::Depth, min, max)?;
        }
        if let Some((min, max)) = self.time_line {
            Bounds::new(Axis::Time, min, max)?;
        }
        Ok(())
    }
}

impl Default for IdServiceConfig {
    fn default() -> Self {
        Self::unconfigured(GeneratorKind::SpatioTemporal)
            .with_depth_limits(Self::DEFAULT_DEPTH_LIMITS.0, Self::DEFAULT_DEPTH_LIMITS.1)
            .with_time_line(Self::DEFAULT_TIME_LINE.0, Self::DEFAULT_TIME_LINE.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        let config = IdServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.depth_limits, Some((0.0, 100.0)));
        assert_eq!(config.time_line, Some((0.0, 240.0)));
    }

    #[test]
    fn unconfigured_validates() {
        assert!(IdServiceConfig::unconfigured(GeneratorKind::Sequential)
            .validate()
            .is_ok());
    }

    #[test]
    fn depth_reported_before_time() {
        let config = IdServiceConfig::default()
            .with_depth_limits(5.0, 1.0)
            .with_time_line(5.0, 1.0);
        assert!(matches!(
            config.validate(),
            Err(IdError::InvalidBounds {
                axis: Axis::Depth,
                ..
            })
        ));
    }

    #[test]
    fn nan_time_line_rejected() {
        let config = IdServiceConfig::default().with_time_line(0.0, f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(IdError::InvalidBounds { axis: Axis::Time, .. })
        ));
    }
}
