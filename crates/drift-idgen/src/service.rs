//! The [`IdService`] façade.
//!
//! Owns one strategy behind a `Mutex` so bounds updates and ID requests
//! are serialised: no caller observes a half-applied bounds change, and
//! two overlapping `get_id` calls never receive the same ID.

use std::sync::{Mutex, MutexGuard, PoisonError};

use drift_core::{
    Axis, Bounds, Coordinate, IdBounds, IdError, IdGenerator, ParticleId, ServiceState,
};

use crate::config::IdServiceConfig;
use crate::kind::GeneratorKind;

/// State guarded by the service lock.
struct Inner {
    generator: Box<dyn IdGenerator>,
    issued: u64,
}

/// Single entry point particle-construction code uses to obtain IDs.
///
/// Consumers never learn which strategy is active. One instance is
/// meant to serve a whole run: build it, configure depth then time
/// bounds, then hand `&IdService` to whatever creates particles (or
/// install it with [`global::install`](crate::global::install)).
///
/// All methods take `&self`; the service is `Send + Sync` and can be
/// shared across threads directly.
pub struct IdService {
    inner: Mutex<Inner>,
}

// Compile-time assertion: IdService must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<IdService>();
};

impl IdService {
    /// Construct a service around a fresh generator of `kind`.
    ///
    /// The service starts [`ServiceState::Uninitialized`]; `get_id`
    /// fails with [`IdError::NotConfigured`] until both bounds are set.
    pub fn new(kind: GeneratorKind) -> Self {
        Self::with_generator(kind.build())
    }

    /// Construct a service around a caller-supplied strategy.
    pub fn with_generator(generator: Box<dyn IdGenerator>) -> Self {
        tracing::debug!(generator = generator.name(), "id service created");
        Self {
            inner: Mutex::new(Inner {
                generator,
                issued: 0,
            }),
        }
    }

    /// Construct and configure a service in one step.
    ///
    /// Applies depth limits, then the time line, mirroring the manual
    /// initialisation order.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidBounds`] if either configured range is
    /// invalid. Nothing is built in that case.
    pub fn from_config(config: &IdServiceConfig) -> Result<Self, IdError> {
        config.validate()?;
        let service = Self::new(config.generator);
        if let Some((min, max)) = config.depth_limits {
            service.set_depth_limits(min, max)?;
        }
        if let Some((min, max)) = config.time_line {
            service.set_time_line(min, max)?;
        }
        Ok(service)
    }

    /// Replace the valid depth range.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidBounds`] if `min > max` or either end is
    /// not finite. The previous depth range stays in effect.
    pub fn set_depth_limits(&self, min: f64, max: f64) -> Result<(), IdError> {
        let bounds = Self::validated(Axis::Depth, min, max)?;
        let mut inner = self.lock();
        inner.generator.configure_depth(bounds);
        tracing::debug!(
            generator = inner.generator.name(),
            min,
            max,
            "depth limits configured"
        );
        Ok(())
    }

    /// Replace the valid time line.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidBounds`] if `min > max` or either end is
    /// not finite. The previous time line stays in effect.
    pub fn set_time_line(&self, min: f64, max: f64) -> Result<(), IdError> {
        let bounds = Self::validated(Axis::Time, min, max)?;
        let mut inner = self.lock();
        inner.generator.configure_time(bounds);
        tracing::debug!(
            generator = inner.generator.name(),
            min,
            max,
            "time line configured"
        );
        Ok(())
    }

    /// Obtain a fresh identifier for a particle created at `coord`.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's error unchanged:
    /// [`IdError::NotConfigured`], [`IdError::OutOfRange`] or
    /// [`IdError::GeneratorExhausted`].
    pub fn get_id(&self, coord: &Coordinate) -> Result<ParticleId, IdError> {
        let mut inner = self.lock();
        let id = inner.generator.next(coord)?;
        inner.issued += 1;
        tracing::trace!(%id, %coord, "particle id issued");
        Ok(id)
    }

    /// The bounds currently in effect.
    pub fn bounds(&self) -> IdBounds {
        self.lock().generator.bounds()
    }

    /// Whether both bounds have been configured.
    pub fn state(&self) -> ServiceState {
        self.bounds().state()
    }

    /// Name of the active strategy.
    pub fn generator_name(&self) -> String {
        self.lock().generator.name().to_string()
    }

    /// Number of IDs handed out so far.
    pub fn issued(&self) -> u64 {
        self.lock().issued
    }

    fn validated(axis: Axis, min: f64, max: f64) -> Result<Bounds, IdError> {
        Bounds::new(axis, min, max).inspect_err(|e| {
            tracing::warn!(%axis, min, max, error = %e, "bounds update rejected");
        })
    }

    /// Validation happens before any mutation, so a panic elsewhere
    /// cannot leave the guarded state half-updated; recover from poison.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for IdService {
    fn default() -> Self {
        Self::new(GeneratorKind::default())
    }
}

impl std::fmt::Debug for IdService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("IdService")
            .field("generator", &inner.generator.name())
            .field("bounds", &inner.generator.bounds())
            .field("issued", &inner.issued)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_test_utils::{coord, CountingGenerator};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn configured(kind: GeneratorKind) -> IdService {
        let service = IdService::new(kind);
        service.set_depth_limits(0.0, 100.0).unwrap();
        service.set_time_line(0.0, 240.0).unwrap();
        service
    }

    // ── Lifecycle ───────────────────────────────────────────────

    #[test]
    fn starts_uninitialized_and_refuses_ids() {
        let service = IdService::new(GeneratorKind::SpatioTemporal);
        assert_eq!(service.state(), ServiceState::Uninitialized);
        assert_eq!(
            service.get_id(&coord(30.0, 30.0, 0.0, 0.0)),
            Err(IdError::NotConfigured { axis: Axis::Depth })
        );

        service.set_depth_limits(0.0, 100.0).unwrap();
        assert_eq!(service.state(), ServiceState::Uninitialized);
        assert_eq!(
            service.get_id(&coord(30.0, 30.0, 0.0, 0.0)),
            Err(IdError::NotConfigured { axis: Axis::Time })
        );
        assert_eq!(service.issued(), 0);
    }

    #[test]
    fn configured_service_issues_ids() {
        let service = IdService::new(GeneratorKind::SpatioTemporal);
        service.set_depth_limits(0.0, 100.0).unwrap();
        service.set_time_line(0.0, 240.0).unwrap();
        assert_eq!(service.state(), ServiceState::BoundsConfigured);
        assert!(service.get_id(&coord(30.0, 30.0, 0.0, 0.0)).is_ok());
        assert_eq!(service.issued(), 1);
    }

    #[test]
    fn reconfiguration_stays_configured() {
        let service = configured(GeneratorKind::SpatioTemporal);
        service.set_time_line(0.0, 480.0).unwrap();
        assert_eq!(service.state(), ServiceState::BoundsConfigured);
        assert!(service.get_id(&coord(0.0, 0.0, 0.0, 400.0)).is_ok());
    }

    // ── Bounds ──────────────────────────────────────────────────

    #[test]
    fn setting_same_bounds_twice_is_idempotent() {
        let service = configured(GeneratorKind::SpatioTemporal);
        let first = service.get_id(&coord(30.0, 30.0, 0.0, 0.0)).unwrap();
        let before = service.bounds();

        service.set_depth_limits(0.0, 100.0).unwrap();
        assert_eq!(service.bounds(), before);

        let second = service.get_id(&coord(30.0, 30.0, 0.0, 0.0)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn inverted_bounds_rejected_and_previous_kept() {
        let service = configured(GeneratorKind::SpatioTemporal);
        let before = service.bounds();

        assert_eq!(
            service.set_depth_limits(10.0, 5.0),
            Err(IdError::InvalidBounds {
                axis: Axis::Depth,
                min: 10.0,
                max: 5.0
            })
        );
        assert!(matches!(
            service.set_time_line(240.0, 0.0),
            Err(IdError::InvalidBounds { axis: Axis::Time, .. })
        ));
        assert_eq!(service.bounds(), before);
    }

    #[test]
    fn rejected_first_configuration_leaves_axis_unset() {
        let service = IdService::new(GeneratorKind::Sequential);
        assert!(service.set_depth_limits(10.0, 5.0).is_err());
        assert_eq!(service.bounds().depth, None);
    }

    #[test]
    fn out_of_range_rejected() {
        let service = configured(GeneratorKind::SpatioTemporal);
        assert!(matches!(
            service.get_id(&coord(0.0, 0.0, 150.0, 10.0)),
            Err(IdError::OutOfRange {
                axis: Axis::Depth,
                value,
                ..
            }) if value == 150.0
        ));
        assert!(service.get_id(&coord(0.0, 0.0, 50.0, 120.0)).is_ok());
    }

    // ── Identifiers ─────────────────────────────────────────────

    #[test]
    fn radial_release_scenario() {
        let service = configured(GeneratorKind::SpatioTemporal);
        let centre = service.get_id(&coord(30.0, 30.0, 0.0, 0.0)).unwrap();
        let edge = service.get_id(&coord(30.0, 50.0, 0.0, 0.0)).unwrap();
        assert_ne!(centre, edge);

        let later = service.get_id(&coord(30.0, 30.0, 0.0, 1.0)).unwrap();
        assert!(later >= centre);
        assert!(later >= edge);
    }

    #[test]
    fn both_builtin_kinds_order_time_sorted_requests() {
        for kind in [GeneratorKind::SpatioTemporal, GeneratorKind::Sequential] {
            let service = configured(kind);
            let mut last = None;
            for step in 0..=240 {
                let id = service
                    .get_id(&coord(30.0, 30.0, 0.0, step as f64))
                    .unwrap();
                if let Some(prev) = last {
                    assert!(id > prev, "{kind}: {id} not after {prev}");
                }
                last = Some(id);
            }
        }
    }

    #[test]
    fn concurrent_requests_never_share_ids() {
        let service = Arc::new(configured(GeneratorKind::SpatioTemporal));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    (0..500)
                        .map(|i| {
                            service
                                .get_id(&coord(t as f64, i as f64, 0.0, (i % 3) as f64))
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
        assert_eq!(service.issued(), 8 * 500);
    }

    // ── Custom strategies ───────────────────────────────────────

    #[test]
    fn custom_generator_errors_propagate_unchanged() {
        let service = IdService::with_generator(Box::new(CountingGenerator::with_capacity(2)));
        service.set_depth_limits(0.0, 100.0).unwrap();
        service.set_time_line(0.0, 240.0).unwrap();
        assert_eq!(service.generator_name(), "counting");

        let c = coord(1.0, 1.0, 1.0, 1.0);
        service.get_id(&c).unwrap();
        service.get_id(&c).unwrap();
        assert_eq!(
            service.get_id(&c),
            Err(IdError::GeneratorExhausted {
                generator: "counting".into()
            })
        );
        assert_eq!(service.issued(), 2);
    }

    // ── Config ──────────────────────────────────────────────────

    #[test]
    fn from_default_config_is_ready() {
        let service = IdService::from_config(&IdServiceConfig::default()).unwrap();
        assert_eq!(service.state(), ServiceState::BoundsConfigured);
        assert_eq!(service.generator_name(), "spatio_temporal");
        let bounds = service.bounds();
        assert_eq!(bounds.depth.unwrap().max(), 100.0);
        assert_eq!(bounds.time.unwrap().max(), 240.0);
    }

    #[test]
    fn from_partial_config_stays_uninitialized() {
        let config = IdServiceConfig {
            time_line: None,
            ..IdServiceConfig::default()
        };
        let service = IdService::from_config(&config).unwrap();
        assert_eq!(service.state(), ServiceState::Uninitialized);
    }

    #[test]
    fn from_invalid_config_fails() {
        let config = IdServiceConfig {
            depth_limits: Some((100.0, 0.0)),
            ..IdServiceConfig::default()
        };
        assert!(matches!(
            IdService::from_config(&config),
            Err(IdError::InvalidBounds { axis: Axis::Depth, .. })
        ));
    }

    #[test]
    fn debug_reports_generator() {
        let service = configured(GeneratorKind::Sequential);
        let text = format!("{service:?}");
        assert!(text.contains("sequential"));
        assert!(text.contains("issued: 0"));
    }
}
