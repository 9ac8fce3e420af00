//! Radial rotation scenario.
//!
//! Two particles are released on a line through a solid-body rotation
//! with a one-day period: one at the centre, one 20 units out. After 17
//! hours of RK4 advection with 5-minute steps, the centre particle must
//! not have moved and the peripheral particle must match the analytic
//! solution.

use drift_core::ServiceState;
use drift_idgen::{IdService, IdServiceConfig, SpatioTemporalIdGenerator};
use drift_particles::{AdvectionRk4, ExecuteConfig, ParticleSet, RadialRotation, TrajectoryLog};

const HOUR: f64 = 3_600.0;
const MINUTE: f64 = 60.0;

fn allclose(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-8 + 1e-5 * expected.abs()
}

fn rotation_run() -> (IdService, ParticleSet, TrajectoryLog) {
    let service = IdService::from_config(&IdServiceConfig::default()).unwrap();
    assert_eq!(service.state(), ServiceState::BoundsConfigured);

    let mut pset =
        ParticleSet::from_line(&service, 2, (30.0, 30.0), (30.0, 50.0), 0.0, 0.0).unwrap();
    let mut log = TrajectoryLog::new();
    let config = ExecuteConfig::new(17.0 * HOUR, 5.0 * MINUTE).with_interval(HOUR);
    let summary = pset
        .execute(&AdvectionRk4, &RadialRotation::default(), &config, Some(&mut log))
        .unwrap();
    assert_eq!(summary.steps, 17 * 12);
    assert_eq!(summary.end, 17.0 * HOUR);
    (service, pset, log)
}

#[test]
fn centre_particle_stays_put() {
    let (_, pset, _) = rotation_run();
    assert_eq!(pset[0].x, 30.0);
    assert_eq!(pset[0].y, 30.0);
}

#[test]
fn peripheral_particle_matches_analytic_solution() {
    let (_, pset, _) = rotation_run();
    let field = RadialRotation::default();
    let (x, y) = field.exact_position((30.0, 50.0), pset[1].time);
    assert!(allclose(pset[1].x, x), "x {} vs {}", pset[1].x, x);
    assert!(allclose(pset[1].y, y), "y {} vs {}", pset[1].y, y);
}

#[test]
fn hourly_trajectory_tracks_the_circle() {
    let (_, pset, log) = rotation_run();
    assert_eq!(log.times().len(), 18);

    let field = RadialRotation::default();
    for sample in log.samples(pset[1].id()) {
        let (x, y) = field.exact_position((30.0, 50.0), sample.time);
        assert!(allclose(sample.x, x));
        assert!(allclose(sample.y, y));
    }
}

#[test]
fn release_ids_are_distinct_and_time_zero() {
    let (service, pset, _) = rotation_run();
    assert_eq!(service.issued(), 2);
    assert_ne!(pset[0].id(), pset[1].id());
    for p in &pset {
        let parts = SpatioTemporalIdGenerator::decode(p.id());
        assert_eq!(parts.time_bucket, 0);
        assert_eq!(parts.depth_level, 0);
    }
}
