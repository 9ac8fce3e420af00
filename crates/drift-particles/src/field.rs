//! Analytic velocity fields.
//!
//! Two reference fields for exercising kernels without a gridded data
//! source:
//!
//! - [`RadialRotation`]: solid-body rotation about a centre point, with a
//!   closed-form trajectory for checking advection.
//! - [`UniformFlow`]: constant velocity everywhere.

use std::f64::consts::PI;

/// A horizontal velocity field sampled at any space-time point.
///
/// Velocities are in horizontal units per second.
pub trait VelocityField {
    /// Velocity `(u, v)` at `(x, y, depth, time)`.
    fn velocity(&self, x: f64, y: f64, depth: f64, time: f64) -> (f64, f64);
}

/// Clockwise solid-body rotation about `centre` with a fixed period.
///
/// `u = ω (y - y0)`, `v = -ω (x - x0)` with `ω = 2π / period`. A particle
/// at the centre never moves; every other particle circles it at
/// constant radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialRotation {
    /// Centre of rotation `(x0, y0)`.
    pub centre: (f64, f64),
    /// Rotation period in seconds.
    pub period: f64,
}

impl RadialRotation {
    /// One revolution per day.
    pub const DAY: f64 = 86_400.0;

    /// Rotation about `centre` with the given period in seconds.
    pub fn new(centre: (f64, f64), period: f64) -> Self {
        Self { centre, period }
    }

    /// Angular velocity `2π / period`.
    pub fn omega(&self) -> f64 {
        2.0 * PI / self.period
    }

    /// Exact position after `age` seconds of a particle released at `start`.
    pub fn exact_position(&self, start: (f64, f64), age: f64) -> (f64, f64) {
        let (x0, y0) = self.centre;
        let dx = start.0 - x0;
        let dy = start.1 - y0;
        let (sin, cos) = (self.omega() * age).sin_cos();
        (x0 + dx * cos + dy * sin, y0 - dx * sin + dy * cos)
    }
}

impl Default for RadialRotation {
    /// Centre `(30, 30)`, one revolution per day.
    fn default() -> Self {
        Self::new((30.0, 30.0), Self::DAY)
    }
}

impl VelocityField for RadialRotation {
    fn velocity(&self, x: f64, y: f64, _depth: f64, _time: f64) -> (f64, f64) {
        let omega = self.omega();
        (omega * (y - self.centre.1), -omega * (x - self.centre.0))
    }
}

/// The same velocity everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UniformFlow {
    /// x velocity.
    pub u: f64,
    /// y velocity.
    pub v: f64,
}

impl VelocityField for UniformFlow {
    fn velocity(&self, _x: f64, _y: f64, _depth: f64, _time: f64) -> (f64, f64) {
        (self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_stationary() {
        let field = RadialRotation::default();
        assert_eq!(field.velocity(30.0, 30.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn exact_position_matches_closed_form() {
        // Release at (30, 50): x = 20 sin(ωt) + 30, y = 20 cos(ωt) + 30.
        let field = RadialRotation::default();
        for age in [0.0, 3_600.0, 21_600.0, 61_200.0] {
            let (x, y) = field.exact_position((30.0, 50.0), age);
            let phase = 2.0 * PI * age / RadialRotation::DAY;
            assert!((x - (20.0 * phase.sin() + 30.0)).abs() < 1e-9);
            assert!((y - (20.0 * phase.cos() + 30.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn velocity_is_tangent_to_radius() {
        let field = RadialRotation::default();
        let (u, v) = field.velocity(40.0, 45.0, 0.0, 0.0);
        let (rx, ry) = (10.0, 15.0);
        assert!((u * rx + v * ry).abs() < 1e-12);
    }
}
