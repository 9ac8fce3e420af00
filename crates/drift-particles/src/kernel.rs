//! Advection kernels.

use crate::field::VelocityField;
use crate::particle::Particle;

/// Moves one particle through a velocity field for one step.
///
/// Kernels update horizontal position only. The caller owns the clock:
/// [`ParticleSet::execute`](crate::ParticleSet::execute) advances
/// `particle.time` after each call.
pub trait Kernel {
    /// Kernel name for diagnostics.
    fn name(&self) -> &str;

    /// Advance `particle` by `dt` seconds, starting at `particle.time`.
    fn advance(&self, particle: &mut Particle, field: &dyn VelocityField, dt: f64);
}

/// Forward Euler step.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvectionEuler;

impl Kernel for AdvectionEuler {
    fn name(&self) -> &str {
        "AdvectionEuler"
    }

    fn advance(&self, particle: &mut Particle, field: &dyn VelocityField, dt: f64) {
        let (u, v) = field.velocity(particle.x, particle.y, particle.depth, particle.time);
        particle.x += u * dt;
        particle.y += v * dt;
    }
}

/// Classic fourth-order Runge–Kutta step.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvectionRk4;

impl Kernel for AdvectionRk4 {
    fn name(&self) -> &str {
        "AdvectionRK4"
    }

    fn advance(&self, particle: &mut Particle, field: &dyn VelocityField, dt: f64) {
        let (x, y, depth, t) = (particle.x, particle.y, particle.depth, particle.time);
        let half = 0.5 * dt;

        let (u1, v1) = field.velocity(x, y, depth, t);
        let (u2, v2) = field.velocity(x + u1 * half, y + v1 * half, depth, t + half);
        let (u3, v3) = field.velocity(x + u2 * half, y + v2 * half, depth, t + half);
        let (u4, v4) = field.velocity(x + u3 * dt, y + v3 * dt, depth, t + dt);

        particle.x += (u1 + 2.0 * u2 + 2.0 * u3 + u4) * dt / 6.0;
        particle.y += (v1 + 2.0 * v2 + 2.0 * v3 + v4) * dt / 6.0;
    }
}
