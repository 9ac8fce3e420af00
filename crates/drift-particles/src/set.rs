//! The [`ParticleSet`] container: release and execution.

use std::ops::Index;

use drift_core::{Coordinate, ParticleId};
use drift_idgen::IdService;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ParticleError;
use crate::execute::{ExecuteConfig, ExecuteSummary};
use crate::field::VelocityField;
use crate::kernel::Kernel;
use crate::particle::Particle;
use crate::trajectory::TrajectoryLog;

/// Slack when comparing accumulated step times against output and end times.
const TIME_EPSILON: f64 = 1e-6;

/// An ordered collection of particles.
///
/// Every constructor asks the [`IdService`] for one ID per particle, in
/// release order. If a request fails part-way, the IDs already issued
/// stay consumed and no set is returned.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release one particle at each coordinate.
    ///
    /// # Errors
    ///
    /// [`ParticleError::EmptyRelease`] if `coords` is empty, or
    /// [`ParticleError::Id`] if the service rejects a coordinate.
    pub fn from_list(service: &IdService, coords: &[Coordinate]) -> Result<Self, ParticleError> {
        if coords.is_empty() {
            return Err(ParticleError::EmptyRelease);
        }
        let mut set = Self {
            particles: Vec::with_capacity(coords.len()),
        };
        for coord in coords {
            set.add(service, *coord)?;
        }
        tracing::debug!(particles = set.len(), "particle set released");
        Ok(set)
    }

    /// Release `size` particles evenly spaced from `start` to `finish`
    /// inclusive, all at the same depth and time.
    ///
    /// A single particle is placed at `start`.
    ///
    /// # Errors
    ///
    /// As for [`from_list`](Self::from_list).
    pub fn from_line(
        service: &IdService,
        size: usize,
        start: (f64, f64),
        finish: (f64, f64),
        depth: f64,
        time: f64,
    ) -> Result<Self, ParticleError> {
        let coords: Vec<_> = (0..size)
            .map(|i| {
                let t = if size > 1 {
                    i as f64 / (size - 1) as f64
                } else {
                    0.0
                };
                Coordinate::new(
                    start.0 + t * (finish.0 - start.0),
                    start.1 + t * (finish.1 - start.1),
                    depth,
                    time,
                )
            })
            .collect();
        Self::from_list(service, &coords)
    }

    /// Release `size` particles uniformly at random inside a box.
    ///
    /// Positions come from a ChaCha8 RNG seeded with `seed`, so the same
    /// seed always yields the same release.
    ///
    /// # Errors
    ///
    /// [`ParticleError::InvalidRegion`] if a range is inverted or not
    /// finite; otherwise as for [`from_list`](Self::from_list).
    pub fn random_in_box(
        service: &IdService,
        size: usize,
        x_range: (f64, f64),
        y_range: (f64, f64),
        depth: f64,
        time: f64,
        seed: u64,
    ) -> Result<Self, ParticleError> {
        for (name, (lo, hi)) in [("x", x_range), ("y", y_range)] {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(ParticleError::InvalidRegion {
                    reason: format!("{name} range [{lo}, {hi}] must be finite with min <= max"),
                });
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let coords: Vec<_> = (0..size)
            .map(|_| {
                let u: f64 = rng.random();
                let v: f64 = rng.random();
                Coordinate::new(
                    x_range.0 + u * (x_range.1 - x_range.0),
                    y_range.0 + v * (y_range.1 - y_range.0),
                    depth,
                    time,
                )
            })
            .collect();
        Self::from_list(service, &coords)
    }

    /// Release a single particle at `coord` and append it.
    ///
    /// # Errors
    ///
    /// [`ParticleError::Id`] if the service rejects the coordinate; the
    /// set is unchanged in that case.
    pub fn add(
        &mut self,
        service: &IdService,
        coord: Coordinate,
    ) -> Result<ParticleId, ParticleError> {
        let id = service.get_id(&coord)?;
        self.particles.push(Particle::new(id, coord));
        Ok(id)
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the set holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particle at `index`, in release order.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Particle carrying `id`, if any.
    pub fn find(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id() == id)
    }

    /// Iterate particles in release order.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Earliest particle time, or `None` for an empty set.
    pub fn start_time(&self) -> Option<f64> {
        self.particles.iter().map(|p| p.time).reduce(f64::min)
    }

    /// Advance every particle with `kernel` through `field` until
    /// `config.endtime`.
    ///
    /// The run starts at the earliest particle time and takes steps of
    /// `config.dt`, the last one shortened to land on `endtime`. A
    /// particle released later than the current step time waits and
    /// joins at the first step boundary at or after its release.
    ///
    /// When `output` is given, released particles are sampled at the
    /// start, every `config.interval` seconds, and at `endtime`. A
    /// particle is not sampled before its release time.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExecuteConfig::validate`] failure. An empty
    /// set succeeds with zero steps.
    pub fn execute<K, F>(
        &mut self,
        kernel: &K,
        field: &F,
        config: &ExecuteConfig,
        mut output: Option<&mut TrajectoryLog>,
    ) -> Result<ExecuteSummary, ParticleError>
    where
        K: Kernel + ?Sized,
        F: VelocityField,
    {
        let Some(start) = self.start_time() else {
            return Ok(ExecuteSummary {
                kernel: kernel.name().to_string(),
                steps: 0,
                start: config.endtime,
                end: config.endtime,
            });
        };
        config.validate(start)?;

        let mut time = start;
        let mut next_output = start;
        let mut steps = 0u64;
        loop {
            let finished = time + TIME_EPSILON >= config.endtime;
            if let Some(log) = output.as_deref_mut() {
                if finished || time + TIME_EPSILON >= next_output {
                    let released = self
                        .particles
                        .iter()
                        .filter(|p| p.time <= time + TIME_EPSILON);
                    log.record(time, released);
                    while next_output <= time + TIME_EPSILON {
                        next_output += config.interval;
                    }
                }
            }
            if finished {
                break;
            }
            let dt = config.dt.min(config.endtime - time);
            for particle in &mut self.particles {
                if particle.time <= time + TIME_EPSILON {
                    kernel.advance(particle, field, dt);
                    particle.time = time + dt;
                }
            }
            time += dt;
            steps += 1;
        }

        tracing::info!(
            kernel = kernel.name(),
            particles = self.particles.len(),
            steps,
            start,
            end = time,
            "particle set executed"
        );
        Ok(ExecuteSummary {
            kernel: kernel.name().to_string(),
            steps,
            start,
            end: time,
        })
    }
}

impl Index<usize> for ParticleSet {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
