//! In-memory trajectory recording.

use drift_core::ParticleId;
use indexmap::IndexMap;

use crate::particle::Particle;

/// One recorded particle position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    /// Horizontal x.
    pub x: f64,
    /// Horizontal y.
    pub y: f64,
    /// Depth.
    pub depth: f64,
    /// Sample time in seconds.
    pub time: f64,
}

/// Trajectories keyed by particle ID, in first-seen order.
///
/// Filled by [`ParticleSet::execute`](crate::ParticleSet::execute) once
/// per output interval.
#[derive(Clone, Debug, Default)]
pub struct TrajectoryLog {
    times: Vec<f64>,
    tracks: IndexMap<ParticleId, Vec<TrajectorySample>>,
}

impl TrajectoryLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current position of every particle at `time`.
    pub fn record<'a>(&mut self, time: f64, particles: impl IntoIterator<Item = &'a Particle>) {
        self.times.push(time);
        for p in particles {
            self.tracks.entry(p.id()).or_default().push(TrajectorySample {
                x: p.x,
                y: p.y,
                depth: p.depth,
                time,
            });
        }
    }

    /// Output times, in recording order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of distinct particles seen.
    pub fn particle_count(&self) -> usize {
        self.tracks.len()
    }

    /// Samples for one particle, oldest first. Empty if never recorded.
    pub fn samples(&self, id: ParticleId) -> &[TrajectorySample] {
        self.tracks.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(id, samples)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &[TrajectorySample])> {
        self.tracks.iter().map(|(id, s)| (*id, s.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::Coordinate;

    #[test]
    fn records_per_particle_in_order() {
        let a = Particle::new(ParticleId::from_raw(9), Coordinate::surface(1.0, 2.0, 0.0));
        let mut b = Particle::new(ParticleId::from_raw(4), Coordinate::surface(3.0, 4.0, 0.0));

        let mut log = TrajectoryLog::new();
        log.record(0.0, [&a, &b]);
        b.x = 5.0;
        log.record(10.0, [&b]);

        assert_eq!(log.times(), &[0.0, 10.0]);
        assert_eq!(log.particle_count(), 2);
        assert_eq!(log.samples(a.id()).len(), 1);
        let track = log.samples(b.id());
        assert_eq!(track.len(), 2);
        assert_eq!(track[1].x, 5.0);
        assert_eq!(track[1].time, 10.0);

        let order: Vec<_> = log.iter().map(|(id, _)| id.raw()).collect();
        assert_eq!(order, vec![9, 4]);
        assert!(log.samples(ParticleId::from_raw(100)).is_empty());
    }
}
