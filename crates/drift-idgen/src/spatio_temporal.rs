//! Time-bucket-major identifier strategy.
//!
//! Each ID packs three fields into 64 bits:
//!
//! ```text
//!  63            48 47                                   8 7          0
//! ┌────────────────┬──────────────────────────────────────┬────────────┐
//! │ time bucket 16 │            sequence 40               │ depth lvl 8│
//! └────────────────┴──────────────────────────────────────┴────────────┘
//! ```
//!
//! The time bucket is the creation time quantised over the configured
//! time line, so IDs created in a later bucket always compare greater.
//! Once a bucket has been issued it keeps the span of times it holds,
//! and a later time line cannot place an earlier time above it.
//! The sequence counts IDs within one bucket and is what makes IDs
//! unique. The depth level is a coarse locality tag in the low bits; it
//! never participates in uniqueness.

use drift_core::{Bounds, Coordinate, IdBounds, IdError, IdGenerator, ParticleId};

const TIME_BITS: u32 = 16;
const SEQUENCE_BITS: u32 = 40;
const DEPTH_BITS: u32 = 8;

const SEQUENCE_SHIFT: u32 = DEPTH_BITS;
const TIME_SHIFT: u32 = DEPTH_BITS + SEQUENCE_BITS;

/// Highest time bucket index.
pub const MAX_TIME_BUCKET: u16 = u16::MAX;
/// Highest depth level.
pub const MAX_DEPTH_LEVEL: u8 = u8::MAX;
/// Highest sequence number within a single time bucket.
pub const MAX_SEQUENCE: u64 = (1 << SEQUENCE_BITS) - 1;

const _: () = assert!(TIME_BITS + SEQUENCE_BITS + DEPTH_BITS == 64);

/// Fields packed into a [`SpatioTemporalIdGenerator`] identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpatioTemporalParts {
    /// Creation time quantised over the time line, `0..=MAX_TIME_BUCKET`.
    pub time_bucket: u16,
    /// Position of the ID within its time bucket.
    pub sequence: u64,
    /// Creation depth quantised over the depth range, `0..=MAX_DEPTH_LEVEL`.
    pub depth_level: u8,
}

/// Identifier strategy that sorts IDs by creation time.
///
/// # Ordering
///
/// - IDs from a strictly later time bucket are greater than every ID
///   from an earlier bucket, whatever order the requests arrive in.
/// - Within one bucket, IDs increase in submission order, not time
///   order. Two requests that share a bucket and arrive latest-time
///   first receive IDs in the reverse of their time order. Requests
///   submitted in non-decreasing time order always receive increasing
///   IDs.
///
/// Bucket order survives reconfiguring the time line. A time that would
/// quantise past a bucket holding strictly later times is placed below
/// that bucket, and one that would quantise under a bucket holding
/// strictly earlier times is placed in it. Per-bucket counters are kept,
/// so uniqueness survives as well.
///
/// # Exhaustion
///
/// A bucket holds [`MAX_SEQUENCE`]` + 1` (about 1.1e12) IDs. Only past
/// that does `next()` return [`IdError::GeneratorExhausted`].
#[derive(Debug, Default)]
pub struct SpatioTemporalIdGenerator {
    bounds: IdBounds,
    // Sorted by bucket. Spans never overlap, so also sorted by time.
    buckets: Vec<BucketSpan>,
}

/// Times seen in one occupied bucket and its next sequence number.
#[derive(Clone, Copy, Debug)]
struct BucketSpan {
    bucket: u16,
    earliest: f64,
    latest: f64,
    next_sequence: u64,
}

impl SpatioTemporalIdGenerator {
    /// Strategy name reported in diagnostics and errors.
    pub const NAME: &'static str = "spatio_temporal";

    /// Create a generator with no bounds configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split an identifier issued by this strategy into its fields.
    pub fn decode(id: ParticleId) -> SpatioTemporalParts {
        let raw = id.raw();
        SpatioTemporalParts {
            time_bucket: (raw >> TIME_SHIFT) as u16,
            sequence: (raw >> SEQUENCE_SHIFT) & MAX_SEQUENCE,
            depth_level: (raw & u64::from(MAX_DEPTH_LEVEL)) as u8,
        }
    }

    /// Pack fields into an identifier.
    pub fn encode(parts: SpatioTemporalParts) -> ParticleId {
        debug_assert!(parts.sequence <= MAX_SEQUENCE);
        ParticleId::from_raw(
            (u64::from(parts.time_bucket) << TIME_SHIFT)
                | ((parts.sequence & MAX_SEQUENCE) << SEQUENCE_SHIFT)
                | u64::from(parts.depth_level),
        )
    }

    /// Number of time buckets that have issued at least one ID.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.len()
    }

    fn quantise(bounds: &Bounds, value: f64, levels: f64) -> f64 {
        (bounds.fraction(value) * levels).floor()
    }

    /// Bucket for `time`, given its quantisation under the current time
    /// line. Under a single time line this is `quantised` unchanged.
    fn place(&self, time: f64, quantised: u16) -> u16 {
        // Highest bucket holding a strictly earlier time.
        let floor = match self.buckets.partition_point(|span| span.earliest < time) {
            0 => 0,
            n => self.buckets[n - 1].bucket,
        };
        // Lowest bucket holding a strictly later time.
        let ceiling = self
            .buckets
            .get(self.buckets.partition_point(|span| span.latest <= time))
            .map(|span| span.bucket);

        let bucket = quantised.max(floor);
        match ceiling {
            Some(ceiling) if bucket > ceiling && ceiling > floor => ceiling - 1,
            Some(ceiling) if bucket > ceiling => ceiling,
            _ => bucket,
        }
    }
}

impl IdGenerator for SpatioTemporalIdGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn configure_depth(&mut self, bounds: Bounds) {
        self.bounds.depth = Some(bounds);
    }

    fn configure_time(&mut self, bounds: Bounds) {
        self.bounds.time = Some(bounds);
    }

    fn bounds(&self) -> IdBounds {
        self.bounds
    }

    fn next(&mut self, coord: &Coordinate) -> Result<ParticleId, IdError> {
        let (depth, time) = self.bounds.check(coord)?;

        // fraction() is in [0, 1], so the casts cannot overflow.
        let quantised = Self::quantise(&time, coord.time, f64::from(MAX_TIME_BUCKET)) as u16;
        let depth_level = Self::quantise(&depth, coord.depth, f64::from(MAX_DEPTH_LEVEL)) as u8;
        let time_bucket = self.place(coord.time, quantised);

        let index = match self
            .buckets
            .binary_search_by_key(&time_bucket, |span| span.bucket)
        {
            Ok(index) => index,
            Err(index) => {
                self.buckets.insert(
                    index,
                    BucketSpan {
                        bucket: time_bucket,
                        earliest: coord.time,
                        latest: coord.time,
                        next_sequence: 0,
                    },
                );
                index
            }
        };
        let span = &mut self.buckets[index];
        if span.next_sequence > MAX_SEQUENCE {
            return Err(IdError::GeneratorExhausted {
                generator: Self::NAME.to_string(),
            });
        }
        let sequence = span.next_sequence;
        span.next_sequence += 1;
        span.earliest = span.earliest.min(coord.time);
        span.latest = span.latest.max(coord.time);

        Ok(Self::encode(SpatioTemporalParts {
            time_bucket,
            sequence,
            depth_level,
        }))
    }
}
