//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use drift_core::IdGenerator;

use crate::sequential::SequentialIdGenerator;
use crate::spatio_temporal::SpatioTemporalIdGenerator;

/// The built-in identifier strategies.
///
/// Passed to [`IdService::new`](crate::IdService::new) to pick the
/// strategy once, at construction. Custom strategies go through
/// [`IdService::with_generator`](crate::IdService::with_generator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// [`SpatioTemporalIdGenerator`]: IDs sort with creation time.
    #[default]
    SpatioTemporal,
    /// [`SequentialIdGenerator`]: IDs sort with request order.
    Sequential,
}

impl GeneratorKind {
    /// Instantiate a fresh, unconfigured generator of this kind.
    pub fn build(self) -> Box<dyn IdGenerator> {
        match self {
            Self::SpatioTemporal => Box::new(SpatioTemporalIdGenerator::new()),
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
        }
    }

    /// The strategy name, matching [`IdGenerator::name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::SpatioTemporal => SpatioTemporalIdGenerator::NAME,
            Self::Sequential => SequentialIdGenerator::NAME,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownGeneratorKind {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownGeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown id generator '{}' (expected 'spatio_temporal' or 'sequential')",
            self.name
        )
    }
}

impl std::error::Error for UnknownGeneratorKind {}

impl FromStr for GeneratorKind {
    type Err = UnknownGeneratorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spatio_temporal" | "spatiotemporal" => Ok(Self::SpatioTemporal),
            "sequential" => Ok(Self::Sequential),
            _ => Err(UnknownGeneratorKind {
                name: s.to_string(),
            }),
        }
    }
}
