//! Spatio-temporal particle ID generation for Drift simulations.
//!
//! Particle-construction code asks an [`IdService`] for an identifier
//! every time a particle is materialised at some `(x, y, depth, time)`.
//! The service wraps one [`IdGenerator`](drift_core::IdGenerator)
//! strategy, chosen at construction through [`GeneratorKind`], and
//! serialises every request behind a single lock.
//!
//! # Initialisation order
//!
//! ```text
//! IdService::new(kind)        Uninitialized
//!   └─ set_depth_limits()     (still Uninitialized)
//!       └─ set_time_line()    BoundsConfigured ── get_id() ...
//! ```
//!
//! [`IdService::from_config`] performs the same sequence from an
//! [`IdServiceConfig`]. [`global::install`] additionally stores the
//! service in a process-wide slot for subsystems that cannot be handed
//! an explicit reference.
//!
//! # Strategies
//!
//! - [`SpatioTemporalIdGenerator`]: time-bucket-major IDs that sort with
//!   creation time. The default.
//! - [`SequentialIdGenerator`]: a plain counter gated by the same bounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod global;
pub mod kind;
pub mod sequential;
pub mod service;
pub mod spatio_temporal;

pub use config::IdServiceConfig;
pub use kind::GeneratorKind;
pub use sequential::SequentialIdGenerator;
pub use service::IdService;
pub use spatio_temporal::{SpatioTemporalIdGenerator, SpatioTemporalParts};
