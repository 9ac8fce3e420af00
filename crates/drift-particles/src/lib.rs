//! Particle sets and reference advection for Drift simulations.
//!
//! This crate is the particle-construction side of the identifier
//! service: every particle it materialises obtains its [`ParticleId`]
//! from an explicitly passed [`IdService`](drift_idgen::IdService).
//!
//! # Pipeline
//!
//! ```text
//! ParticleSet::from_line / from_list / random_in_box   (one get_id per particle)
//!   └─ execute(kernel, field, ExecuteConfig, log)
//!        ├─ Kernel::advance per particle per step
//!        └─ TrajectoryLog::record every output interval
//! ```
//!
//! The velocity fields here are analytic; gridded fields and
//! interpolation belong elsewhere.
//!
//! [`ParticleId`]: drift_core::ParticleId

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod execute;
pub mod field;
pub mod kernel;
pub mod particle;
pub mod set;
pub mod trajectory;

pub use error::ParticleError;
pub use execute::{ExecuteConfig, ExecuteSummary};
pub use field::{RadialRotation, UniformFlow, VelocityField};
pub use kernel::{AdvectionEuler, AdvectionRk4, Kernel};
pub use particle::Particle;
pub use set::ParticleSet;
pub use trajectory::{TrajectoryLog, TrajectorySample};
