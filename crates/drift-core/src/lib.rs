//! Core types and traits for the Drift particle-tracking framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every identifier strategy and its consumers:
//! space-time coordinates, particle identifiers, validity bounds, the
//! error taxonomy, and the [`IdGenerator`] strategy trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod id;
pub mod traits;

pub use bounds::{Axis, Bounds, IdBounds, ServiceState};
pub use error::IdError;
pub use id::{Coordinate, ParticleId};
pub use traits::IdGenerator;
