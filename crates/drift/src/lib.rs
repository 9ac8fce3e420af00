//! Drift: ocean particle tracking with spatio-temporal particle identifiers.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Drift sub-crates. For most users, adding `drift` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use drift::prelude::*;
//!
//! // Construct, then configure depth and time bounds, then serve requests.
//! let ids = IdService::new(GeneratorKind::SpatioTemporal);
//! ids.set_depth_limits(0.0, 100.0).unwrap();
//! ids.set_time_line(0.0, 240.0).unwrap();
//!
//! // One particle at the centre of the rotation, one on its periphery.
//! let mut pset = ParticleSet::from_line(&ids, 2, (30.0, 30.0), (30.0, 50.0), 0.0, 0.0).unwrap();
//! assert_ne!(pset[0].id(), pset[1].id());
//!
//! // A particle released later always gets a later identifier.
//! let later = ids.get_id(&Coordinate::surface(30.0, 30.0, 1.0)).unwrap();
//! assert!(later > pset[1].id());
//!
//! // Advect for one hour in 5-minute steps.
//! let config = ExecuteConfig::new(3_600.0, 300.0);
//! pset.execute(&AdvectionRk4, &RadialRotation::default(), &config, None).unwrap();
//! assert_eq!(pset[0].x, 30.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `drift-core` | Coordinates, IDs, bounds, errors, the generator trait |
//! | [`idgen`] | `drift-idgen` | Generator strategies, `IdService`, process-wide slot |
//! | [`particles`] | `drift-particles` | Particle sets, velocity fields, kernels, trajectories |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`drift-core`).
///
/// Contains [`types::Coordinate`], [`types::ParticleId`], the bounds types,
/// [`types::IdError`], and the [`types::IdGenerator`] strategy trait.
pub use drift_core as types;

/// Identifier strategies and the service façade (`drift-idgen`).
///
/// [`idgen::IdService`] is the entry point; [`idgen::global`] holds the
/// optional process-wide instance.
pub use drift_idgen as idgen;

/// Particle release, advection, and trajectory recording (`drift-particles`).
pub use drift_particles as particles;

/// Common imports for typical Drift usage.
///
/// ```rust
/// use drift::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use drift_core::{Axis, Coordinate, IdBounds, IdGenerator, ParticleId, ServiceState};

    // Errors
    pub use drift_core::IdError;
    pub use drift_particles::ParticleError;

    // Identifier service
    pub use drift_idgen::{GeneratorKind, IdService, IdServiceConfig};

    // Particles
    pub use drift_particles::{
        AdvectionEuler, AdvectionRk4, ExecuteConfig, Kernel, ParticleSet, RadialRotation,
        TrajectoryLog, VelocityField,
    };
}
