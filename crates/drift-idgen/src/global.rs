//! Process-wide service slot.
//!
//! Code that is handed an explicit `&IdService` should use it. This slot
//! exists for subsystems that are constructed far from the run's setup
//! and still need the one shared instance. It is written once; there is
//! no teardown other than process exit.

use std::sync::OnceLock;

use drift_core::IdError;

use crate::config::IdServiceConfig;
use crate::service::IdService;

static SERVICE: OnceLock<IdService> = OnceLock::new();

/// Build a service from `config` and make it the process-wide instance.
///
/// # Errors
///
/// - [`IdError::InvalidBounds`] if the config is invalid; the slot stays
///   empty and a later install may still succeed.
/// - [`IdError::AlreadyInstalled`] if a service was installed before.
pub fn install(config: &IdServiceConfig) -> Result<&'static IdService, IdError> {
    let service = IdService::from_config(config)?;
    SERVICE.set(service).map_err(|_| {
        tracing::warn!("id service already installed; ignoring second install");
        IdError::AlreadyInstalled
    })?;
    let installed = SERVICE.get().ok_or(IdError::AlreadyInstalled)?;
    tracing::info!(
        generator = %config.generator,
        state = ?installed.state(),
        "process-wide id service installed"
    );
    Ok(installed)
}

/// The process-wide service, if one has been installed.
pub fn global() -> Option<&'static IdService> {
    SERVICE.get()
}
