//! Builders to construct a session from configuration.

use crate::config::{AllocationPolicyConfig, SimulatorConfig, StoreBackendConfig};
use crate::core::{
    Allocator, FarthestAllocator, LotError, NearestAllocator, ParkingLot, Session,
};
use crate::infra::InMemoryStore;

/// Allocator chosen at runtime from configuration.
pub type BoxedAllocator = Box<dyn Allocator + Send>;

/// Build a session from validated simulator configuration.
///
/// # Errors
///
/// [`LotError::Config`] when the configuration fails validation.
pub fn build_session(
    cfg: &SimulatorConfig,
) -> Result<Session<InMemoryStore, BoxedAllocator>, LotError> {
    cfg.validate().map_err(LotError::Config)?;

    let allocator: BoxedAllocator = match cfg.policy {
        AllocationPolicyConfig::Nearest => Box::new(NearestAllocator::new()),
        AllocationPolicyConfig::Farthest => Box::new(FarthestAllocator::new()),
    };
    let store = match cfg.store {
        StoreBackendConfig::InMemory => InMemoryStore::new(),
    };

    Ok(Session::new(ParkingLot::new(store, allocator)))
}
