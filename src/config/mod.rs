//! Configuration models for the simulator.

pub mod simulator;

pub use simulator::{AllocationPolicyConfig, SimulatorConfig, StoreBackendConfig};
