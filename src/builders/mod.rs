//! Builders to construct simulator components from configuration.

pub mod session_builder;

pub use session_builder::{build_session, BoxedAllocator};
