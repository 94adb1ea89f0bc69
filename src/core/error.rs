//! Error types for lot operations.

use thiserror::Error;

use crate::collections::SetError;

/// Errors produced by the lot aggregate, storage, and command processing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LotError {
    /// Slot number is outside 1..=size.
    #[error("slot {0} exceeds available parking")]
    SlotOutOfRange(usize),
    /// A car is already parked in the slot.
    #[error("slot {0} already occupied")]
    SlotOccupied(usize),
    /// No car is parked in the slot.
    #[error("slot {0} not occupied")]
    SlotVacant(usize),
    /// A car with the same registration number is already parked.
    #[error("registration number {0} already parked")]
    DuplicateRegistration(String),
    /// Requested lot size is zero or negative.
    #[error("parking lot size must be a positive number")]
    SizeInvalid,
    /// The lot has already been created.
    #[error("parking lot size already set")]
    SizeAlreadySet,
    /// The lot has not been created yet.
    #[error("parking lot size not set")]
    SizeNotSet,
    /// Slot or size argument is not a valid number.
    #[error("invalid slot id")]
    InvalidSlotId,
    /// Simulator configuration was rejected.
    #[error("config invalid: {0}")]
    Config(String),
    /// A secondary index diverged from slot state. Unreachable as long as
    /// all mutations go through the lot aggregate.
    #[error("index out of sync: {0}")]
    Index(#[from] SetError),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
