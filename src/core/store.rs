//! Storage abstraction and the records it deals in.

use serde::{Deserialize, Serialize};

use crate::core::LotError;

/// A parked vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Registration/license identifier, unique among currently parked cars.
    pub registration_number: String,
    /// Body color. May contain spaces ("Crimson Red").
    pub color: String,
}

impl Car {
    /// Build a car from its registration number and color.
    pub fn new(registration_number: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            registration_number: registration_number.into(),
            color: color.into(),
        }
    }
}

/// A numbered parking space. Slot 1 is nearest the entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// 1-based slot number; identity is position.
    pub id: usize,
    /// The parked car, if any.
    pub occupant: Option<Car>,
}

/// Occupancy record for one slot, as reported by [`Storage::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    /// 1-based slot number.
    pub slot: usize,
    /// The parked car, or `None` for a free slot.
    pub occupant: Option<Car>,
}

/// Source of truth for slot occupancy and the attribute indexes over it.
///
/// Implementations keep three consistent views: by slot, by color, and by
/// registration number. Mutations are validated before any state changes,
/// so a failed call leaves all three views untouched.
pub trait Storage {
    /// Allocate `size` slots numbered 1..=size, all free, unconditionally
    /// discarding prior state. Callers enforce set-exactly-once.
    fn set_size(&mut self, size: usize);

    /// Park `car` in `slot`.
    ///
    /// # Errors
    ///
    /// [`LotError::SlotOutOfRange`] if `slot` is outside 1..=size,
    /// [`LotError::SlotOccupied`] if the slot already holds a car, or
    /// [`LotError::DuplicateRegistration`] if a car with the same
    /// registration number is currently parked anywhere in the lot.
    fn park(&mut self, slot: usize, car: Car) -> Result<(), LotError>;

    /// Remove and return the car parked in `slot`.
    ///
    /// # Errors
    ///
    /// [`LotError::SlotOutOfRange`] if `slot` is outside 1..=size, or
    /// [`LotError::SlotVacant`] if no car is parked there.
    fn leave(&mut self, slot: usize) -> Result<Car, LotError>;

    /// Registration numbers of parked cars with `color`, earliest parked
    /// first. Empty if none match.
    fn reg_nums_for_color(&self, color: &str) -> Vec<String>;

    /// Slot numbers of parked cars with `color`, earliest parked first.
    /// Empty if none match.
    fn slots_for_color(&self, color: &str) -> Vec<usize>;

    /// Slot holding the car with `reg_num`, or `None` if it is not parked.
    fn slot_for_reg_num(&self, reg_num: &str) -> Option<usize>;

    /// Occupancy of every slot 1..=size, in slot order.
    fn status(&self) -> Vec<SlotStatus>;
}
