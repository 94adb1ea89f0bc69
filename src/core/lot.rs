//! The parking-lot aggregate.
//!
//! Storage and allocator duplicate one domain fact from opposite sides: the
//! set of free slots. Instead of trusting callers to update both in
//! lock-step, the aggregate owns both structures and is their only mutator.
//! Storage is always updated first; the allocator only moves after storage
//! succeeds, so no error path can leave the two views out of sync.

use crate::core::allocator::Allocator;
use crate::core::error::LotError;
use crate::core::store::{Car, SlotStatus, Storage};

/// Outcome of a park request. A full lot is a normal, expected result,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkOutcome {
    /// The car was parked in the contained slot.
    Allocated(usize),
    /// No free slot is available.
    LotFull,
}

/// Fixed-capacity collection of slots plus the policy choosing among them.
///
/// Sized exactly once via [`create`](Self::create); every other operation
/// fails with [`LotError::SizeNotSet`] until then.
#[derive(Debug)]
pub struct ParkingLot<S, A> {
    storage: S,
    allocator: A,
}

impl<S: Storage, A: Allocator> ParkingLot<S, A> {
    /// Assemble a lot from a storage backend and an allocation policy.
    pub fn new(storage: S, allocator: A) -> Self {
        Self { storage, allocator }
    }

    /// Total capacity. Zero means the lot has not been created.
    pub fn size(&self) -> usize {
        self.allocator.size()
    }

    fn ensure_sized(&self) -> Result<(), LotError> {
        if self.allocator.size() == 0 {
            return Err(LotError::SizeNotSet);
        }
        Ok(())
    }

    /// Create the lot with `size` slots, all free.
    ///
    /// # Errors
    ///
    /// [`LotError::SizeInvalid`] for a zero size, or
    /// [`LotError::SizeAlreadySet`] if the lot was created before.
    pub fn create(&mut self, size: usize) -> Result<(), LotError> {
        if size == 0 {
            return Err(LotError::SizeInvalid);
        }
        if self.allocator.size() > 0 {
            return Err(LotError::SizeAlreadySet);
        }
        self.allocator.set_size(size);
        self.storage.set_size(size);
        Ok(())
    }

    /// Park `car` in the slot picked by the allocation policy.
    ///
    /// Storage is updated first; the candidate is only committed to the
    /// allocator after storage accepts the car, so a rejected park (for
    /// example a duplicate registration number) leaves the free pool
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`LotError::SizeNotSet`] before [`create`](Self::create), or any
    /// storage rejection from [`Storage::park`].
    pub fn park(&mut self, car: Car) -> Result<ParkOutcome, LotError> {
        self.ensure_sized()?;
        let Some(slot) = self.allocator.select_candidate() else {
            return Ok(ParkOutcome::LotFull);
        };
        self.storage.park(slot, car)?;
        self.allocator.mark_allocated();
        Ok(ParkOutcome::Allocated(slot))
    }

    /// Free `slot` and return the car that was parked there.
    ///
    /// The slot is returned to the free pool only after storage confirms
    /// it was occupied, so releasing a vacant or out-of-range slot cannot
    /// corrupt the pool with duplicate entries.
    ///
    /// # Errors
    ///
    /// [`LotError::SizeNotSet`] before [`create`](Self::create), or any
    /// storage rejection from [`Storage::leave`].
    pub fn leave(&mut self, slot: usize) -> Result<Car, LotError> {
        self.ensure_sized()?;
        let car = self.storage.leave(slot)?;
        self.allocator.mark_available(slot);
        Ok(car)
    }

    /// Registration numbers of parked cars with `color`, earliest parked
    /// first.
    ///
    /// # Errors
    ///
    /// [`LotError::SizeNotSet`] before [`create`](Self::create).
    pub fn reg_nums_for_color(&self, color: &str) -> Result<Vec<String>, LotError> {
        self.ensure_sized()?;
        Ok(self.storage.reg_nums_for_color(color))
    }

    /// Slot numbers of parked cars with `color`, earliest parked first.
    ///
    /// # Errors
    ///
    /// [`LotError::SizeNotSet`] before [`create`](Self::create).
    pub fn slots_for_color(&self, color: &str) -> Result<Vec<usize>, LotError> {
        self.ensure_sized()?;
        Ok(self.storage.slots_for_color(color))
    }

    /// Slot holding the car with `reg_num`, or `None` if it is not parked.
    ///
    /// # Errors
    ///
    /// [`LotError::SizeNotSet`] before [`create`](Self::create).
    pub fn slot_for_reg_num(&self, reg_num: &str) -> Result<Option<usize>, LotError> {
        self.ensure_sized()?;
        Ok(self.storage.slot_for_reg_num(reg_num))
    }

    /// Occupancy of every slot in slot order.
    ///
    /// # Errors
    ///
    /// [`LotError::SizeNotSet`] before [`create`](Self::create).
    pub fn status(&self) -> Result<Vec<SlotStatus>, LotError> {
        self.ensure_sized()?;
        Ok(self.storage.status())
    }
}
