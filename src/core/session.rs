//! Command processing against a shared lot.
//!
//! A [`Session`] is the single serialization point of the simulator: one
//! mutex wraps the lot aggregate, and every command executes entirely
//! inside one acquisition. Parsing happens outside the lock, nothing
//! suspends inside it, and the guard is dropped on every exit path, so
//! commands are totally ordered and readers always see a consistent
//! snapshot. A single input stream is inherently serial, but a real lot
//! has several entry and exit gates issuing commands against the same
//! state, hence the lock.

use parking_lot::Mutex;

use crate::core::allocator::Allocator;
use crate::core::error::LotError;
use crate::core::lot::{ParkingLot, ParkOutcome};
use crate::core::store::{Car, SlotStatus, Storage};
use crate::parser::{Command, CommandKind};

/// Header line of the `status` table.
const STATUS_HEADER: &str = "Slot No.    Registration No    Colour";

/// Sentinel text for empty lookup results.
const NOT_FOUND: &str = "Not found";

/// An explicitly constructed processing session owning all mutable
/// simulator state. Created once at startup, dropped at exit.
pub struct Session<S, A> {
    lot: Mutex<ParkingLot<S, A>>,
}

impl<S: Storage, A: Allocator> Session<S, A> {
    /// Wrap a lot aggregate into a session.
    pub fn new(lot: ParkingLot<S, A>) -> Self {
        Self {
            lot: Mutex::new(lot),
        }
    }

    /// Execute one parsed command and produce its response text.
    ///
    /// The parser has already validated verb and arity, so argument
    /// indices below are safe without further bound checks.
    ///
    /// # Errors
    ///
    /// Any [`LotError`] raised by validation or by the lot aggregate.
    /// Errors never leave the lot in an inconsistent state.
    pub fn execute(&self, command: &Command) -> Result<String, LotError> {
        let mut lot = self.lot.lock();
        match command.kind {
            CommandKind::CreateParkingLot => {
                let size: i64 = command.args[0]
                    .parse()
                    .map_err(|_| LotError::InvalidSlotId)?;
                let size = usize::try_from(size).map_err(|_| LotError::SizeInvalid)?;
                if size == 0 {
                    return Err(LotError::SizeInvalid);
                }
                lot.create(size)?;
                tracing::info!(slots = size, "parking lot created");
                Ok(format!("Created a parking lot with {size} slots"))
            }
            CommandKind::Park => {
                let car = Car::new(&command.args[0], &command.args[1]);
                match lot.park(car)? {
                    ParkOutcome::Allocated(slot) => {
                        tracing::debug!(slot, reg = %command.args[0], "car parked");
                        Ok(format!("Allocated slot number: {slot}"))
                    }
                    ParkOutcome::LotFull => {
                        tracing::warn!(reg = %command.args[0], "lot full, park rejected");
                        Ok("Sorry, parking lot is full".to_owned())
                    }
                }
            }
            CommandKind::Leave => {
                let slot: usize = command.args[0]
                    .parse()
                    .map_err(|_| LotError::InvalidSlotId)?;
                let car = lot.leave(slot)?;
                tracing::debug!(slot, reg = %car.registration_number, "car left");
                Ok(format!("Slot number {slot} is free"))
            }
            CommandKind::Status => Ok(format_status(&lot.status()?)),
            CommandKind::RegNumsForColor => {
                let reg_nums = lot.reg_nums_for_color(&command.args[0])?;
                Ok(join_or_not_found(reg_nums))
            }
            CommandKind::SlotsForColor => {
                let slots = lot.slots_for_color(&command.args[0])?;
                Ok(join_or_not_found(
                    slots.into_iter().map(|slot| slot.to_string()),
                ))
            }
            CommandKind::SlotForRegNum => {
                match lot.slot_for_reg_num(&command.args[0])? {
                    Some(slot) => Ok(slot.to_string()),
                    None => Ok(NOT_FOUND.to_owned()),
                }
            }
        }
    }
}

fn join_or_not_found<I>(values: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let joined = values.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_FOUND.to_owned()
    } else {
        joined
    }
}

/// Render the `status` table: a fixed header, then one row per occupied
/// slot with the slot number left-aligned to 11 columns and the
/// registration number to 18.
#[must_use]
pub fn format_status(rows: &[SlotStatus]) -> String {
    let mut out = String::from(STATUS_HEADER);
    for row in rows {
        if let Some(car) = &row.occupant {
            out.push('\n');
            out.push_str(&format!(
                "{:<11} {:<18} {}",
                row.slot, car.registration_number, car.color
            ));
        }
    }
    out
}
