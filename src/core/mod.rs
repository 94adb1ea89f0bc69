//! Core domain: errors, storage abstraction, allocation policies, the lot
//! aggregate, and the command-processing session.

pub mod allocator;
pub mod error;
pub mod lot;
pub mod session;
pub mod store;

pub use allocator::{Allocator, FarthestAllocator, NearestAllocator};
pub use error::{AppResult, LotError};
pub use lot::{ParkOutcome, ParkingLot};
pub use session::{format_status, Session};
pub use store::{Car, Slot, SlotStatus, Storage};
