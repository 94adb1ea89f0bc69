//! In-memory storage backend.

use crate::core::store::{Car, Slot, SlotStatus, Storage};
use crate::core::LotError;
use crate::infra::store::AttributeIndex;

/// Storage keeping all state in process memory: the slot array plus the
/// color and registration-number indexes.
///
/// Validation happens before any mutation, and index updates follow the
/// slot update in a fixed order, so a rejected call leaves every view
/// unchanged.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    size: usize,
    slots: Vec<Slot>,
    by_color: AttributeIndex,
    by_reg_num: AttributeIndex,
}

impl InMemoryStore {
    /// Create an unsized store; [`Storage::set_size`] allocates the slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn check_bounds(&self, slot: usize) -> Result<(), LotError> {
        if slot == 0 || slot > self.size {
            return Err(LotError::SlotOutOfRange(slot));
        }
        Ok(())
    }

    fn is_parked(&self, reg_num: &str) -> bool {
        self.by_reg_num
            .get(reg_num)
            .is_some_and(|members| !members.is_empty())
    }
}

impl Storage for InMemoryStore {
    fn set_size(&mut self, size: usize) {
        self.size = size;
        self.slots = (1..=size)
            .map(|id| Slot { id, occupant: None })
            .collect();
        self.by_color = AttributeIndex::new();
        self.by_reg_num = AttributeIndex::new();
    }

    fn park(&mut self, slot: usize, car: Car) -> Result<(), LotError> {
        self.check_bounds(slot)?;
        if self.slots[slot - 1].occupant.is_some() {
            return Err(LotError::SlotOccupied(slot));
        }
        if self.is_parked(&car.registration_number) {
            return Err(LotError::DuplicateRegistration(car.registration_number));
        }

        self.by_color.add(slot, &car.color)?;
        self.by_reg_num.add(slot, &car.registration_number)?;
        self.slots[slot - 1].occupant = Some(car);
        Ok(())
    }

    fn leave(&mut self, slot: usize) -> Result<Car, LotError> {
        self.check_bounds(slot)?;
        let car = self.slots[slot - 1]
            .occupant
            .take()
            .ok_or(LotError::SlotVacant(slot))?;
        self.by_color.remove(slot, &car.color)?;
        self.by_reg_num.remove(slot, &car.registration_number)?;
        Ok(car)
    }

    fn reg_nums_for_color(&self, color: &str) -> Vec<String> {
        self.by_color
            .membership(color)
            .into_iter()
            .filter_map(|slot| self.slots.get(slot - 1))
            .filter_map(|slot| slot.occupant.as_ref())
            .map(|car| car.registration_number.clone())
            .collect()
    }

    fn slots_for_color(&self, color: &str) -> Vec<usize> {
        self.by_color.membership(color)
    }

    fn slot_for_reg_num(&self, reg_num: &str) -> Option<usize> {
        self.by_reg_num.membership(reg_num).into_iter().next()
    }

    fn status(&self) -> Vec<SlotStatus> {
        self.slots
            .iter()
            .map(|slot| SlotStatus {
                slot: slot.id,
                occupant: slot.occupant.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(size: usize) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.set_size(size);
        store
    }

    #[test]
    fn park_occupies_a_free_slot() {
        let mut store = sized(6);
        store.park(1, Car::new("KA-01-HH-1234", "White")).unwrap();
        assert_eq!(store.slot_for_reg_num("KA-01-HH-1234"), Some(1));
    }

    #[test]
    fn park_rejects_duplicate_registration() {
        let mut store = sized(6);
        store.park(1, Car::new("KA-01-HH-1234", "White")).unwrap();
        assert_eq!(
            store.park(2, Car::new("KA-01-HH-1234", "White")),
            Err(LotError::DuplicateRegistration("KA-01-HH-1234".into()))
        );
    }

    #[test]
    fn park_rejects_occupied_slot() {
        let mut store = sized(6);
        store.park(1, Car::new("KA-01-HH-1234", "White")).unwrap();
        assert_eq!(
            store.park(1, Car::new("KA-01-HH-1235", "White")),
            Err(LotError::SlotOccupied(1))
        );
    }

    #[test]
    fn park_rejects_slot_beyond_capacity() {
        let mut store = sized(6);
        assert_eq!(
            store.park(7, Car::new("KA-01-HH-1234", "White")),
            Err(LotError::SlotOutOfRange(7))
        );
        assert_eq!(
            store.park(0, Car::new("KA-01-HH-1234", "White")),
            Err(LotError::SlotOutOfRange(0))
        );
    }

    #[test]
    fn rejected_park_leaves_state_unchanged() {
        let mut store = sized(6);
        store.park(1, Car::new("KA-01-HH-1234", "White")).unwrap();
        let before = store.status();
        let _ = store.park(2, Car::new("KA-01-HH-1234", "Black"));
        assert_eq!(store.status(), before);
        assert_eq!(store.slots_for_color("Black"), Vec::<usize>::new());
    }

    #[test]
    fn leave_returns_the_parked_car() {
        let mut store = sized(6);
        let car = Car::new("KA-01-HH-1234", "White");
        store.park(1, car.clone()).unwrap();
        assert_eq!(store.leave(1).unwrap(), car);
        assert_eq!(store.slot_for_reg_num("KA-01-HH-1234"), None);
        assert_eq!(store.reg_nums_for_color("White"), Vec::<String>::new());
    }

    #[test]
    fn leave_rejects_vacant_and_out_of_range_slots() {
        let mut store = sized(2);
        assert_eq!(store.leave(1), Err(LotError::SlotVacant(1)));
        assert_eq!(store.leave(3), Err(LotError::SlotOutOfRange(3)));
    }

    #[test]
    fn color_lookups_follow_park_order_not_slot_order() {
        let mut store = sized(6);
        // Park Whites out of slot order.
        store.park(5, Car::new("REG-5", "White")).unwrap();
        store.park(2, Car::new("REG-2", "White")).unwrap();
        store.park(3, Car::new("REG-3", "Black")).unwrap();
        assert_eq!(store.slots_for_color("White"), vec![5, 2]);
        assert_eq!(
            store.reg_nums_for_color("White"),
            vec!["REG-5".to_owned(), "REG-2".to_owned()]
        );
    }

    #[test]
    fn registration_can_return_after_leaving() {
        let mut store = sized(6);
        store.park(1, Car::new("KA-01-HH-1234", "White")).unwrap();
        store.leave(1).unwrap();
        store.park(2, Car::new("KA-01-HH-1234", "White")).unwrap();
        assert_eq!(store.slot_for_reg_num("KA-01-HH-1234"), Some(2));
    }

    #[test]
    fn status_reports_every_slot_in_order() {
        let mut store = sized(3);
        store.park(2, Car::new("KA-01-HH-1234", "White")).unwrap();
        let status = store.status();
        assert_eq!(status.len(), 3);
        assert_eq!(status[0].slot, 1);
        assert!(status[0].occupant.is_none());
        assert_eq!(
            status[1].occupant,
            Some(Car::new("KA-01-HH-1234", "White"))
        );
        assert!(status[2].occupant.is_none());
    }

    #[test]
    fn set_size_discards_prior_state() {
        let mut store = sized(2);
        store.park(1, Car::new("KA-01-HH-1234", "White")).unwrap();
        store.set_size(4);
        assert_eq!(store.slot_for_reg_num("KA-01-HH-1234"), None);
        assert_eq!(store.status().len(), 4);
    }
}
