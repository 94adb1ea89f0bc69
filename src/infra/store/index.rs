//! Attribute-keyed secondary index.

use std::collections::HashMap;

use crate::collections::{LinkedSet, SetError};

/// Maps an attribute value (a color, a registration number) to the ordered
/// set of slot numbers currently holding that value.
///
/// Reads are pure: looking up an absent key never creates an entry. An
/// entry may outlive its last member after removals; callers observe
/// results only through [`membership`](Self::membership), which reports it
/// as empty.
#[derive(Debug, Default)]
pub struct AttributeIndex {
    entries: HashMap<String, LinkedSet>,
}

impl AttributeIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `slot` under `key`, creating the entry if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::MemberExists`] if `slot` is already indexed
    /// under `key`, a caller contract violation surfaced rather than
    /// ignored.
    pub fn add(&mut self, slot: usize, key: &str) -> Result<(), SetError> {
        self.entries.entry(key.to_owned()).or_default().add(slot)
    }

    /// Remove `slot` from the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::MemberNotExists`] if the key or the member is
    /// absent.
    pub fn remove(&mut self, slot: usize, key: &str) -> Result<(), SetError> {
        self.entries
            .get_mut(key)
            .ok_or(SetError::MemberNotExists(slot))?
            .remove(slot)
    }

    /// True if an entry exists for `key`, even one emptied by removals.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The member set for `key`, if an entry exists.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LinkedSet> {
        self.entries.get(key)
    }

    /// Slot numbers indexed under `key` in insertion order; empty if the
    /// key was never created.
    #[must_use]
    pub fn membership(&self, key: &str) -> Vec<usize> {
        self.get(key).map(LinkedSet::members).unwrap_or_default()
    }
}
