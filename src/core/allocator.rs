//! Slot allocation policies.
//!
//! The allocator only knows the set of free slot numbers; it has no view of
//! storage. The [`ParkingLot`](crate::core::ParkingLot) aggregate is its
//! sole caller and validates every slot state transition through storage
//! before touching the free pool, so the pool can never collect duplicate
//! entries from an out-of-order or repeated release.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Policy interface for choosing which free slot to hand out next.
///
/// Implementations expose peek/commit semantics: `select_candidate` may be
/// called any number of times before the matching `mark_allocated`.
pub trait Allocator {
    /// Populate the free pool with slots 1..=size.
    fn set_size(&mut self, size: usize);

    /// Total capacity. Zero means the lot has not been created.
    fn size(&self) -> usize;

    /// The slot that would be allocated next, without removing it from the
    /// pool. `None` when the lot is full.
    fn select_candidate(&self) -> Option<usize>;

    /// Commit the candidate returned by the preceding `select_candidate`,
    /// removing it from the free pool.
    fn mark_allocated(&mut self);

    /// Return `slot` to the free pool.
    fn mark_available(&mut self, slot: usize);
}

impl<A: Allocator + ?Sized> Allocator for Box<A> {
    fn set_size(&mut self, size: usize) {
        (**self).set_size(size);
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn select_candidate(&self) -> Option<usize> {
        (**self).select_candidate()
    }

    fn mark_allocated(&mut self) {
        (**self).mark_allocated();
    }

    fn mark_available(&mut self, slot: usize) {
        (**self).mark_available(slot);
    }
}

/// Allocates the lowest-numbered free slot, closest to the lot entrance.
///
/// Backed by a binary min-heap over free slot numbers: peek is O(1),
/// commit and release are O(log n). Slot numbers are unique, so ties
/// cannot occur.
#[derive(Debug, Default)]
pub struct NearestAllocator {
    size: usize,
    free: BinaryHeap<Reverse<usize>>,
}

impl NearestAllocator {
    /// Create an allocator with an empty pool; `set_size` populates it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Allocator for NearestAllocator {
    fn set_size(&mut self, size: usize) {
        self.size = size;
        self.free = (1..=size).map(Reverse).collect();
    }

    fn size(&self) -> usize {
        self.size
    }

    fn select_candidate(&self) -> Option<usize> {
        self.free.peek().map(|Reverse(slot)| *slot)
    }

    fn mark_allocated(&mut self) {
        self.free.pop();
    }

    fn mark_available(&mut self, slot: usize) {
        self.free.push(Reverse(slot));
    }
}

/// Allocates the highest-numbered free slot, farthest from the entrance.
///
/// The mirror policy of [`NearestAllocator`], handed out when operators
/// want entrance slots held back for short stays. Exists to keep the
/// policy seam honest; a max-heap is `BinaryHeap`'s natural order.
#[derive(Debug, Default)]
pub struct FarthestAllocator {
    size: usize,
    free: BinaryHeap<usize>,
}

impl FarthestAllocator {
    /// Create an allocator with an empty pool; `set_size` populates it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Allocator for FarthestAllocator {
    fn set_size(&mut self, size: usize) {
        self.size = size;
        self.free = (1..=size).collect();
    }

    fn size(&self) -> usize {
        self.size
    }

    fn select_candidate(&self) -> Option<usize> {
        self.free.peek().copied()
    }

    fn mark_allocated(&mut self) {
        self.free.pop();
    }

    fn mark_available(&mut self, slot: usize) {
        self.free.push(slot);
    }
}
