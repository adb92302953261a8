//! Per-participant availability over the weekly grid.
//!
//! An [`AvailabilitySet`] holds the slots one participant marked available,
//! bound to the grid it was built against. Mutation happens only through
//! explicit [`toggle`](AvailabilitySet::toggle); set algebra
//! ([`union`](AvailabilitySet::union), [`intersect`](AvailabilitySet::intersect))
//! produces fresh sets and rejects operands from unequal grids.
//!
//! Slots are stored in a `BTreeSet<DaySlot>`, so `slots()` yields canonical
//! grid order structurally -- no explicit sort is ever needed for
//! deterministic output.

use std::collections::BTreeSet;

use crate::error::{HeatmapError, Result};
use crate::grid::{DaySlot, TimeGrid};

/// One participant's marked slots over a bound [`TimeGrid`].
///
/// Invariants: no duplicate slots (set semantics) and no slot outside the
/// bound grid (enforced at construction and toggle time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySet {
    grid: TimeGrid,
    slots: BTreeSet<DaySlot>,
}

impl AvailabilitySet {
    /// Create an empty set bound to `grid`.
    pub fn new(grid: TimeGrid) -> Self {
        AvailabilitySet {
            grid,
            slots: BTreeSet::new(),
        }
    }

    /// Build a set from a snapshot of slots, validating every one against
    /// `grid`. Duplicates collapse silently (set semantics).
    ///
    /// # Errors
    /// Returns `HeatmapError::InvalidSlot` on the first out-of-grid slot;
    /// nothing is partially constructed.
    pub fn from_slots<I>(grid: TimeGrid, slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = DaySlot>,
    {
        let mut set = AvailabilitySet::new(grid);
        for slot in slots {
            set.check_slot(slot)?;
            set.slots.insert(slot);
        }
        Ok(set)
    }

    /// The grid this set was built against.
    pub fn grid(&self) -> TimeGrid {
        self.grid
    }

    /// Whether `slot` is marked available.
    pub fn contains(&self, slot: DaySlot) -> bool {
        self.slots.contains(&slot)
    }

    /// Number of marked slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is marked.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The marked slots, lazily, in canonical grid order. Finite and
    /// restartable.
    pub fn slots(&self) -> impl Iterator<Item = DaySlot> + Clone + '_ {
        self.slots.iter().copied()
    }

    /// Flip one slot in place: added if absent, removed if present.
    /// Applying the same toggle twice restores the original set.
    ///
    /// # Errors
    /// Returns `HeatmapError::InvalidSlot` for a slot outside the bound
    /// grid -- an invalid toggle is rejected, never silently ignored.
    pub fn toggle(&mut self, slot: DaySlot) -> Result<()> {
        self.check_slot(slot)?;
        if !self.slots.remove(&slot) {
            self.slots.insert(slot);
        }
        Ok(())
    }

    /// Slots present in `self` or `other`.
    ///
    /// # Errors
    /// Returns `HeatmapError::GridMismatch` when the operands were built
    /// against unequal grids.
    pub fn union(&self, other: &AvailabilitySet) -> Result<AvailabilitySet> {
        self.check_grid(other)?;
        Ok(AvailabilitySet {
            grid: self.grid,
            slots: self.slots.union(&other.slots).copied().collect(),
        })
    }

    /// Slots present in both `self` and `other`.
    ///
    /// # Errors
    /// Returns `HeatmapError::GridMismatch` when the operands were built
    /// against unequal grids.
    pub fn intersect(&self, other: &AvailabilitySet) -> Result<AvailabilitySet> {
        self.check_grid(other)?;
        Ok(AvailabilitySet {
            grid: self.grid,
            slots: self.slots.intersection(&other.slots).copied().collect(),
        })
    }

    fn check_slot(&self, slot: DaySlot) -> Result<()> {
        if self.grid.is_valid(slot) {
            Ok(())
        } else {
            Err(HeatmapError::InvalidSlot {
                day: slot.day,
                time_index: slot.time_index,
                slots_per_day: self.grid.slots_per_day(),
            })
        }
    }

    pub(crate) fn check_grid(&self, other: &AvailabilitySet) -> Result<()> {
        if self.grid == other.grid {
            Ok(())
        } else {
            Err(HeatmapError::GridMismatch {
                left: self.grid.slots_per_day(),
                right: other.grid.slots_per_day(),
            })
        }
    }
}
