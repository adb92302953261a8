//! The weekly time grid -- canonical discretization of a week into slots.
//!
//! A week is a fixed lattice of 7 days times a configured number of slots per
//! day. Every participant's availability is defined over the same grid;
//! comparing sets from different grid configurations is invalid and rejected
//! with `GridMismatch` by the operations that combine sets.

use chrono::Weekday;

use crate::error::{HeatmapError, Result};

/// The seven days of the week in canonical order (Monday first).
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One addressable weekly time cell: a day plus an index into that day's
/// slot row. Ordering is canonical grid order: day ascending Monday through
/// Sunday, then time index ascending. All deterministic iteration in the
/// engine relies on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaySlot {
    pub day: Weekday,
    pub time_index: u8,
}

impl Ord for DaySlot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.day.num_days_from_monday(), self.time_index)
            .cmp(&(other.day.num_days_from_monday(), other.time_index))
    }
}

impl PartialOrd for DaySlot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Immutable grid configuration: 7 days, `slots_per_day` slots each.
///
/// Cheap to copy and share; read-only queries never fail. Two grids are
/// interchangeable iff they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    pub(crate) slots_per_day: u8,
}

impl TimeGrid {
    /// Create a grid with the given number of slots per day.
    ///
    /// # Errors
    /// Returns `HeatmapError::InvalidGridSize` when `slots_per_day` is 0.
    pub fn new(slots_per_day: u8) -> Result<Self> {
        if slots_per_day == 0 {
            return Err(HeatmapError::InvalidGridSize(0));
        }
        Ok(TimeGrid { slots_per_day })
    }

    /// The grid dimensions as `(days, slots_per_day)`. Days is always 7.
    pub fn size(&self) -> (u8, u8) {
        (DAYS.len() as u8, self.slots_per_day)
    }

    /// Number of slots per day.
    pub fn slots_per_day(&self) -> u8 {
        self.slots_per_day
    }

    /// Total number of cells in the grid (7 x slots_per_day).
    pub fn cell_count(&self) -> usize {
        DAYS.len() * self.slots_per_day as usize
    }

    /// Whether `slot` lies within this grid.
    pub fn is_valid(&self, slot: DaySlot) -> bool {
        slot.time_index < self.slots_per_day
    }

    /// Construct a validated slot.
    ///
    /// # Errors
    /// Returns `HeatmapError::InvalidSlot` when `time_index` is out of range.
    pub fn slot(&self, day: Weekday, time_index: u8) -> Result<DaySlot> {
        let slot = DaySlot { day, time_index };
        if self.is_valid(slot) {
            Ok(slot)
        } else {
            Err(HeatmapError::InvalidSlot {
                day,
                time_index,
                slots_per_day: self.slots_per_day,
            })
        }
    }

    /// Every slot in the grid, lazily, in canonical order (day ascending
    /// Monday first, then time index ascending). The iterator is finite and
    /// restartable (`Clone`).
    pub fn all_slots(&self) -> impl Iterator<Item = DaySlot> + Clone {
        let slots_per_day = self.slots_per_day;
        DAYS.into_iter().flat_map(move |day| {
            (0..slots_per_day).map(move |time_index| DaySlot { day, time_index })
        })
    }
}
