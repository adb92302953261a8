//! Host boundary: human-readable labels and store-compatible wire shapes.
//!
//! The engine works on canonical `DaySlot` indices; labels exist only here,
//! at the edge. A [`TimeLabels`] vocabulary maps each `time_index` to the
//! label users see (e.g. `"10:00 AM"`), and day names round-trip through
//! `chrono::Weekday`. The wire shapes mirror what an availability store
//! exposes: a profile's `availability` field is a day-name to time-label-list
//! mapping, and an overlap query result carries `overlap_percentage` plus
//! `common_times` as `"<Day> <Time>"` strings. Both translate losslessly to
//! and from the engine's types.
//!
//! Conversion is strict: any unknown day or time label rejects the whole
//! load rather than silently dropping slots and corrupting overlap math.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilitySet;
use crate::error::{HeatmapError, Result};
use crate::grid::{DaySlot, TimeGrid, DAYS};
use crate::overlap::OverlapResult;

/// A stored availability field: day name to ordered list of time labels.
pub type AvailabilityMap = BTreeMap<String, Vec<String>>;

/// The stored profile shape: an opaque participant id plus the availability
/// field. The engine never persists this itself; hosts round-trip it to the
/// availability store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub participant_id: String,
    #[serde(default)]
    pub availability: AvailabilityMap,
}

/// An overlap query result in store wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapSummary {
    /// Real number in [0, 1].
    pub overlap_percentage: f64,
    /// `"<Day> <Time>"` strings in canonical grid order.
    pub common_times: Vec<String>,
}

/// Full English name for a weekday, as used in stored availability keys.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a day name ("Monday", case-insensitive; chrono also accepts the
/// three-letter form).
///
/// # Errors
/// Returns `HeatmapError::UnknownDayLabel` when the name does not parse.
pub fn parse_day(name: &str) -> Result<Weekday> {
    name.parse::<Weekday>()
        .map_err(|_| HeatmapError::UnknownDayLabel(name.to_string()))
}

/// An ordered time-label vocabulary, one label per grid `time_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabels {
    labels: Vec<String>,
    grid: TimeGrid,
}

impl TimeLabels {
    /// Build a vocabulary from ordered labels. The label at position `i`
    /// names `time_index` `i`.
    ///
    /// # Errors
    /// Returns `HeatmapError::InvalidGridSize` when the list is empty or has
    /// more entries than a grid can index (255).
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() || labels.len() > u8::MAX as usize {
            return Err(HeatmapError::InvalidGridSize(labels.len()));
        }
        let grid = TimeGrid::new(labels.len() as u8)?;
        Ok(TimeLabels { labels, grid })
    }

    /// The reference vocabulary: 13 hourly slots, 9:00 AM through 9:00 PM.
    pub fn reference() -> Self {
        TimeLabels {
            labels: [
                "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM",
                "4:00 PM", "5:00 PM", "6:00 PM", "7:00 PM", "8:00 PM", "9:00 PM",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            grid: TimeGrid { slots_per_day: 13 },
        }
    }

    /// The grid this vocabulary defines (7 days x one slot per label).
    pub fn grid(&self) -> TimeGrid {
        self.grid
    }

    /// The labels in `time_index` order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The `time_index` for a label.
    ///
    /// # Errors
    /// Returns `HeatmapError::UnknownTimeLabel` when the label is not in the
    /// vocabulary.
    pub fn index_of(&self, label: &str) -> Result<u8> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| i as u8)
            .ok_or_else(|| HeatmapError::UnknownTimeLabel(label.to_string()))
    }

    /// The label for a `time_index`, if in range.
    pub fn label(&self, time_index: u8) -> Option<&str> {
        self.labels.get(time_index as usize).map(String::as_str)
    }

    /// Parse a combined `"<Day> <Time>"` string (e.g. `"Monday 10:00 AM"`)
    /// into a slot.
    ///
    /// # Errors
    /// `UnknownDayLabel` when the leading word is not a day name;
    /// `UnknownTimeLabel` when the remainder is not in the vocabulary (or
    /// the string has no separator at all).
    pub fn parse_slot(&self, combined: &str) -> Result<DaySlot> {
        let Some((day, time)) = combined.split_once(' ') else {
            return Err(HeatmapError::UnknownTimeLabel(combined.to_string()));
        };
        let day = parse_day(day)?;
        let time_index = self.index_of(time)?;
        Ok(DaySlot { day, time_index })
    }

    /// Render a slot as `"<Day> <Time>"`.
    ///
    /// # Errors
    /// Returns `HeatmapError::InvalidSlot` when the slot's index falls
    /// outside this vocabulary (the slot came from a different grid).
    pub fn format_slot(&self, slot: DaySlot) -> Result<String> {
        let label = self
            .label(slot.time_index)
            .ok_or(HeatmapError::InvalidSlot {
                day: slot.day,
                time_index: slot.time_index,
                slots_per_day: self.labels.len() as u8,
            })?;
        Ok(format!("{} {}", day_name(slot.day), label))
    }

    /// Convert a stored day-to-time-labels mapping into an availability set
    /// over this vocabulary's grid.
    ///
    /// Strict by design: one unknown day or time label fails the whole
    /// conversion (`UnknownDayLabel` / `UnknownTimeLabel`) so a corrupt
    /// profile never feeds partial data into overlap math. Duplicate labels
    /// collapse under set semantics.
    pub fn decode_availability(&self, map: &AvailabilityMap) -> Result<AvailabilitySet> {
        let mut set = AvailabilitySet::new(self.grid());
        for (day, times) in map {
            let day = parse_day(day)?;
            for time in times {
                let time_index = self.index_of(time)?;
                let slot = DaySlot { day, time_index };
                if !set.contains(slot) {
                    set.toggle(slot)?;
                }
            }
        }
        Ok(set)
    }

    /// Convert an availability set back to the stored mapping. Only days
    /// with at least one slot appear; each day's labels come out in
    /// canonical time order. Lossless inverse of
    /// [`decode_availability`](Self::decode_availability).
    ///
    /// # Errors
    /// Returns `HeatmapError::GridMismatch` when the set was built against a
    /// different grid than this vocabulary defines.
    pub fn encode_availability(&self, set: &AvailabilitySet) -> Result<AvailabilityMap> {
        if set.grid() != self.grid() {
            return Err(HeatmapError::GridMismatch {
                left: self.grid().slots_per_day(),
                right: set.grid().slots_per_day(),
            });
        }
        let mut map = AvailabilityMap::new();
        for day in DAYS {
            let times: Vec<String> = set
                .slots()
                .filter(|slot| slot.day == day)
                .filter_map(|slot| self.label(slot.time_index))
                .map(String::from)
                .collect();
            if !times.is_empty() {
                map.insert(day_name(day).to_string(), times);
            }
        }
        Ok(map)
    }

    /// Translate an [`OverlapResult`] into the store wire shape.
    ///
    /// # Errors
    /// Returns `HeatmapError::InvalidSlot` when a common slot's index falls
    /// outside this vocabulary.
    pub fn summarize(&self, result: &OverlapResult) -> Result<OverlapSummary> {
        let common_times = result
            .common_slots
            .iter()
            .map(|&slot| self.format_slot(slot))
            .collect::<Result<Vec<String>>>()?;
        Ok(OverlapSummary {
            overlap_percentage: result.overlap_percentage,
            common_times,
        })
    }

    /// Parse a summary's `common_times` back into canonical slots.
    ///
    /// # Errors
    /// Propagates `UnknownDayLabel` / `UnknownTimeLabel` from
    /// [`parse_slot`](Self::parse_slot).
    pub fn parse_common_times(&self, summary: &OverlapSummary) -> Result<Vec<DaySlot>> {
        summary
            .common_times
            .iter()
            .map(|s| self.parse_slot(s))
            .collect()
    }
}
