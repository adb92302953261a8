//! # heatmap-core
//!
//! Weekly availability representation and multi-party overlap computation —
//! the engine behind an availability "heatmap".
//!
//! A week is discretized into a fixed [`TimeGrid`] of 7 days times a
//! configured number of slots per day. Each participant marks slots in an
//! [`AvailabilitySet`]; the overlap functions compute which slots work for a
//! pair or a group, how strongly (per-slot intensity), and what fraction of
//! availability overlaps. The engine is pure and synchronous: no I/O, no
//! shared state, every operation bounded by the grid size.
//!
//! ## Quick start
//!
//! ```rust
//! use heatmap_core::{compute_pairwise, AvailabilitySet, TimeLabels};
//!
//! let labels = TimeLabels::reference(); // 7 days x 13 hourly slots
//! let grid = labels.grid();
//!
//! let mut mine = AvailabilitySet::new(grid);
//! mine.toggle(labels.parse_slot("Monday 10:00 AM").unwrap()).unwrap();
//! mine.toggle(labels.parse_slot("Tuesday 9:00 AM").unwrap()).unwrap();
//!
//! let mut theirs = AvailabilitySet::new(grid);
//! theirs.toggle(labels.parse_slot("Monday 10:00 AM").unwrap()).unwrap();
//!
//! let result = compute_pairwise(&mine, &theirs).unwrap();
//! assert_eq!(result.overlap_percentage, 0.5);
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — the canonical week discretization ([`TimeGrid`], [`DaySlot`])
//! - [`availability`] — one participant's marked slots ([`AvailabilitySet`])
//! - [`overlap`] — pairwise and group overlap computation
//! - [`labels`] — human-readable labels and store wire shapes (host boundary)
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod grid;
pub mod labels;
pub mod overlap;

pub use availability::AvailabilitySet;
pub use error::{HeatmapError, Result};
pub use grid::{DaySlot, TimeGrid, DAYS};
pub use labels::{AvailabilityMap, AvailabilityRecord, OverlapSummary, TimeLabels};
pub use overlap::{compute_group, compute_group_unanimous, compute_pairwise, OverlapResult};
