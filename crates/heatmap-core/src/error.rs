//! Error types for heatmap-core operations.

use thiserror::Error;

/// Errors that can occur while building grids, mutating availability sets,
/// or computing overlap.
///
/// All variants are local, synchronous, and recoverable: a host catches them
/// at the conversion/call boundary and either rejects the offending input or
/// falls back to an empty availability set. No operation leaves partial state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeatmapError {
    /// A (day, time_index) coordinate outside the configured grid.
    #[error("invalid slot {day} index {time_index}: grid has {slots_per_day} slots per day")]
    InvalidSlot {
        day: chrono::Weekday,
        time_index: u8,
        slots_per_day: u8,
    },

    /// Two operands were built against different grid configurations.
    /// Carries the slots-per-day of each side.
    #[error("grid mismatch: {left} slots per day vs {right}")]
    GridMismatch { left: u8, right: u8 },

    /// A time label not present in the grid's label vocabulary (host-side
    /// conversion failure, e.g. "10:30 AM" against an hourly grid).
    #[error("unknown time label: {0:?}")]
    UnknownTimeLabel(String),

    /// A day name that does not parse as a weekday.
    #[error("unknown day label: {0:?}")]
    UnknownDayLabel(String),

    /// Group overlap requires a quorum of at least 1.
    #[error("invalid quorum {0}: must be at least 1")]
    InvalidQuorum(usize),

    /// A grid configured with an unusable slots-per-day count (0, or a
    /// label vocabulary too large to index).
    #[error("grid must have between 1 and 255 slots per day, got {0}")]
    InvalidGridSize(usize),
}

/// Convenience alias used throughout heatmap-core.
pub type Result<T> = std::result::Result<T, HeatmapError>;
