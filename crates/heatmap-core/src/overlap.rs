//! Overlap computation across availability sets.
//!
//! The only non-trivial algorithm in the core. Two operations:
//!
//! - [`compute_pairwise`] -- how much of a *reference* participant's
//!   availability works for one comparison participant.
//! - [`compute_group`] -- which slots work for at least `quorum` of N
//!   participants, with per-slot intensity counts.
//!
//! Both are pure and synchronous: they read their arguments, allocate a fresh
//! [`OverlapResult`], and touch no shared state. Every operation is bounded by
//! the grid size (7 x slots_per_day cells), and for fixed inputs the result is
//! bit-for-bit reproducible -- all intermediate structures are ordered
//! (BTree), so `common_slots` comes out in canonical grid order without a
//! hash-traversal dependency.

use std::collections::BTreeMap;

use crate::availability::AvailabilitySet;
use crate::error::{HeatmapError, Result};
use crate::grid::DaySlot;

/// A derived, immutable description of the relationship between availability
/// sets. Not persisted; hosts translate it to their wire shape at the
/// boundary (see [`crate::labels`]).
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapResult {
    /// Slots shared by the reference and every comparison set (pairwise) or
    /// by at least `quorum` sets (group), in canonical grid order.
    pub common_slots: Vec<DaySlot>,
    /// Pairwise: |common| / |reference|. Group: |common| / |union|.
    /// Always in [0, 1]; 0 when the denominator set is empty.
    pub overlap_percentage: f64,
    /// Number of input sets containing each slot, over the union of all
    /// involved slots. Pairwise exposes only the common slots at intensity 1.
    pub intensity: BTreeMap<DaySlot, usize>,
}

impl OverlapResult {
    fn zero() -> Self {
        OverlapResult {
            common_slots: Vec::new(),
            overlap_percentage: 0.0,
            intensity: BTreeMap::new(),
        }
    }
}

/// Pairwise overlap between a reference and a comparison set.
///
/// The percentage divides by the *reference's* size, not the union: it
/// answers "what fraction of my availability overlaps with them", so swapping
/// the arguments generally yields a different percentage. An empty reference
/// (or comparison) produces the zero result -- no division by zero.
///
/// # Errors
/// Returns `HeatmapError::GridMismatch` when the two sets were built against
/// unequal grids.
pub fn compute_pairwise(
    reference: &AvailabilitySet,
    comparison: &AvailabilitySet,
) -> Result<OverlapResult> {
    let common = reference.intersect(comparison)?;
    let common_slots: Vec<DaySlot> = common.slots().collect();

    let overlap_percentage = if reference.is_empty() {
        0.0
    } else {
        common_slots.len() as f64 / reference.len() as f64
    };

    // Pairwise intensity has only two states, 0 or 1; exposed for uniformity
    // with group mode.
    let intensity = common_slots.iter().map(|&slot| (slot, 1)).collect();

    Ok(OverlapResult {
        common_slots,
        overlap_percentage,
        intensity,
    })
}

/// Group overlap: slots available in at least `quorum` of the input sets.
///
/// Intensity counts, for every slot in the union of all inputs, how many
/// sets contain it. `common_slots` are the slots whose count reaches the
/// quorum, in canonical order; the percentage divides by the union size.
/// An empty input list (or an all-empty union) yields the zero result.
///
/// # Errors
/// - `HeatmapError::InvalidQuorum` when `quorum` is 0.
/// - `HeatmapError::GridMismatch` when any two input sets were built against
///   unequal grids.
pub fn compute_group(sets: &[AvailabilitySet], quorum: usize) -> Result<OverlapResult> {
    if quorum == 0 {
        return Err(HeatmapError::InvalidQuorum(quorum));
    }
    let Some(first) = sets.first() else {
        return Ok(OverlapResult::zero());
    };
    for set in &sets[1..] {
        first.check_grid(set)?;
    }

    let mut intensity: BTreeMap<DaySlot, usize> = BTreeMap::new();
    for set in sets {
        for slot in set.slots() {
            *intensity.entry(slot).or_insert(0) += 1;
        }
    }

    // BTreeMap iteration is canonical order already.
    let common_slots: Vec<DaySlot> = intensity
        .iter()
        .filter(|&(_, &count)| count >= quorum)
        .map(|(&slot, _)| slot)
        .collect();

    let union_size = intensity.len();
    let overlap_percentage = if union_size == 0 {
        0.0
    } else {
        common_slots.len() as f64 / union_size as f64
    };

    Ok(OverlapResult {
        common_slots,
        overlap_percentage,
        intensity,
    })
}

/// Group overlap with the default strict quorum: every participant must
/// share a slot for it to count. Delegates to [`compute_group`] with
/// `quorum = sets.len()`.
pub fn compute_group_unanimous(sets: &[AvailabilitySet]) -> Result<OverlapResult> {
    if sets.is_empty() {
        return Ok(OverlapResult::zero());
    }
    compute_group(sets, sets.len())
}
