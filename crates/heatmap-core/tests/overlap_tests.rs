//! Tests for pairwise and group overlap computation.

use chrono::Weekday;
use heatmap_core::{
    compute_group, compute_group_unanimous, compute_pairwise, AvailabilitySet, DaySlot,
    HeatmapError, TimeGrid, TimeLabels,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn labels() -> TimeLabels {
    TimeLabels::reference()
}

fn set_of(labels: &TimeLabels, slots: &[&str]) -> AvailabilitySet {
    let mut set = AvailabilitySet::new(labels.grid());
    for s in slots {
        set.toggle(labels.parse_slot(s).unwrap()).unwrap();
    }
    set
}

// ── Pairwise: concrete scenario ─────────────────────────────────────────────

#[test]
fn pairwise_reference_scenario() {
    // Reference: Monday 10 AM, Monday 11 AM, Tuesday 9 AM.
    // Comparison: Monday 10 AM, Wednesday 11 AM.
    // Common = [Monday 10 AM]; percentage = 1/3 of the reference's slots.
    let labels = labels();
    let reference = set_of(&labels, &["Monday 10:00 AM", "Monday 11:00 AM", "Tuesday 9:00 AM"]);
    let comparison = set_of(&labels, &["Monday 10:00 AM", "Wednesday 11:00 AM"]);

    let result = compute_pairwise(&reference, &comparison).unwrap();

    let monday_10 = labels.parse_slot("Monday 10:00 AM").unwrap();
    assert_eq!(result.common_slots, vec![monday_10]);
    assert!((result.overlap_percentage - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(result.intensity.len(), 1);
    assert_eq!(result.intensity[&monday_10], 1);
}

#[test]
fn pairwise_percentage_is_asymmetric() {
    // Swapping reference and comparison changes the denominator: the
    // percentage answers "what fraction of MY availability works for them".
    let labels = labels();
    let a = set_of(&labels, &["Monday 10:00 AM", "Monday 11:00 AM", "Tuesday 9:00 AM"]);
    let b = set_of(&labels, &["Monday 10:00 AM", "Wednesday 11:00 AM"]);

    let a_vs_b = compute_pairwise(&a, &b).unwrap();
    let b_vs_a = compute_pairwise(&b, &a).unwrap();

    assert!((a_vs_b.overlap_percentage - 1.0 / 3.0).abs() < 1e-12);
    assert!((b_vs_a.overlap_percentage - 1.0 / 2.0).abs() < 1e-12);
    // The common slots themselves are symmetric.
    assert_eq!(a_vs_b.common_slots, b_vs_a.common_slots);
}

#[test]
fn pairwise_self_overlap_is_full() {
    let labels = labels();
    let a = set_of(&labels, &["Monday 9:00 AM", "Saturday 2:00 PM"]);

    let result = compute_pairwise(&a, &a).unwrap();
    assert_eq!(result.overlap_percentage, 1.0);
    assert_eq!(result.common_slots.len(), 2);
}

#[test]
fn pairwise_empty_reference_yields_zero_result() {
    let labels = labels();
    let empty = AvailabilitySet::new(labels.grid());
    let busy = set_of(&labels, &["Monday 10:00 AM"]);

    let result = compute_pairwise(&empty, &busy).unwrap();
    assert_eq!(result.overlap_percentage, 0.0);
    assert!(result.common_slots.is_empty());
    assert!(result.intensity.is_empty());

    // Empty self-overlap is 0, not NaN.
    let result = compute_pairwise(&empty, &empty).unwrap();
    assert_eq!(result.overlap_percentage, 0.0);
}

#[test]
fn pairwise_empty_comparison_yields_zero_result() {
    let labels = labels();
    let busy = set_of(&labels, &["Monday 10:00 AM"]);
    let empty = AvailabilitySet::new(labels.grid());

    let result = compute_pairwise(&busy, &empty).unwrap();
    assert_eq!(result.overlap_percentage, 0.0);
    assert!(result.common_slots.is_empty());
}

#[test]
fn pairwise_common_slots_in_canonical_order() {
    let labels = labels();
    let a = set_of(&labels, &["Sunday 3:00 PM", "Monday 9:00 AM", "Wednesday 12:00 PM"]);
    let result = compute_pairwise(&a, &a).unwrap();

    let mut sorted = result.common_slots.clone();
    sorted.sort();
    assert_eq!(result.common_slots, sorted);
    assert_eq!(result.common_slots[0], labels.parse_slot("Monday 9:00 AM").unwrap());
}

#[test]
fn pairwise_mismatched_grids_fail() {
    let a = AvailabilitySet::new(TimeGrid::new(13).unwrap());
    let b = AvailabilitySet::new(TimeGrid::new(12).unwrap());

    assert_eq!(
        compute_pairwise(&a, &b).unwrap_err(),
        HeatmapError::GridMismatch { left: 13, right: 12 }
    );
}

// ── Group: concrete scenario ────────────────────────────────────────────────

#[test]
fn group_unanimous_friday_scenario() {
    // Three sets each share Friday 1 PM plus disjoint other slots.
    let labels = labels();
    let a = set_of(&labels, &["Friday 1:00 PM", "Monday 9:00 AM"]);
    let b = set_of(&labels, &["Friday 1:00 PM", "Tuesday 10:00 AM"]);
    let c = set_of(&labels, &["Friday 1:00 PM", "Sunday 8:00 PM"]);

    let result = compute_group_unanimous(&[a, b, c]).unwrap();

    let friday_1pm = labels.parse_slot("Friday 1:00 PM").unwrap();
    assert_eq!(result.common_slots, vec![friday_1pm]);
    assert_eq!(result.intensity[&friday_1pm], 3);
    // Union has 4 slots, 1 is common to all.
    assert!((result.overlap_percentage - 0.25).abs() < 1e-12);
}

#[test]
fn group_single_input_reduces_to_the_input() {
    let labels = labels();
    let a = set_of(&labels, &["Monday 10:00 AM", "Thursday 6:00 PM"]);

    let result = compute_group(std::slice::from_ref(&a), 1).unwrap();
    assert_eq!(result.common_slots, a.slots().collect::<Vec<_>>());
    assert_eq!(result.overlap_percentage, 1.0);
}

#[test]
fn group_quorum_lowers_the_bar() {
    let labels = labels();
    let a = set_of(&labels, &["Monday 9:00 AM", "Tuesday 9:00 AM"]);
    let b = set_of(&labels, &["Monday 9:00 AM", "Tuesday 9:00 AM"]);
    let c = set_of(&labels, &["Monday 9:00 AM", "Friday 9:00 AM"]);
    let sets = [a, b, c];

    // All three share only Monday 9 AM.
    let strict = compute_group(&sets, 3).unwrap();
    assert_eq!(strict.common_slots.len(), 1);

    // Two out of three also share Tuesday 9 AM.
    let majority = compute_group(&sets, 2).unwrap();
    assert_eq!(majority.common_slots.len(), 2);

    // Quorum 1 admits the whole union.
    let any = compute_group(&sets, 1).unwrap();
    assert_eq!(any.common_slots.len(), 3);
    assert_eq!(any.overlap_percentage, 1.0);
}

#[test]
fn group_quorum_monotonicity() {
    let labels = labels();
    let sets = [
        set_of(&labels, &["Monday 9:00 AM", "Tuesday 9:00 AM", "Friday 1:00 PM"]),
        set_of(&labels, &["Monday 9:00 AM", "Friday 1:00 PM"]),
        set_of(&labels, &["Friday 1:00 PM", "Sunday 9:00 PM"]),
    ];

    let mut previous = usize::MAX;
    for quorum in 1..=4 {
        let result = compute_group(&sets, quorum).unwrap();
        assert!(
            result.common_slots.len() <= previous,
            "common slots grew when quorum rose to {quorum}"
        );
        previous = result.common_slots.len();
    }
}

#[test]
fn group_intensity_counts_every_union_slot() {
    let labels = labels();
    let a = set_of(&labels, &["Monday 9:00 AM", "Tuesday 9:00 AM"]);
    let b = set_of(&labels, &["Monday 9:00 AM"]);

    let result = compute_group(&[a, b], 2).unwrap();

    let monday = labels.parse_slot("Monday 9:00 AM").unwrap();
    let tuesday = labels.parse_slot("Tuesday 9:00 AM").unwrap();
    assert_eq!(result.intensity.len(), 2);
    assert_eq!(result.intensity[&monday], 2);
    assert_eq!(result.intensity[&tuesday], 1);
}

#[test]
fn group_empty_input_yields_zero_result() {
    let result = compute_group(&[], 1).unwrap();
    assert!(result.common_slots.is_empty());
    assert_eq!(result.overlap_percentage, 0.0);
    assert!(result.intensity.is_empty());

    let result = compute_group_unanimous(&[]).unwrap();
    assert_eq!(result.overlap_percentage, 0.0);
}

#[test]
fn group_all_empty_sets_yield_zero_result() {
    let grid = TimeGrid::new(13).unwrap();
    let sets = [AvailabilitySet::new(grid), AvailabilitySet::new(grid)];

    let result = compute_group(&sets, 2).unwrap();
    assert!(result.common_slots.is_empty());
    assert_eq!(result.overlap_percentage, 0.0);
}

#[test]
fn group_quorum_zero_is_rejected() {
    let grid = TimeGrid::new(13).unwrap();
    let sets = [AvailabilitySet::new(grid)];

    assert_eq!(
        compute_group(&sets, 0).unwrap_err(),
        HeatmapError::InvalidQuorum(0)
    );
}

#[test]
fn group_mismatched_grids_fail() {
    let a = AvailabilitySet::new(TimeGrid::new(13).unwrap());
    let b = AvailabilitySet::new(TimeGrid::new(13).unwrap());
    let c = AvailabilitySet::new(TimeGrid::new(24).unwrap());

    assert!(matches!(
        compute_group(&[a, b, c], 1).unwrap_err(),
        HeatmapError::GridMismatch { left: 13, right: 24 }
    ));
}

#[test]
fn group_is_deterministic() {
    let labels = labels();
    let sets = [
        set_of(&labels, &["Monday 9:00 AM", "Saturday 5:00 PM"]),
        set_of(&labels, &["Monday 9:00 AM", "Wednesday 12:00 PM"]),
    ];

    let first = compute_group(&sets, 1).unwrap();
    let second = compute_group(&sets, 1).unwrap();
    assert_eq!(first, second);
}

// ── OverlapResult shape ─────────────────────────────────────────────────────

#[test]
fn common_slots_use_explicit_day_slot_values() {
    let labels = labels();
    let a = set_of(&labels, &["Monday 10:00 AM"]);
    let result = compute_pairwise(&a, &a).unwrap();

    assert_eq!(
        result.common_slots,
        vec![DaySlot { day: Weekday::Mon, time_index: 1 }]
    );
}
