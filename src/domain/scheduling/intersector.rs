//! N-ary interval intersection for a single day.

use super::TimeInterval;

/// Computes the intervals common to every party on one day.
///
/// The first party's list seeds the running candidate set; each further
/// party replaces it with the cross-product of pairwise overlaps,
/// non-overlapping pairs discarded. The fold returns empty the moment any
/// party contributes an empty list. One party yields its own list
/// unchanged. Zero parties is a caller error.
///
/// The fold works for any party count; there are deliberately no special
/// cases for one or two interviewers.
pub fn intersect_day(party_interval_lists: &[Vec<TimeInterval>]) -> Vec<TimeInterval> {
    debug_assert!(
        !party_interval_lists.is_empty(),
        "intersect_day called with zero parties"
    );

    let Some((first, rest)) = party_interval_lists.split_first() else {
        return Vec::new();
    };

    let mut running = first.clone();
    for next in rest {
        if running.is_empty() || next.is_empty() {
            return Vec::new();
        }
        running = running
            .iter()
            .flat_map(|a| next.iter().filter_map(move |b| a.overlap(b)))
            .collect();
    }
    running
}
