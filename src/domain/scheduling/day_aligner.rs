//! Day alignment across parties.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::PartyAvailability;

/// The set of days present in every party's availability.
///
/// Order-independent and idempotent; empty if any party has no days at
/// all. Generalizes to any party count, one included.
pub fn common_days(parties: &[&PartyAvailability]) -> BTreeSet<NaiveDate> {
    let Some((first, rest)) = parties.split_first() else {
        return BTreeSet::new();
    };

    let mut common: BTreeSet<NaiveDate> = first.days().collect();
    for party in rest {
        if common.is_empty() {
            break;
        }
        let days: BTreeSet<NaiveDate> = party.days().collect();
        common = common.intersection(&days).copied().collect();
    }
    common
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PartyId;
    use crate::domain::scheduling::{DayAvailability, TimeInterval};
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 1, day).unwrap()
    }

    fn party_with_days(days: &[u32]) -> PartyAvailability {
        let interval = TimeInterval::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();
        PartyAvailability::from_days(
            PartyId::new(),
            days.iter().map(|&n| DayAvailability::new(d(n), vec![interval])),
        )
    }

    #[test]
    fn intersects_day_sets_across_parties() {
        let a = party_with_days(&[1, 2, 3]);
        let b = party_with_days(&[2, 3, 4]);
        let c = party_with_days(&[3, 4, 5]);

        let common = common_days(&[&a, &b, &c]);
        assert_eq!(common.into_iter().collect::<Vec<_>>(), vec![d(3)]);
    }

    #[test]
    fn is_invariant_under_party_order() {
        let a = party_with_days(&[1, 2]);
        let b = party_with_days(&[2, 3]);
        let c = party_with_days(&[2]);

        let forward = common_days(&[&a, &b, &c]);
        let backward = common_days(&[&c, &b, &a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn single_party_keeps_all_its_days() {
        let a = party_with_days(&[5, 7]);
        let common = common_days(&[&a]);
        assert_eq!(common.into_iter().collect::<Vec<_>>(), vec![d(5), d(7)]);
    }

    #[test]
    fn party_without_days_empties_the_set() {
        let a = party_with_days(&[1, 2]);
        let empty = PartyAvailability::new(PartyId::new());
        assert!(common_days(&[&a, &empty]).is_empty());
    }

    #[test]
    fn disjoint_day_sets_yield_nothing() {
        let a = party_with_days(&[1]);
        let b = party_with_days(&[2]);
        assert!(common_days(&[&a, &b]).is_empty());
    }
}
