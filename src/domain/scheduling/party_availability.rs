//! A party's complete day-indexed availability record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::PartyId;

use super::{DayAvailability, TimeInterval};

/// Everything one party has declared, keyed by day.
///
/// Owned exclusively by the party it belongs to: created on the first
/// successful submission, mutated by every later one (merge, never
/// replace), read-only on the query path. The `BTreeMap` keeps days in
/// ascending order, which query results rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyAvailability {
    party_id: PartyId,
    by_day: BTreeMap<NaiveDate, DayAvailability>,
}

impl PartyAvailability {
    /// Creates an empty record for a party.
    pub fn new(party_id: PartyId) -> Self {
        Self {
            party_id,
            by_day: BTreeMap::new(),
        }
    }

    /// Reconstructs a record from stored state.
    pub fn from_days(
        party_id: PartyId,
        days: impl IntoIterator<Item = DayAvailability>,
    ) -> Self {
        let mut record = Self::new(party_id);
        for day in days {
            record.add_day(day);
        }
        record
    }

    pub fn party_id(&self) -> &PartyId {
        &self.party_id
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }

    /// Every declared day, ascending. A day submitted with an empty
    /// interval list is kept and counted here; on the query path it
    /// behaves like no availability.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    /// All per-day entries, ascending by day.
    pub fn day_entries(&self) -> impl Iterator<Item = &DayAvailability> {
        self.by_day.values()
    }

    /// This party's intervals on a given day, empty if none declared.
    pub fn intervals_on(&self, day: NaiveDate) -> &[TimeInterval] {
        self.by_day
            .get(&day)
            .map(|d| d.intervals())
            .unwrap_or(&[])
    }

    /// Adds a day entry: appends to an existing day or inserts a new one.
    /// Keeps the at-most-one-entry-per-day invariant.
    pub fn add_day(&mut self, incoming: DayAvailability) {
        match self.by_day.get_mut(&incoming.day()) {
            Some(existing) => existing.append(incoming.intervals().iter().copied()),
            None => {
                self.by_day.insert(incoming.day(), incoming);
            }
        }
    }
}
