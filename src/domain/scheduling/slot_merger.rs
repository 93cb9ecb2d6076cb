//! Folding submissions into stored availability.

use crate::domain::foundation::PartyId;

use super::{DayAvailability, PartyAvailability, SchedulingError};

/// Granularity accepted at submission time.
///
/// The documented product behavior is whole hours only; `AnyMinute`
/// exists so the engine stays reusable at finer granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentPolicy {
    /// Both endpoints must fall exactly on an hour boundary.
    #[default]
    HourAligned,
    /// Any minute is acceptable.
    AnyMinute,
}

/// Validates newly submitted day entries and folds them into a party's
/// stored availability.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotMerger {
    policy: AlignmentPolicy,
}

impl SlotMerger {
    pub fn new(policy: AlignmentPolicy) -> Self {
        Self { policy }
    }

    /// Merges `incoming` into `existing`, creating a fresh record when the
    /// party has none yet.
    ///
    /// Validation runs over every incoming interval before anything is
    /// touched, so a rejected submission leaves no partial change. On an
    /// already-populated day the incoming intervals are appended as
    /// submitted; overlaps and duplicates are not coalesced.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::NotHourAligned` when the policy is
    /// `HourAligned` and any endpoint falls off the hour.
    pub fn merge(
        &self,
        existing: Option<PartyAvailability>,
        party_id: PartyId,
        incoming: Vec<DayAvailability>,
    ) -> Result<PartyAvailability, SchedulingError> {
        self.validate(&incoming)?;

        let mut record = existing.unwrap_or_else(|| PartyAvailability::new(party_id));
        for day in incoming {
            record.add_day(day);
        }
        Ok(record)
    }

    fn validate(&self, incoming: &[DayAvailability]) -> Result<(), SchedulingError> {
        if self.policy == AlignmentPolicy::AnyMinute {
            return Ok(());
        }
        for day in incoming {
            for interval in day.intervals() {
                if !interval.is_hour_aligned() {
                    return Err(SchedulingError::not_hour_aligned(
                        interval.from(),
                        interval.to(),
                    ));
                }
            }
        }
        Ok(())
    }
}
