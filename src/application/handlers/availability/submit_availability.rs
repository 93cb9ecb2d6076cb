//! SubmitAvailabilityHandler - Command handler for availability submissions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::PartyId;
use crate::domain::party::PartyRole;
use crate::domain::scheduling::{DayAvailability, PartyAvailability, SchedulingError, SlotMerger};
use crate::ports::{AvailabilityRepository, PartyRepository};

/// Command carrying newly declared availability for one party.
#[derive(Debug, Clone)]
pub struct SubmitAvailabilityCommand {
    pub party_id: PartyId,
    pub role: PartyRole,
    pub days: Vec<DayAvailability>,
}

/// Handler wrapping validate + merge + persist.
///
/// The merge is a read-modify-write on one party's record, so submissions
/// for the same party are serialized through a per-party mutex; different
/// parties proceed independently.
pub struct SubmitAvailabilityHandler {
    parties: Arc<dyn PartyRepository>,
    availability: Arc<dyn AvailabilityRepository>,
    merger: SlotMerger,
    party_locks: Mutex<HashMap<PartyId, Arc<tokio::sync::Mutex<()>>>>,
}

impl SubmitAvailabilityHandler {
    pub fn new(
        parties: Arc<dyn PartyRepository>,
        availability: Arc<dyn AvailabilityRepository>,
        merger: SlotMerger,
    ) -> Self {
        Self {
            parties,
            availability,
            merger,
            party_locks: Mutex::new(HashMap::new()),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAvailabilityCommand,
    ) -> Result<PartyAvailability, SchedulingError> {
        match self
            .parties
            .find_by_id(&cmd.party_id)
            .await
            .map_err(|e| SchedulingError::infrastructure(e.to_string()))?
        {
            Some(party) if party.role() == cmd.role => {}
            _ => return Err(SchedulingError::party_not_found(cmd.party_id)),
        }

        let lock = self.lock_for(cmd.party_id);
        let _guard = lock.lock().await;

        let existing = self.availability.get(&cmd.party_id).await?;
        let merged = self.merger.merge(existing, cmd.party_id, cmd.days)?;
        self.availability.save(&merged).await?;

        tracing::debug!(
            party_id = %cmd.party_id,
            days = merged.days().count(),
            "availability merged"
        );
        Ok(merged)
    }

    fn lock_for(&self, party_id: PartyId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .party_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Entries nobody else holds belong to finished submissions (or
        // deleted parties); sweep them so the map stays bounded by the
        // number of in-flight submissions.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.entry(party_id).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAvailabilityRepository, InMemoryPartyRepository};
    use crate::domain::party::Party;
    use crate::domain::scheduling::TimeInterval;
    use chrono::{NaiveDate, NaiveTime};

    fn iv(from: (u32, u32), to: (u32, u32)) -> TimeInterval {
        TimeInterval::new(
            NaiveTime::from_hms_opt(from.0, from.1, 0).unwrap(),
            NaiveTime::from_hms_opt(to.0, to.1, 0).unwrap(),
        )
        .unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 1, day).unwrap()
    }

    async fn setup() -> (SubmitAvailabilityHandler, PartyId) {
        let parties = Arc::new(InMemoryPartyRepository::new());
        let availability = Arc::new(InMemoryAvailabilityRepository::new());
        let party = Party::new("Carl", PartyRole::Candidate).unwrap();
        parties.save(&party).await.unwrap();

        let handler =
            SubmitAvailabilityHandler::new(parties, availability, SlotMerger::default());
        (handler, *party.id())
    }

    #[tokio::test]
    async fn first_submission_creates_the_record() {
        let (handler, party_id) = setup().await;

        let record = handler
            .handle(SubmitAvailabilityCommand {
                party_id,
                role: PartyRole::Candidate,
                days: vec![DayAvailability::new(d(1), vec![iv((9, 0), (11, 0))])],
            })
            .await
            .unwrap();

        assert_eq!(record.party_id(), &party_id);
        assert_eq!(record.intervals_on(d(1)), &[iv((9, 0), (11, 0))]);
    }

    #[tokio::test]
    async fn second_submission_merges_instead_of_replacing() {
        let (handler, party_id) = setup().await;

        handler
            .handle(SubmitAvailabilityCommand {
                party_id,
                role: PartyRole::Candidate,
                days: vec![DayAvailability::new(d(1), vec![iv((9, 0), (11, 0))])],
            })
            .await
            .unwrap();

        let record = handler
            .handle(SubmitAvailabilityCommand {
                party_id,
                role: PartyRole::Candidate,
                days: vec![
                    DayAvailability::new(d(1), vec![iv((14, 0), (16, 0))]),
                    DayAvailability::new(d(2), vec![iv((9, 0), (10, 0))]),
                ],
            })
            .await
            .unwrap();

        assert_eq!(record.intervals_on(d(1)).len(), 2);
        assert_eq!(record.intervals_on(d(2)).len(), 1);
    }

    #[tokio::test]
    async fn unknown_party_is_rejected_before_any_write() {
        let (handler, _) = setup().await;
        let ghost = PartyId::new();

        let result = handler
            .handle(SubmitAvailabilityCommand {
                party_id: ghost,
                role: PartyRole::Candidate,
                days: vec![DayAvailability::new(d(1), vec![iv((9, 0), (11, 0))])],
            })
            .await;

        assert_eq!(result, Err(SchedulingError::party_not_found(ghost)));
    }

    #[tokio::test]
    async fn off_hour_submission_is_rejected_whole() {
        let (handler, party_id) = setup().await;

        let result = handler
            .handle(SubmitAvailabilityCommand {
                party_id,
                role: PartyRole::Candidate,
                days: vec![
                    DayAvailability::new(d(1), vec![iv((9, 0), (11, 0))]),
                    DayAvailability::new(d(2), vec![iv((10, 30), (11, 0))]),
                ],
            })
            .await;

        assert!(matches!(result, Err(SchedulingError::NotHourAligned { .. })));
    }

    #[tokio::test]
    async fn finished_submissions_do_not_pin_their_locks() {
        let parties = Arc::new(InMemoryPartyRepository::new());
        let availability = Arc::new(InMemoryAvailabilityRepository::new());
        let first = Party::new("Carl", PartyRole::Candidate).unwrap();
        let second = Party::new("Cora", PartyRole::Candidate).unwrap();
        parties.save(&first).await.unwrap();
        parties.save(&second).await.unwrap();

        let handler =
            SubmitAvailabilityHandler::new(parties, availability, SlotMerger::default());

        for party_id in [*first.id(), *second.id()] {
            handler
                .handle(SubmitAvailabilityCommand {
                    party_id,
                    role: PartyRole::Candidate,
                    days: vec![DayAvailability::new(d(1), vec![iv((9, 0), (10, 0))])],
                })
                .await
                .unwrap();
        }

        // The second submission's lock_for sweeps the first party's idle
        // entry; only the most recent entry can remain.
        let locks = handler.party_locks.lock().unwrap();
        assert!(!locks.contains_key(first.id()));
        assert!(locks.len() <= 1);
    }

    #[tokio::test]
    async fn concurrent_submissions_for_one_party_all_land() {
        let (handler, party_id) = setup().await;
        let handler = Arc::new(handler);

        let mut tasks = Vec::new();
        for day in 1..=8u32 {
            let handler = handler.clone();
            tasks.push(tokio::spawn(async move {
                handler
                    .handle(SubmitAvailabilityCommand {
                        party_id,
                        role: PartyRole::Candidate,
                        days: vec![DayAvailability::new(d(day), vec![iv((9, 0), (10, 0))])],
                    })
                    .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let final_record = handler
            .handle(SubmitAvailabilityCommand {
                party_id,
                role: PartyRole::Candidate,
                days: vec![DayAvailability::new(d(9), vec![iv((9, 0), (10, 0))])],
            })
            .await
            .unwrap();

        assert_eq!(final_record.days().count(), 9);
    }
}
