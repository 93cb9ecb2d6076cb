//! GetAvailabilityHandler - Query handler for one party's stored availability.

use std::sync::Arc;

use crate::domain::foundation::PartyId;
use crate::domain::party::PartyRole;
use crate::domain::scheduling::{PartyAvailability, SchedulingError};
use crate::ports::{AvailabilityRepository, PartyRepository};

/// Query for a party's availability record.
#[derive(Debug, Clone)]
pub struct GetAvailabilityQuery {
    pub party_id: PartyId,
    pub role: PartyRole,
}

/// Handler for fetching stored availability.
pub struct GetAvailabilityHandler {
    parties: Arc<dyn PartyRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl GetAvailabilityHandler {
    pub fn new(
        parties: Arc<dyn PartyRepository>,
        availability: Arc<dyn AvailabilityRepository>,
    ) -> Self {
        Self {
            parties,
            availability,
        }
    }

    pub async fn handle(
        &self,
        query: GetAvailabilityQuery,
    ) -> Result<PartyAvailability, SchedulingError> {
        match self
            .parties
            .find_by_id(&query.party_id)
            .await
            .map_err(|e| SchedulingError::infrastructure(e.to_string()))?
        {
            Some(party) if party.role() == query.role => {}
            _ => return Err(SchedulingError::party_not_found(query.party_id)),
        }

        self.availability
            .get(&query.party_id)
            .await?
            .ok_or_else(|| SchedulingError::no_availability(query.party_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAvailabilityRepository, InMemoryPartyRepository};
    use crate::domain::party::Party;
    use crate::domain::scheduling::{DayAvailability, TimeInterval};
    use chrono::{NaiveDate, NaiveTime};

    #[tokio::test]
    async fn returns_the_stored_record() {
        let parties = Arc::new(InMemoryPartyRepository::new());
        let availability = Arc::new(InMemoryAvailabilityRepository::new());
        let party = Party::new("Ines", PartyRole::Interviewer).unwrap();
        parties.save(&party).await.unwrap();

        let interval = TimeInterval::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();
        let record = PartyAvailability::from_days(
            *party.id(),
            [DayAvailability::new(
                NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
                vec![interval],
            )],
        );
        availability.save(&record).await.unwrap();

        let found = GetAvailabilityHandler::new(parties, availability)
            .handle(GetAvailabilityQuery {
                party_id: *party.id(),
                role: PartyRole::Interviewer,
            })
            .await
            .unwrap();

        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn party_without_a_record_reports_no_availability() {
        let parties = Arc::new(InMemoryPartyRepository::new());
        let availability = Arc::new(InMemoryAvailabilityRepository::new());
        let party = Party::new("Ines", PartyRole::Interviewer).unwrap();
        parties.save(&party).await.unwrap();

        let result = GetAvailabilityHandler::new(parties, availability)
            .handle(GetAvailabilityQuery {
                party_id: *party.id(),
                role: PartyRole::Interviewer,
            })
            .await;

        assert_eq!(
            result,
            Err(SchedulingError::no_availability(*party.id()))
        );
    }

    #[tokio::test]
    async fn unknown_party_reports_not_found() {
        let parties = Arc::new(InMemoryPartyRepository::new());
        let availability = Arc::new(InMemoryAvailabilityRepository::new());
        let ghost = PartyId::new();

        let result = GetAvailabilityHandler::new(parties, availability)
            .handle(GetAvailabilityQuery {
                party_id: ghost,
                role: PartyRole::Candidate,
            })
            .await;

        assert_eq!(result, Err(SchedulingError::party_not_found(ghost)));
    }
}
