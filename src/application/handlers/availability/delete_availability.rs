//! DeleteAvailabilityHandler - Command handler for clearing availability.

use std::sync::Arc;

use crate::domain::foundation::PartyId;
use crate::domain::party::PartyRole;
use crate::domain::scheduling::SchedulingError;
use crate::ports::{AvailabilityRepository, PartyRepository};

/// Command to remove a party's entire availability record.
#[derive(Debug, Clone)]
pub struct DeleteAvailabilityCommand {
    pub party_id: PartyId,
    pub role: PartyRole,
}

/// Handler for deleting availability. The party itself stays.
pub struct DeleteAvailabilityHandler {
    parties: Arc<dyn PartyRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl DeleteAvailabilityHandler {
    pub fn new(
        parties: Arc<dyn PartyRepository>,
        availability: Arc<dyn AvailabilityRepository>,
    ) -> Self {
        Self {
            parties,
            availability,
        }
    }

    pub async fn handle(&self, cmd: DeleteAvailabilityCommand) -> Result<(), SchedulingError> {
        match self
            .parties
            .find_by_id(&cmd.party_id)
            .await
            .map_err(|e| SchedulingError::infrastructure(e.to_string()))?
        {
            Some(party) if party.role() == cmd.role => {}
            _ => return Err(SchedulingError::party_not_found(cmd.party_id)),
        }

        self.availability.delete(&cmd.party_id).await?;
        tracing::debug!(party_id = %cmd.party_id, "availability deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAvailabilityRepository, InMemoryPartyRepository};
    use crate::domain::party::Party;
    use crate::domain::scheduling::{DayAvailability, PartyAvailability, TimeInterval};
    use chrono::{NaiveDate, NaiveTime};

    #[tokio::test]
    async fn removes_the_record_and_keeps_the_party() {
        let parties = Arc::new(InMemoryPartyRepository::new());
        let availability = Arc::new(InMemoryAvailabilityRepository::new());
        let party = Party::new("Carl", PartyRole::Candidate).unwrap();
        parties.save(&party).await.unwrap();

        let interval = TimeInterval::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();
        availability
            .save(&PartyAvailability::from_days(
                *party.id(),
                [DayAvailability::new(
                    NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
                    vec![interval],
                )],
            ))
            .await
            .unwrap();

        DeleteAvailabilityHandler::new(parties.clone(), availability.clone())
            .handle(DeleteAvailabilityCommand {
                party_id: *party.id(),
                role: PartyRole::Candidate,
            })
            .await
            .unwrap();

        assert!(availability.get(party.id()).await.unwrap().is_none());
        assert!(parties.exists(party.id()).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_for_an_unknown_party_fails() {
        let parties = Arc::new(InMemoryPartyRepository::new());
        let availability = Arc::new(InMemoryAvailabilityRepository::new());
        let ghost = PartyId::new();

        let result = DeleteAvailabilityHandler::new(parties, availability)
            .handle(DeleteAvailabilityCommand {
                party_id: ghost,
                role: PartyRole::Candidate,
            })
            .await;

        assert_eq!(result, Err(SchedulingError::party_not_found(ghost)));
    }
}
