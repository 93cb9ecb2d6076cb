//! ListAvailabilityHandler - Query handler for all records of a role.

use std::sync::Arc;

use crate::domain::party::PartyRole;
use crate::domain::scheduling::{PartyAvailability, SchedulingError};
use crate::ports::{AvailabilityRepository, PartyRepository};

/// Query for every stored availability record of one role.
#[derive(Debug, Clone)]
pub struct ListAvailabilityQuery {
    pub role: PartyRole,
}

/// Handler for listing availability by role.
pub struct ListAvailabilityHandler {
    parties: Arc<dyn PartyRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl ListAvailabilityHandler {
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
        query: ListAvailabilityQuery,
    ) -> Result<Vec<PartyAvailability>, SchedulingError> {
        let parties = self
            .parties
            .find_all(query.role)
            .await
            .map_err(|e| SchedulingError::infrastructure(e.to_string()))?;

        let mut records = Vec::new();
        for party in &parties {
            if let Some(record) = self.availability.get(party.id()).await? {
                records.push(record);
            }
        }
        Ok(records)
    }
}
