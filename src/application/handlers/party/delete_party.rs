//! DeletePartyHandler - Command handler for removing parties.

use std::sync::Arc;

use crate::domain::foundation::PartyId;
use crate::domain::party::{PartyError, PartyRole};
use crate::ports::{AvailabilityRepository, PartyRepository};

/// Command to delete a party and everything it owns.
#[derive(Debug, Clone)]
pub struct DeletePartyCommand {
    pub party_id: PartyId,
    pub role: PartyRole,
}

/// Handler for deleting parties.
///
/// The party's availability record is removed first so a failure between
/// the two deletes can never leave availability for a missing party.
pub struct DeletePartyHandler {
    parties: Arc<dyn PartyRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl DeletePartyHandler {
    pub fn new(
        parties: Arc<dyn PartyRepository>,
        availability: Arc<dyn AvailabilityRepository>,
    ) -> Self {
        Self {
            parties,
            availability,
        }
    }

    pub async fn handle(&self, cmd: DeletePartyCommand) -> Result<(), PartyError> {
        match self.parties.find_by_id(&cmd.party_id).await? {
            Some(party) if party.role() == cmd.role => {}
            _ => return Err(PartyError::not_found(cmd.party_id)),
        }

        self.availability.delete(&cmd.party_id).await?;
        self.parties.delete(&cmd.party_id).await?;

        tracing::debug!(party_id = %cmd.party_id, "party deleted");
        Ok(())
    }
}
