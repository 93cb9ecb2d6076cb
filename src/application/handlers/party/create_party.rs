//! CreatePartyHandler - Command handler for registering parties.

use std::sync::Arc;

use crate::domain::party::{Party, PartyError, PartyRole};
use crate::ports::PartyRepository;

/// Command to create a new candidate or interviewer.
#[derive(Debug, Clone)]
pub struct CreatePartyCommand {
    pub name: String,
    pub role: PartyRole,
}

/// Handler for creating parties.
pub struct CreatePartyHandler {
    parties: Arc<dyn PartyRepository>,
}

impl CreatePartyHandler {
    pub fn new(parties: Arc<dyn PartyRepository>) -> Self {
        Self { parties }
    }

    pub async fn handle(&self, cmd: CreatePartyCommand) -> Result<Party, PartyError> {
        // Blank names never reach the store.
        let party = Party::new(cmd.name, cmd.role)?;

        if self.parties.name_taken(party.role(), party.name()).await? {
            return Err(PartyError::name_taken(party.role(), party.name()));
        }

        self.parties.save(&party).await?;

        tracing::debug!(party_id = %party.id(), role = %party.role(), "party created");
        Ok(party)
    }
}
