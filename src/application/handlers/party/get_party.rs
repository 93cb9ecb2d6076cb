//! GetPartyHandler - Query handler for single-party lookup.

use std::sync::Arc;

use crate::domain::foundation::PartyId;
use crate::domain::party::{Party, PartyError, PartyRole};
use crate::ports::PartyRepository;

/// Query for one party, scoped to a role so that candidate ids cannot be
/// fetched through the interviewer endpoint and vice versa.
#[derive(Debug, Clone)]
pub struct GetPartyQuery {
    pub party_id: PartyId,
    pub role: PartyRole,
}

/// Handler for fetching a single party.
pub struct GetPartyHandler {
    parties: Arc<dyn PartyRepository>,
}

impl GetPartyHandler {
    pub fn new(parties: Arc<dyn PartyRepository>) -> Self {
        Self { parties }
    }

    pub async fn handle(&self, query: GetPartyQuery) -> Result<Party, PartyError> {
        match self.parties.find_by_id(&query.party_id).await? {
            Some(party) if party.role() == query.role => Ok(party),
            _ => Err(PartyError::not_found(query.party_id)),
        }
    }
}
