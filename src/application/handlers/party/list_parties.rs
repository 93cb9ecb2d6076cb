//! ListPartiesHandler - Query handler for listing parties of a role.

use std::sync::Arc;

use crate::domain::party::{Party, PartyError, PartyRole};
use crate::ports::PartyRepository;

/// Query for all parties of one role.
#[derive(Debug, Clone)]
pub struct ListPartiesQuery {
    pub role: PartyRole,
}

/// Handler for listing parties.
pub struct ListPartiesHandler {
    parties: Arc<dyn PartyRepository>,
}

impl ListPartiesHandler {
    pub fn new(parties: Arc<dyn PartyRepository>) -> Self {
        Self { parties }
    }

    pub async fn handle(&self, query: ListPartiesQuery) -> Result<Vec<Party>, PartyError> {
        Ok(self.parties.find_all(query.role).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPartyRepository;

    #[tokio::test]
    async fn lists_only_the_requested_role() {
        let repo = Arc::new(InMemoryPartyRepository::new());
        repo.save(&Party::new("Carl", PartyRole::Candidate).unwrap())
            .await
            .unwrap();
        repo.save(&Party::new("Ines", PartyRole::Interviewer).unwrap())
            .await
            .unwrap();
        repo.save(&Party::new("Igor", PartyRole::Interviewer).unwrap())
            .await
            .unwrap();

        let handler = ListPartiesHandler::new(repo);
        let interviewers = handler
            .handle(ListPartiesQuery {
                role: PartyRole::Interviewer,
            })
            .await
            .unwrap();

        let names: Vec<_> = interviewers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Igor", "Ines"]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = Arc::new(InMemoryPartyRepository::new());
        let handler = ListPartiesHandler::new(repo);

        let candidates = handler
            .handle(ListPartiesQuery {
                role: PartyRole::Candidate,
            })
            .await
            .unwrap();

        assert!(candidates.is_empty());
    }
}
