//! In-memory implementation of PartyRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PartyId};
use crate::domain::party::{Party, PartyRole};
use crate::ports::PartyRepository;

/// Map-backed party store.
#[derive(Default)]
pub struct InMemoryPartyRepository {
    parties: RwLock<HashMap<PartyId, Party>>,
}

impl InMemoryPartyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartyRepository for InMemoryPartyRepository {
    async fn save(&self, party: &Party) -> Result<(), DomainError> {
        let mut parties = self
            .parties
            .write()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "party store lock poisoned"))?;
        parties.insert(*party.id(), party.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PartyId) -> Result<Option<Party>, DomainError> {
        let parties = self
            .parties
            .read()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "party store lock poisoned"))?;
        Ok(parties.get(id).cloned())
    }

    async fn find_all(&self, role: PartyRole) -> Result<Vec<Party>, DomainError> {
        let parties = self
            .parties
            .read()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "party store lock poisoned"))?;
        let mut matching: Vec<Party> = parties
            .values()
            .filter(|p| p.role() == role)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(matching)
    }

    async fn name_taken(&self, role: PartyRole, name: &str) -> Result<bool, DomainError> {
        let parties = self
            .parties
            .read()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "party store lock poisoned"))?;
        Ok(parties
            .values()
            .any(|p| p.role() == role && p.name() == name))
    }

    async fn delete(&self, id: &PartyId) -> Result<(), DomainError> {
        let mut parties = self
            .parties
            .write()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "party store lock poisoned"))?;
        if parties.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::PartyNotFound,
                format!("Party not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = InMemoryPartyRepository::new();
        let party = Party::new("Carl", PartyRole::Candidate).unwrap();

        repo.save(&party).await.unwrap();
        let found = repo.find_by_id(party.id()).await.unwrap();

        assert_eq!(found, Some(party));
    }

    #[tokio::test]
    async fn find_all_is_sorted_by_name() {
        let repo = InMemoryPartyRepository::new();
        for name in ["Zelda", "Anna", "Mona"] {
            repo.save(&Party::new(name, PartyRole::Interviewer).unwrap())
                .await
                .unwrap();
        }

        let all = repo.find_all(PartyRole::Interviewer).await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Anna", "Mona", "Zelda"]);
    }

    #[tokio::test]
    async fn name_taken_is_scoped_to_role() {
        let repo = InMemoryPartyRepository::new();
        repo.save(&Party::new("Sam", PartyRole::Candidate).unwrap())
            .await
            .unwrap();

        assert!(repo.name_taken(PartyRole::Candidate, "Sam").await.unwrap());
        assert!(!repo.name_taken(PartyRole::Interviewer, "Sam").await.unwrap());
    }

    #[tokio::test]
    async fn deleting_a_missing_party_errors() {
        let repo = InMemoryPartyRepository::new();
        let err = repo.delete(&PartyId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PartyNotFound);
    }
}
