//! In-memory implementation of AvailabilityRepository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PartyId};
use crate::domain::scheduling::PartyAvailability;
use crate::ports::AvailabilityRepository;

/// Map-backed availability store, one record per party.
///
/// The single `RwLock` serializes writes across all parties, which is
/// stricter than the per-party serialization the port asks for but
/// trivially correct for the store's test and local-run use.
#[derive(Default)]
pub struct InMemoryAvailabilityRepository {
    records: RwLock<BTreeMap<PartyId, PartyAvailability>>,
}

impl InMemoryAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn get(&self, party_id: &PartyId) -> Result<Option<PartyAvailability>, DomainError> {
        let records = self.records.read().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "availability store lock poisoned")
        })?;
        Ok(records.get(party_id).cloned())
    }

    async fn save(&self, availability: &PartyAvailability) -> Result<(), DomainError> {
        let mut records = self.records.write().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "availability store lock poisoned")
        })?;
        records.insert(*availability.party_id(), availability.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<PartyAvailability>, DomainError> {
        let records = self.records.read().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "availability store lock poisoned")
        })?;
        Ok(records.values().cloned().collect())
    }

    async fn delete(&self, party_id: &PartyId) -> Result<(), DomainError> {
        let mut records = self.records.write().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "availability store lock poisoned")
        })?;
        records.remove(party_id);
        Ok(())
    }
}
