//! Party repository port.
//!
//! Defines the contract for persisting and looking up parties. The engine
//! only ever consumes a party id it can check for existence; everything
//! else here serves the CRUD surface.

use crate::domain::foundation::{DomainError, PartyId};
use crate::domain::party::{Party, PartyRole};
use async_trait::async_trait;

/// Repository port for party persistence.
#[async_trait]
pub trait PartyRepository: Send + Sync {
    /// Persist a new party.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, party: &Party) -> Result<(), DomainError>;

    /// Find a party by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: &PartyId) -> Result<Option<Party>, DomainError>;

    /// All parties of a role, ordered by name.
    async fn find_all(&self, role: PartyRole) -> Result<Vec<Party>, DomainError>;

    /// Check whether a party exists.
    async fn exists(&self, id: &PartyId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Whether a party of this role already uses the given name.
    async fn name_taken(&self, role: PartyRole, name: &str) -> Result<bool, DomainError>;

    /// Delete a party. Availability cascade is orchestrated by the delete
    /// handler, not here.
    ///
    /// # Errors
    ///
    /// - `PartyNotFound` if the party doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &PartyId) -> Result<(), DomainError>;
}
