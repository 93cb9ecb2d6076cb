//! Availability repository port.
//!
//! A key-value style store keyed by party id: one availability record per
//! party, created on first submission and updated in place afterwards.
//!
//! # Concurrency
//!
//! The submit path is a read-modify-write on one party's record.
//! Implementations must serialize `save` calls for the same party (row
//! lock, single write lock, or equivalent) so concurrent submissions
//! cannot lose updates; submissions for different parties are independent.

use crate::domain::foundation::{DomainError, PartyId};
use crate::domain::scheduling::PartyAvailability;
use async_trait::async_trait;

/// Repository port for per-party availability records.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Fetch a party's record. Returns `None` when the party has never
    /// submitted availability.
    async fn get(&self, party_id: &PartyId) -> Result<Option<PartyAvailability>, DomainError>;

    /// Upsert a party's record, replacing whatever was stored for that id.
    async fn save(&self, availability: &PartyAvailability) -> Result<(), DomainError>;

    /// All stored records, ordered by party id.
    async fn find_all(&self) -> Result<Vec<PartyAvailability>, DomainError>;

    /// Remove a party's record. A no-op when none exists; used both
    /// directly and as the cascade when a party is deleted.
    async fn delete(&self, party_id: &PartyId) -> Result<(), DomainError>;
}
