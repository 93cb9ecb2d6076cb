//! In-memory adapters - Map-backed repositories.
//!
//! Used by unit and integration tests and handy for local runs without a
//! database. Locking is coarse (one `RwLock` per store), which also gives
//! the per-party write serialization the submit path requires.

mod availability_store;
mod party_store;

pub use availability_store::InMemoryAvailabilityRepository;
pub use party_store::InMemoryPartyRepository;
