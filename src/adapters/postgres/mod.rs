//! PostgreSQL adapters - Database implementations of the repository ports.
//!
//! - `PostgresPartyRepository` - Parties table with a per-role name unique index
//! - `PostgresAvailabilityRepository` - One JSONB availability record per party

mod availability_repository;
mod party_repository;

pub use availability_repository::PostgresAvailabilityRepository;
pub use party_repository::PostgresPartyRepository;
