//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PartyRepository` - Persistence and existence checks for parties
//! - `AvailabilityRepository` - Persistence of per-party availability records

mod availability_repository;
mod party_repository;

pub use availability_repository::AvailabilityRepository;
pub use party_repository::PartyRepository;
