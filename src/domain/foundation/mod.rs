//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, identifiers, and error types that form
//! the vocabulary of the interview scheduling domain.

mod ids;
mod errors;

pub use ids::PartyId;
pub use errors::{DomainError, ErrorCode};
