//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, errors)
//! - `party` - Candidate and interviewer entities
//! - `scheduling` - The availability intersection engine

pub mod foundation;
pub mod party;
pub mod scheduling;
