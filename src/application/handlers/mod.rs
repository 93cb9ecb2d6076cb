//! Command and query handlers.

pub mod availability;
pub mod party;
pub mod slots;
