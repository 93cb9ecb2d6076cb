//! Party module - Candidates and interviewers.
//!
//! A party is anyone who declares availability: the candidate being
//! interviewed or one of the interviewers. Both sides share the same
//! shape and only differ by role.

mod errors;
mod party;
mod role;

pub use errors::PartyError;
pub use party::Party;
pub use role::PartyRole;
