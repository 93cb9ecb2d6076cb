//! Party CRUD handlers.

mod create_party;
mod delete_party;
mod get_party;
mod list_parties;

pub use create_party::{CreatePartyCommand, CreatePartyHandler};
pub use delete_party::{DeletePartyCommand, DeletePartyHandler};
pub use get_party::{GetPartyHandler, GetPartyQuery};
pub use list_parties::{ListPartiesHandler, ListPartiesQuery};
