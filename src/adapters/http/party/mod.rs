//! HTTP surface for party CRUD.

mod dto;
pub(crate) mod handlers;
mod routes;

pub use dto::{status_for, CreatePartyRequest, ErrorResponse, PartyResponse};
pub use handlers::PartyHandlers;
pub use routes::party_routes;
