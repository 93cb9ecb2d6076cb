//! HTTP surface for the common-slots query.

mod dto;
mod handlers;
mod routes;

pub use dto::{CommonSlotsResponse, SlotsQueryParams};
pub use handlers::SlotHandlers;
pub use routes::slot_routes;
