//! HTTP surface for availability submission and lookup.

pub(crate) mod dto;
pub(crate) mod handlers;
mod routes;

pub use dto::{
    AvailabilityResponse, BodyError, DayAvailabilityDto, SubmitAvailabilityRequest, TimeIntervalDto,
};
pub use handlers::AvailabilityHandlers;
pub use routes::availability_routes;
