//! Availability submission and lookup handlers.

mod delete_availability;
mod get_availability;
mod list_availability;
mod submit_availability;

pub use delete_availability::{DeleteAvailabilityCommand, DeleteAvailabilityHandler};
pub use get_availability::{GetAvailabilityHandler, GetAvailabilityQuery};
pub use list_availability::{ListAvailabilityHandler, ListAvailabilityQuery};
pub use submit_availability::{SubmitAvailabilityCommand, SubmitAvailabilityHandler};
