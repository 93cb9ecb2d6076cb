//! HTTP routes for availability endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::domain::party::PartyRole;

use super::handlers::{
    delete_availability, get_availability, list_availability, submit_availability,
    AvailabilityHandlers, RoleScopedAvailability,
};

/// Creates the availability router for one role. Merged into the party
/// router at both `/api/candidates` and `/api/interviewers`.
pub fn availability_routes(handlers: AvailabilityHandlers, role: PartyRole) -> Router {
    Router::new()
        .route("/availability", post(submit_availability))
        .route("/availability", get(list_availability))
        .route("/availability/:id", get(get_availability))
        .route("/availability/:id", delete(delete_availability))
        .with_state(RoleScopedAvailability { handlers, role })
}
