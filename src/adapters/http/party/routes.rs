//! HTTP routes for party endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::domain::party::PartyRole;

use super::handlers::{
    create_party, delete_party, get_party, list_parties, PartyHandlers, RoleScopedParties,
};

/// Creates the party router for one role. Mounted at both
/// `/api/candidates` and `/api/interviewers`.
pub fn party_routes(handlers: PartyHandlers, role: PartyRole) -> Router {
    Router::new()
        .route("/", post(create_party))
        .route("/", get(list_parties))
        .route("/:id", get(get_party))
        .route("/:id", delete(delete_party))
        .with_state(RoleScopedParties { handlers, role })
}
