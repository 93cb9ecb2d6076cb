//! HTTP routes for the common-slots endpoint.

use axum::{routing::get, Router};

use super::handlers::{get_common_slots, SlotHandlers};

/// Creates the interview-slots router.
pub fn slot_routes(handlers: SlotHandlers) -> Router {
    Router::new()
        .route("/", get(get_common_slots))
        .with_state(handlers)
}
