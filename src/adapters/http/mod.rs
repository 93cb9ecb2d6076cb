//! HTTP adapters - axum routes, handlers, and DTOs.
//!
//! The party and availability routers are role-parameterized and mounted
//! twice, at `/api/candidates` and `/api/interviewers`; the original
//! service's two near-identical controllers collapse into one.

pub mod availability;
pub mod party;
pub mod slots;

use axum::Router;

use crate::domain::party::PartyRole;

use availability::AvailabilityHandlers;
use party::PartyHandlers;
use slots::SlotHandlers;

/// Everything the HTTP surface needs, pre-wired.
#[derive(Clone)]
pub struct ApiState {
    pub parties: PartyHandlers,
    pub availability: AvailabilityHandlers,
    pub slots: SlotHandlers,
}

/// Builds the full API router.
pub fn api_router(state: ApiState) -> Router {
    let candidate_routes = party::party_routes(state.parties.clone(), PartyRole::Candidate)
        .merge(availability::availability_routes(
            state.availability.clone(),
            PartyRole::Candidate,
        ));
    let interviewer_routes = party::party_routes(state.parties.clone(), PartyRole::Interviewer)
        .merge(availability::availability_routes(
            state.availability,
            PartyRole::Interviewer,
        ));

    Router::new()
        .nest("/api/candidates", candidate_routes)
        .nest("/api/interviewers", interviewer_routes)
        .nest("/api/interview-slots", slots::slot_routes(state.slots))
}
