//! HTTP handlers for availability endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::availability::{
    DeleteAvailabilityCommand, DeleteAvailabilityHandler, GetAvailabilityHandler,
    GetAvailabilityQuery, ListAvailabilityHandler, ListAvailabilityQuery,
    SubmitAvailabilityCommand, SubmitAvailabilityHandler,
};
use crate::domain::party::PartyRole;

use super::super::party::handlers::parse_party_id;
use super::dto::{scheduling_error_response, AvailabilityResponse, SubmitAvailabilityRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AvailabilityHandlers {
    submit_handler: Arc<SubmitAvailabilityHandler>,
    get_handler: Arc<GetAvailabilityHandler>,
    list_handler: Arc<ListAvailabilityHandler>,
    delete_handler: Arc<DeleteAvailabilityHandler>,
}

impl AvailabilityHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAvailabilityHandler>,
        get_handler: Arc<GetAvailabilityHandler>,
        list_handler: Arc<ListAvailabilityHandler>,
        delete_handler: Arc<DeleteAvailabilityHandler>,
    ) -> Self {
        Self {
            submit_handler,
            get_handler,
            list_handler,
            delete_handler,
        }
    }
}

/// Router state: the handlers plus the role the mount point serves.
#[derive(Clone)]
pub struct RoleScopedAvailability {
    pub handlers: AvailabilityHandlers,
    pub role: PartyRole,
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/{candidates,interviewers}/availability - Declare availability
pub async fn submit_availability(
    State(state): State<RoleScopedAvailability>,
    Json(req): Json<SubmitAvailabilityRequest>,
) -> Response {
    let party_id = match parse_party_id(&req.party_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut days = Vec::with_capacity(req.days.len());
    for day in req.days {
        match day.into_domain() {
            Ok(day) => days.push(day),
            Err(e) => {
                let (status, body) = e.into_parts();
                return (status, Json(body)).into_response();
            }
        }
    }

    let cmd = SubmitAvailabilityCommand {
        party_id,
        role: state.role,
        days,
    };

    match state.handlers.submit_handler.handle(cmd).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(AvailabilityResponse::from(&record)),
        )
            .into_response(),
        Err(e) => {
            let (status, body) = scheduling_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

/// GET /api/{candidates,interviewers}/availability - List stored records
pub async fn list_availability(State(state): State<RoleScopedAvailability>) -> Response {
    let query = ListAvailabilityQuery { role: state.role };

    match state.handlers.list_handler.handle(query).await {
        Ok(records) => {
            let body: Vec<AvailabilityResponse> =
                records.iter().map(AvailabilityResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            let (status, body) = scheduling_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

/// GET /api/{candidates,interviewers}/availability/:id - One party's record
pub async fn get_availability(
    State(state): State<RoleScopedAvailability>,
    Path(party_id): Path<String>,
) -> Response {
    let party_id = match parse_party_id(&party_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetAvailabilityQuery {
        party_id,
        role: state.role,
    };

    match state.handlers.get_handler.handle(query).await {
        Ok(record) => (StatusCode::OK, Json(AvailabilityResponse::from(&record))).into_response(),
        Err(e) => {
            let (status, body) = scheduling_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

/// DELETE /api/{candidates,interviewers}/availability/:id - Clear a record
pub async fn delete_availability(
    State(state): State<RoleScopedAvailability>,
    Path(party_id): Path<String>,
) -> Response {
    let party_id = match parse_party_id(&party_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteAvailabilityCommand {
        party_id,
        role: state.role,
    };

    match state.handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            let (status, body) = scheduling_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}
