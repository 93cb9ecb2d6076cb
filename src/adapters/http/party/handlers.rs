//! HTTP handlers for party endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::party::{
    CreatePartyCommand, CreatePartyHandler, DeletePartyCommand, DeletePartyHandler,
    GetPartyHandler, GetPartyQuery, ListPartiesHandler, ListPartiesQuery,
};
use crate::domain::foundation::PartyId;
use crate::domain::party::PartyRole;

use super::dto::{party_error_response, CreatePartyRequest, ErrorResponse, PartyResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PartyHandlers {
    create_handler: Arc<CreatePartyHandler>,
    get_handler: Arc<GetPartyHandler>,
    list_handler: Arc<ListPartiesHandler>,
    delete_handler: Arc<DeletePartyHandler>,
}

impl PartyHandlers {
    pub fn new(
        create_handler: Arc<CreatePartyHandler>,
        get_handler: Arc<GetPartyHandler>,
        list_handler: Arc<ListPartiesHandler>,
        delete_handler: Arc<DeletePartyHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            delete_handler,
        }
    }
}

/// Router state: the handlers plus the role the mount point serves.
#[derive(Clone)]
pub struct RoleScopedParties {
    pub handlers: PartyHandlers,
    pub role: PartyRole,
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/{candidates,interviewers} - Register a party
pub async fn create_party(
    State(state): State<RoleScopedParties>,
    Json(req): Json<CreatePartyRequest>,
) -> Response {
    let cmd = CreatePartyCommand {
        name: req.name,
        role: state.role,
    };

    match state.handlers.create_handler.handle(cmd).await {
        Ok(party) => (StatusCode::CREATED, Json(PartyResponse::from(party))).into_response(),
        Err(e) => {
            let (status, body) = party_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

/// GET /api/{candidates,interviewers} - List parties of the mounted role
pub async fn list_parties(State(state): State<RoleScopedParties>) -> Response {
    let query = ListPartiesQuery { role: state.role };

    match state.handlers.list_handler.handle(query).await {
        Ok(parties) => {
            let body: Vec<PartyResponse> = parties.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            let (status, body) = party_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

/// GET /api/{candidates,interviewers}/:id - Fetch one party
pub async fn get_party(
    State(state): State<RoleScopedParties>,
    Path(party_id): Path<String>,
) -> Response {
    let party_id = match parse_party_id(&party_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetPartyQuery {
        party_id,
        role: state.role,
    };

    match state.handlers.get_handler.handle(query).await {
        Ok(party) => (StatusCode::OK, Json(PartyResponse::from(party))).into_response(),
        Err(e) => {
            let (status, body) = party_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

/// DELETE /api/{candidates,interviewers}/:id - Remove a party and its availability
pub async fn delete_party(
    State(state): State<RoleScopedParties>,
    Path(party_id): Path<String>,
) -> Response {
    let party_id = match parse_party_id(&party_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeletePartyCommand {
        party_id,
        role: state.role,
    };

    match state.handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            let (status, body) = party_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

pub(crate) fn parse_party_id(raw: &str) -> Result<PartyId, Response> {
    raw.parse::<PartyId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid party ID")),
        )
            .into_response()
    })
}
