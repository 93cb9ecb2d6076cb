//! HTTP DTOs for party endpoints.
//!
//! These types decouple the HTTP API from domain types.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::party::{Party, PartyError};
use axum::http::StatusCode;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new candidate or interviewer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartyRequest {
    pub name: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A party as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PartyResponse {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl From<Party> for PartyResponse {
    fn from(party: Party) -> Self {
        Self {
            id: party.id().to_string(),
            name: party.name().to_string(),
            role: party.role().to_string(),
        }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

/// Maps a domain error code onto the HTTP status it should travel as.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::EmptyField | ErrorCode::InvalidInterval | ErrorCode::NotHourAligned => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::PartyNotFound | ErrorCode::NoAvailabilityDefined => StatusCode::NOT_FOUND,
        ErrorCode::NameTaken => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn party_error_response(err: PartyError) -> (StatusCode, ErrorResponse) {
    (
        status_for(err.code()),
        ErrorResponse::new(err.code().to_string(), err.message()),
    )
}
