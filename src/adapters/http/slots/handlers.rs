//! HTTP handlers for the common-slots endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::slots::{QueryCommonSlotsHandler, QueryCommonSlotsQuery};

use super::super::availability::dto::scheduling_error_response;
use super::super::party::handlers::parse_party_id;
use super::dto::{CommonSlotsResponse, SlotsQueryParams};

#[derive(Clone)]
pub struct SlotHandlers {
    query_handler: Arc<QueryCommonSlotsHandler>,
}

impl SlotHandlers {
    pub fn new(query_handler: Arc<QueryCommonSlotsHandler>) -> Self {
        Self { query_handler }
    }
}

/// GET /api/interview-slots?candidate=...&interviewers=a,b - Shared windows
pub async fn get_common_slots(
    State(handlers): State<SlotHandlers>,
    Query(params): Query<SlotsQueryParams>,
) -> Response {
    let candidate_id = match parse_party_id(&params.candidate) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut interviewer_ids = Vec::new();
    for raw in params.interviewer_ids() {
        match parse_party_id(raw) {
            Ok(id) => interviewer_ids.push(id),
            Err(response) => return response,
        }
    }

    let query = QueryCommonSlotsQuery {
        candidate_id,
        interviewer_ids,
    };

    match handlers.query_handler.handle(query).await {
        Ok(result) => {
            (StatusCode::OK, Json(CommonSlotsResponse::from(result))).into_response()
        }
        Err(e) => {
            let (status, body) = scheduling_error_response(e);
            (status, Json(body)).into_response()
        }
    }
}
