//! HTTP DTOs for the common-slots endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::slots::CommonSlots;

use super::super::availability::DayAvailabilityDto;

/// Query string for `GET /api/interview-slots`.
///
/// `interviewers` is a comma-separated list of party ids.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotsQueryParams {
    pub candidate: String,
    #[serde(default)]
    pub interviewers: String,
}

impl SlotsQueryParams {
    /// Interviewer ids in request order, blanks skipped.
    pub fn interviewer_ids(&self) -> Vec<&str> {
        self.interviewers
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// The slots every requested party has in common.
#[derive(Debug, Clone, Serialize)]
pub struct CommonSlotsResponse {
    pub candidate_id: String,
    pub interviewer_ids: Vec<String>,
    pub slots: Vec<DayAvailabilityDto>,
}

impl From<CommonSlots> for CommonSlotsResponse {
    fn from(result: CommonSlots) -> Self {
        Self {
            candidate_id: result.candidate_id.to_string(),
            interviewer_ids: result.interviewer_ids.iter().map(|id| id.to_string()).collect(),
            slots: result.slots.iter().map(Into::into).collect(),
        }
    }
}
