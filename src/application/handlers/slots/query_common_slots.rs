//! QueryCommonSlotsHandler - The scheduling orchestrator.
//!
//! Computes the time windows shared by a candidate and every requested
//! interviewer. Read-only: nothing on this path mutates stored state.

use std::sync::Arc;

use crate::domain::foundation::PartyId;
use crate::domain::party::PartyRole;
use crate::domain::scheduling::{
    common_days, intersect_day, DayAvailability, PartyAvailability, SchedulingError,
};
use crate::ports::{AvailabilityRepository, PartyRepository};

/// Query for the slots shared by one candidate and N interviewers.
#[derive(Debug, Clone)]
pub struct QueryCommonSlotsQuery {
    pub candidate_id: PartyId,
    pub interviewer_ids: Vec<PartyId>,
}

/// The windows every requested party has in common.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSlots {
    pub candidate_id: PartyId,
    pub interviewer_ids: Vec<PartyId>,
    /// Sorted by day ascending, then interval start ascending.
    pub slots: Vec<DayAvailability>,
}

/// Handler for the common-slots query.
///
/// Preconditions fail fast and deterministically: the candidate is
/// checked before the interviewers, interviewers in request order,
/// existence before availability.
pub struct QueryCommonSlotsHandler {
    parties: Arc<dyn PartyRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl QueryCommonSlotsHandler {
    pub fn new(
        parties: Arc<dyn PartyRepository>,
        availability: Arc<dyn AvailabilityRepository>,
    ) -> Self {
        Self {
            parties,
            availability,
        }
    }

    pub async fn handle(
        &self,
        query: QueryCommonSlotsQuery,
    ) -> Result<CommonSlots, SchedulingError> {
        self.verify_party(&query.candidate_id, PartyRole::Candidate)
            .await?;
        for interviewer_id in &query.interviewer_ids {
            self.verify_party(interviewer_id, PartyRole::Interviewer)
                .await?;
        }

        // Candidate first, then interviewers in request order. The final
        // result does not depend on this order, only error reporting does.
        let mut records = Vec::with_capacity(query.interviewer_ids.len() + 1);
        records.push(self.fetch_availability(&query.candidate_id).await?);
        for interviewer_id in &query.interviewer_ids {
            records.push(self.fetch_availability(interviewer_id).await?);
        }

        let record_refs: Vec<&PartyAvailability> = records.iter().collect();
        let days = common_days(&record_refs);

        let mut slots = Vec::new();
        for day in days {
            let lists: Vec<_> = record_refs
                .iter()
                .map(|record| record.intervals_on(day).to_vec())
                .collect();

            let shared = intersect_day(&lists);
            if !shared.is_empty() {
                // The fold does not guarantee a canonical interval order;
                // sort explicitly so results are input-order independent.
                slots.push(DayAvailability::new(day, shared).sorted());
            }
        }

        tracing::debug!(
            candidate_id = %query.candidate_id,
            interviewers = query.interviewer_ids.len(),
            slot_days = slots.len(),
            "common slots computed"
        );

        Ok(CommonSlots {
            candidate_id: query.candidate_id,
            interviewer_ids: query.interviewer_ids,
            slots,
        })
    }

    async fn verify_party(&self, id: &PartyId, role: PartyRole) -> Result<(), SchedulingError> {
        match self
            .parties
            .find_by_id(id)
            .await
            .map_err(|e| SchedulingError::infrastructure(e.to_string()))?
        {
            Some(party) if party.role() == role => Ok(()),
            _ => Err(SchedulingError::party_not_found(*id)),
        }
    }

    async fn fetch_availability(
        &self,
        id: &PartyId,
    ) -> Result<PartyAvailability, SchedulingError> {
        self.availability
            .get(id)
            .await?
            .ok_or_else(|| SchedulingError::no_availability(*id))
    }
}
