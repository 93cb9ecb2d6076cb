//! Scheduling-specific error types.

use chrono::NaiveTime;

use crate::domain::foundation::{DomainError, ErrorCode, PartyId};

/// Errors raised by availability submission and slot queries.
///
/// All variants are precondition failures surfaced synchronously to the
/// caller with the offending id or interval; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// Party was not found.
    PartyNotFound(PartyId),
    /// The party exists but has never submitted availability.
    NoAvailabilityDefined(PartyId),
    /// Interval start is not strictly before its end.
    InvalidInterval { from: NaiveTime, to: NaiveTime },
    /// An interval endpoint falls off the hour boundary.
    NotHourAligned { from: NaiveTime, to: NaiveTime },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SchedulingError {
    pub fn party_not_found(id: PartyId) -> Self {
        SchedulingError::PartyNotFound(id)
    }

    pub fn no_availability(id: PartyId) -> Self {
        SchedulingError::NoAvailabilityDefined(id)
    }

    pub fn invalid_interval(from: NaiveTime, to: NaiveTime) -> Self {
        SchedulingError::InvalidInterval { from, to }
    }

    pub fn not_hour_aligned(from: NaiveTime, to: NaiveTime) -> Self {
        SchedulingError::NotHourAligned { from, to }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SchedulingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SchedulingError::PartyNotFound(_) => ErrorCode::PartyNotFound,
            SchedulingError::NoAvailabilityDefined(_) => ErrorCode::NoAvailabilityDefined,
            SchedulingError::InvalidInterval { .. } => ErrorCode::InvalidInterval,
            SchedulingError::NotHourAligned { .. } => ErrorCode::NotHourAligned,
            SchedulingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SchedulingError::PartyNotFound(id) => format!("Party does not exist: {}", id),
            SchedulingError::NoAvailabilityDefined(id) => {
                format!("Party has no availability defined: {}", id)
            }
            SchedulingError::InvalidInterval { from, to } => format!(
                "Start hour of slot must be before end hour of slot (from: {}, to: {})",
                from, to
            ),
            SchedulingError::NotHourAligned { from, to } => format!(
                "Availability slot must run from the start of an hour to the start of an hour (from: {}, to: {})",
                from, to
            ),
            SchedulingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SchedulingError {}

impl From<DomainError> for SchedulingError {
    fn from(err: DomainError) -> Self {
        SchedulingError::Infrastructure(err.to_string())
    }
}
