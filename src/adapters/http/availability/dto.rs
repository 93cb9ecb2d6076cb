//! HTTP DTOs for availability endpoints.
//!
//! Times travel as `HH:MM` strings (`HH:MM:SS` accepted on input), days
//! as ISO dates. Interval validation happens here, at the edge: a payload
//! with `from >= to` never becomes a domain value.

use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::scheduling::{DayAvailability, PartyAvailability, SchedulingError, TimeInterval};

use super::super::party::{status_for, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One time window as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeIntervalDto {
    pub from: String,
    pub to: String,
}

impl TimeIntervalDto {
    pub fn into_domain(self) -> Result<TimeInterval, BodyError> {
        let from = parse_time(&self.from)?;
        let to = parse_time(&self.to)?;
        TimeInterval::new(from, to).map_err(BodyError::Scheduling)
    }
}

impl From<&TimeInterval> for TimeIntervalDto {
    fn from(interval: &TimeInterval) -> Self {
        Self {
            from: interval.from().format("%H:%M").to_string(),
            to: interval.to().format("%H:%M").to_string(),
        }
    }
}

/// One day of declared windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailabilityDto {
    pub day: NaiveDate,
    pub intervals: Vec<TimeIntervalDto>,
}

impl DayAvailabilityDto {
    pub fn into_domain(self) -> Result<DayAvailability, BodyError> {
        let intervals = self
            .intervals
            .into_iter()
            .map(TimeIntervalDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DayAvailability::new(self.day, intervals))
    }
}

impl From<&DayAvailability> for DayAvailabilityDto {
    fn from(day: &DayAvailability) -> Self {
        Self {
            day: day.day(),
            intervals: day.intervals().iter().map(Into::into).collect(),
        }
    }
}

/// Request to declare availability for a party.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAvailabilityRequest {
    pub party_id: String,
    pub days: Vec<DayAvailabilityDto>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A party's stored availability as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    pub party_id: String,
    pub days: Vec<DayAvailabilityDto>,
}

impl From<&PartyAvailability> for AvailabilityResponse {
    fn from(record: &PartyAvailability) -> Self {
        Self {
            party_id: record.party_id().to_string(),
            days: record.day_entries().map(Into::into).collect(),
        }
    }
}

/// A request body that failed to become domain values.
#[derive(Debug)]
pub enum BodyError {
    /// Malformed wire data (unparseable time, bad id).
    BadRequest(String),
    /// Well-formed data the domain rejects.
    Scheduling(SchedulingError),
}

impl BodyError {
    pub fn into_parts(self) -> (StatusCode, ErrorResponse) {
        match self {
            BodyError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            BodyError::Scheduling(err) => scheduling_error_response(err),
        }
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, BodyError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| BodyError::BadRequest(format!("Unparseable time: {}", raw)))
}

pub(crate) fn scheduling_error_response(err: SchedulingError) -> (StatusCode, ErrorResponse) {
    (
        status_for(err.code()),
        ErrorResponse::new(err.code().to_string(), err.message()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hour_minute_times() {
        let dto = TimeIntervalDto {
            from: "09:00".to_string(),
            to: "11:00".to_string(),
        };
        let interval = dto.into_domain().unwrap();
        assert_eq!(interval.from(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(interval.to(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn accepts_seconds_on_input() {
        let dto = TimeIntervalDto {
            from: "09:00:00".to_string(),
            to: "11:00:00".to_string(),
        };
        assert!(dto.into_domain().is_ok());
    }

    #[test]
    fn inverted_interval_fails_at_the_edge() {
        let dto = TimeIntervalDto {
            from: "12:00".to_string(),
            to: "11:00".to_string(),
        };
        assert!(matches!(
            dto.into_domain(),
            Err(BodyError::Scheduling(SchedulingError::InvalidInterval { .. }))
        ));
    }

    #[test]
    fn serializes_back_to_hour_minute() {
        let interval = TimeInterval::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        )
        .unwrap();
        let dto = TimeIntervalDto::from(&interval);
        assert_eq!(dto.from, "09:00");
        assert_eq!(dto.to, "11:00");
    }
}
