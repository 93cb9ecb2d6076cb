//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    InvalidInterval,
    NotHourAligned,

    // Not found errors
    PartyNotFound,
    NoAvailabilityDefined,

    // Conflict errors
    NameTaken,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidInterval => "INVALID_INTERVAL",
            ErrorCode::NotHourAligned => "NOT_HOUR_ALIGNED",
            ErrorCode::PartyNotFound => "PARTY_NOT_FOUND",
            ErrorCode::NoAvailabilityDefined => "NO_AVAILABILITY_DEFINED",
            ErrorCode::NameTaken => "NAME_TAKEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with a code and a message. The ports speak this
/// type; the per-module error enums convert from it at the boundary.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::PartyNotFound, "Party not found");
        assert_eq!(format!("{}", err), "[PARTY_NOT_FOUND] Party not found");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::PartyNotFound), "PARTY_NOT_FOUND");
        assert_eq!(
            format!("{}", ErrorCode::NoAvailabilityDefined),
            "NO_AVAILABILITY_DEFINED"
        );
    }
}
