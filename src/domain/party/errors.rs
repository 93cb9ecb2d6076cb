//! Party-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, PartyId};

use super::PartyRole;

/// Errors raised by party CRUD operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyError {
    /// Party was not found.
    NotFound(PartyId),
    /// The name is empty or whitespace-only.
    BlankName,
    /// Another party of the same role already uses this name.
    NameTaken { role: PartyRole, name: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PartyError {
    pub fn not_found(id: PartyId) -> Self {
        PartyError::NotFound(id)
    }

    pub fn name_taken(role: PartyRole, name: impl Into<String>) -> Self {
        PartyError::NameTaken {
            role,
            name: name.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PartyError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PartyError::NotFound(_) => ErrorCode::PartyNotFound,
            PartyError::BlankName => ErrorCode::EmptyField,
            PartyError::NameTaken { .. } => ErrorCode::NameTaken,
            PartyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PartyError::NotFound(id) => format!("Party does not exist: {}", id),
            PartyError::BlankName => "You must provide a name".to_string(),
            PartyError::NameTaken { role, name } => {
                format!("Name '{}' is already taken by another {}", name, role)
            }
            PartyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PartyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PartyError {}

impl From<DomainError> for PartyError {
    fn from(err: DomainError) -> Self {
        // Blank names are caught before anything reaches a port, so every
        // error a store hands back is infrastructure.
        PartyError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_offending_id() {
        let id = PartyId::new();
        let err = PartyError::not_found(id);
        assert!(err.message().contains(&id.to_string()));
        assert_eq!(err.code(), ErrorCode::PartyNotFound);
    }

    #[test]
    fn name_taken_reads_cleanly_for_both_roles() {
        let err = PartyError::name_taken(PartyRole::Interviewer, "Ines");
        assert_eq!(
            err.message(),
            "Name 'Ines' is already taken by another interviewer"
        );

        let err = PartyError::name_taken(PartyRole::Candidate, "Carl");
        assert_eq!(
            err.message(),
            "Name 'Carl' is already taken by another candidate"
        );
    }
}
