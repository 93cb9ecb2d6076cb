//! Party entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PartyId;

use super::{PartyError, PartyRole};

/// A candidate or interviewer, identified by a unique id.
///
/// Names must be non-blank; uniqueness per role is a store-level check
/// performed by the create handler, not an intrinsic property here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    id: PartyId,
    name: String,
    role: PartyRole,
}

impl Party {
    /// Creates a new party with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `PartyError::BlankName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>, role: PartyRole) -> Result<Self, PartyError> {
        Self::with_id(PartyId::new(), name, role)
    }

    /// Reconstructs a party from stored state.
    pub fn with_id(
        id: PartyId,
        name: impl Into<String>,
        role: PartyRole,
    ) -> Result<Self, PartyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PartyError::BlankName);
        }
        Ok(Self { id, name, role })
    }

    pub fn id(&self) -> &PartyId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> PartyRole {
        self.role
    }
}
