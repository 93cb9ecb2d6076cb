//! PostgreSQL implementation of PartyRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, PartyId};
use crate::domain::party::{Party, PartyRole};
use crate::ports::PartyRepository;

/// PostgreSQL implementation of PartyRepository.
#[derive(Clone)]
pub struct PostgresPartyRepository {
    pool: PgPool,
}

impl PostgresPartyRepository {
    /// Creates a new PostgresPartyRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartyRepository for PostgresPartyRepository {
    async fn save(&self, party: &Party) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO parties (id, name, role)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(party.id().as_uuid())
        .bind(party.name())
        .bind(party.role().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert party: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PartyId) -> Result<Option<Party>, DomainError> {
        let row = sqlx::query("SELECT id, name, role FROM parties WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch party: {}", e),
                )
            })?;

        match row {
            Some(row) => Ok(Some(row_to_party(row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self, role: PartyRole) -> Result<Vec<Party>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, role FROM parties WHERE role = $1 ORDER BY name",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list parties: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_party).collect()
    }

    async fn exists(&self, id: &PartyId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM parties WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check party existence: {}", e),
                )
            })?;

        Ok(result.0 > 0)
    }

    async fn name_taken(&self, role: PartyRole, name: &str) -> Result<bool, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM parties WHERE role = $1 AND name = $2")
                .bind(role.as_str())
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to check name uniqueness: {}", e),
                    )
                })?;

        Ok(result.0 > 0)
    }

    async fn delete(&self, id: &PartyId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM parties WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete party: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PartyNotFound,
                format!("Party not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_party(row: sqlx::postgres::PgRow) -> Result<Party, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(db_error)?;
    let name: String = row.try_get("name").map_err(db_error)?;
    let role: String = row.try_get("role").map_err(db_error)?;

    let role: PartyRole = role
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;

    Party::with_id(PartyId::from_uuid(id), name, role)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Row decode failed: {}", e))
}
