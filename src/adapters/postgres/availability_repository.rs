//! PostgreSQL implementation of AvailabilityRepository.
//!
//! Each party owns exactly one row; the day map travels as JSONB. `save`
//! is a plain upsert. Same-party read-modify-write serialization is the
//! submit handler's per-party mutex; across processes, deployments that
//! scale out should wrap get+save in a transaction with
//! `SELECT ... FOR UPDATE` on this row.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, PartyId};
use crate::domain::scheduling::{DayAvailability, PartyAvailability};
use crate::ports::AvailabilityRepository;

/// PostgreSQL implementation of AvailabilityRepository.
#[derive(Clone)]
pub struct PostgresAvailabilityRepository {
    pool: PgPool,
}

impl PostgresAvailabilityRepository {
    /// Creates a new PostgresAvailabilityRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepository {
    async fn get(&self, party_id: &PartyId) -> Result<Option<PartyAvailability>, DomainError> {
        let row = sqlx::query("SELECT party_id, days FROM availability WHERE party_id = $1")
            .bind(party_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch availability: {}", e),
                )
            })?;

        match row {
            Some(row) => Ok(Some(row_to_availability(row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, availability: &PartyAvailability) -> Result<(), DomainError> {
        let days: Vec<&DayAvailability> = availability.day_entries().collect();
        let days = serde_json::to_value(days).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode availability: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO availability (party_id, days)
            VALUES ($1, $2)
            ON CONFLICT (party_id) DO UPDATE SET days = EXCLUDED.days
            "#,
        )
        .bind(availability.party_id().as_uuid())
        .bind(days)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert availability: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<PartyAvailability>, DomainError> {
        let rows = sqlx::query("SELECT party_id, days FROM availability ORDER BY party_id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list availability: {}", e),
                )
            })?;

        rows.into_iter().map(row_to_availability).collect()
    }

    async fn delete(&self, party_id: &PartyId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM availability WHERE party_id = $1")
            .bind(party_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete availability: {}", e),
                )
            })?;

        Ok(())
    }
}

fn row_to_availability(row: sqlx::postgres::PgRow) -> Result<PartyAvailability, DomainError> {
    let party_id: uuid::Uuid = row.try_get("party_id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Row decode failed: {}", e))
    })?;
    let days: serde_json::Value = row.try_get("days").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Row decode failed: {}", e))
    })?;

    let days: Vec<DayAvailability> = serde_json::from_value(days).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to decode availability: {}", e),
        )
    })?;

    Ok(PartyAvailability::from_days(
        PartyId::from_uuid(party_id),
        days,
    ))
}
