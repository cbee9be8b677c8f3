//! PostgreSQL implementation of CandidateDirectory.
//!
//! Reads the candidate table owned by the student-records subsystem.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{CandidateId, DomainError, ErrorCode, ProgramId};
use crate::ports::{CandidateDirectory, CandidateRecord};

/// PostgreSQL implementation of CandidateDirectory.
#[derive(Clone)]
pub struct PostgresCandidateDirectory {
    pool: PgPool,
}

impl PostgresCandidateDirectory {
    /// Creates a new PostgresCandidateDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateDirectory for PostgresCandidateDirectory {
    async fn get_candidate(
        &self,
        id: &CandidateId,
    ) -> Result<Option<CandidateRecord>, DomainError> {
        let row: Option<(uuid::Uuid, uuid::Uuid)> =
            sqlx::query_as("SELECT id, program_id FROM candidates WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to fetch candidate: {}", e),
                    )
                })?;

        Ok(row.map(|(id, program_id)| CandidateRecord {
            id: CandidateId::from_uuid(id),
            program_id: ProgramId::from_uuid(program_id),
        }))
    }
}
