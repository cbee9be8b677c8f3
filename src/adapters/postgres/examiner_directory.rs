//! PostgreSQL implementation of ExaminerDirectory.
//!
//! Resolves internal references against the faculty table and external
//! references against the external-examiner table; both are owned by
//! their respective subsystems.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, ExaminerRef};
use crate::ports::{ExaminerDirectory, ExaminerRecord};

/// PostgreSQL implementation of ExaminerDirectory.
#[derive(Clone)]
pub struct PostgresExaminerDirectory {
    pool: PgPool,
}

impl PostgresExaminerDirectory {
    /// Creates a new PostgresExaminerDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExaminerDirectory for PostgresExaminerDirectory {
    async fn get_examiner(
        &self,
        examiner: &ExaminerRef,
    ) -> Result<Option<ExaminerRecord>, DomainError> {
        let query = match examiner {
            ExaminerRef::Internal(_) => "SELECT full_name FROM faculty_members WHERE id = $1",
            ExaminerRef::External(_) => "SELECT full_name FROM external_examiners WHERE id = $1",
        };

        let row: Option<(String,)> = sqlx::query_as(query)
            .bind(examiner.examiner_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch examiner: {}", e),
                )
            })?;

        Ok(row.map(|(full_name,)| ExaminerRecord {
            examiner: *examiner,
            display_name: full_name,
        }))
    }
}
