//! PostgreSQL implementation of CandidateLock.
//!
//! Uses a transaction-scoped advisory lock keyed on the candidate id. The
//! transaction carries no data changes; it exists to scope the lock, which
//! PostgreSQL releases when the transaction ends. Dropping the lease rolls
//! the transaction back and frees the lock.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::foundation::{CandidateId, DomainError, ErrorCode};
use crate::ports::{CandidateLock, LockLease};

/// PostgreSQL advisory-lock implementation of CandidateLock.
#[derive(Clone)]
pub struct PostgresCandidateLock {
    pool: PgPool,
}

impl PostgresCandidateLock {
    /// Creates a new PostgresCandidateLock.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

struct AdvisoryLease {
    _tx: Transaction<'static, Postgres>,
}

impl LockLease for AdvisoryLease {}

#[async_trait]
impl CandidateLock for PostgresCandidateLock {
    async fn acquire(&self, candidate_id: &CandidateId) -> Result<Box<dyn LockLease>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to open lock transaction: {}", e),
            )
        })?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(candidate_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to acquire candidate lock: {}", e),
                )
            })?;

        Ok(Box::new(AdvisoryLease { _tx: tx }))
    }
}
