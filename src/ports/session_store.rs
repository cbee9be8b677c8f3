//! Session store port (write side).
//!
//! Defines the contract for persisting and retrieving ExaminationSession
//! aggregates. Implementations handle the actual database operations.

use crate::domain::committee::ExaminationSession;
use crate::domain::foundation::{CandidateId, DomainError, SessionId, Timestamp};
use async_trait::async_trait;

/// Storage port for ExaminationSession persistence.
///
/// Implementations must ensure `find_active_for_candidate` excludes
/// cancelled sessions: that query feeds the scheduling conflict check.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &ExaminationSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &ExaminationSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ExaminationSession>, DomainError>;

    /// Find the candidate's sessions that occupy the calendar.
    ///
    /// Excludes cancelled sessions, and the `excluding` session when given
    /// (the session under edit during a reschedule).
    async fn find_active_for_candidate(
        &self,
        candidate_id: &CandidateId,
        excluding: Option<&SessionId>,
    ) -> Result<Vec<ExaminationSession>, DomainError>;

    /// Find all sessions for a candidate, ordered by scheduled time.
    async fn find_by_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<ExaminationSession>, DomainError>;

    /// Find non-cancelled sessions scheduled at or after `from`, ordered by
    /// scheduled time.
    async fn find_upcoming(&self, from: &Timestamp) -> Result<Vec<ExaminationSession>, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}
