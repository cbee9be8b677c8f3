//! Member store port (write side).
//!
//! Defines the contract for persisting and retrieving CommitteeMember rows.

use crate::domain::committee::CommitteeMember;
use crate::domain::foundation::{DomainError, ExaminerRef, MemberId, SessionId};
use async_trait::async_trait;

/// Storage port for CommitteeMember persistence.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Save a new member.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, member: &CommitteeMember) -> Result<(), DomainError>;

    /// Update an existing member.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, member: &CommitteeMember) -> Result<(), DomainError>;

    /// Find a member by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<CommitteeMember>, DomainError>;

    /// Find all members of a session, ordered by presentation order
    /// (members without one come last).
    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<CommitteeMember>, DomainError>;

    /// Check whether an examiner already sits on the session.
    ///
    /// Keyed by the concrete examiner id and kind, scoped to one session.
    async fn exists_for_examiner(
        &self,
        session_id: &SessionId,
        examiner: &ExaminerRef,
    ) -> Result<bool, DomainError>;

    /// Delete a member.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &MemberId) -> Result<(), DomainError>;

    /// Delete every member of a session (session hard-delete cascade).
    async fn delete_by_session(&self, session_id: &SessionId) -> Result<(), DomainError>;
}
