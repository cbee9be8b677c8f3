//! Committee-operation error types.

use crate::domain::committee::CompositionViolation;
use crate::domain::foundation::{
    CandidateId, DomainError, ErrorCode, ExaminerRef, MemberId, SessionId,
};

/// Errors surfaced by the committee session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitteeError {
    /// Session was not found.
    SessionNotFound(SessionId),
    /// Committee member was not found.
    MemberNotFound(MemberId),
    /// Candidate is unknown to the student-records collaborator.
    CandidateNotFound(CandidateId),
    /// Another active session for the candidate sits inside the conflict window.
    SchedulingConflict { conflicting_session: SessionId },
    /// Attempted state change not allowed from the current status.
    InvalidTransition(String),
    /// Operation requires a session that has not been held.
    SessionAlreadyHeld(SessionId),
    /// The member set violates one or more composition rules.
    InvalidComposition(Vec<CompositionViolation>),
    /// The examiner already sits on this session.
    DuplicateMember(ExaminerRef),
    /// The examiner reference does not resolve to a known examiner.
    InvalidExaminerReference(String),
    /// Invitation response already recorded as confirmed.
    AlreadyConfirmed,
    /// Invitation response already recorded as declined.
    AlreadyDeclined,
    /// The member does not belong to the addressed session.
    MemberNotInSession { member: MemberId, session: SessionId },
    /// A concurrent writer changed the record between check and write.
    ConcurrentModification(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Storage-layer failure.
    Storage(String),
}

impl CommitteeError {
    pub fn session_not_found(id: SessionId) -> Self {
        CommitteeError::SessionNotFound(id)
    }

    pub fn member_not_found(id: MemberId) -> Self {
        CommitteeError::MemberNotFound(id)
    }

    pub fn scheduling_conflict(conflicting_session: SessionId) -> Self {
        CommitteeError::SchedulingConflict { conflicting_session }
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        CommitteeError::InvalidTransition(message.into())
    }

    pub fn invalid_examiner(message: impl Into<String>) -> Self {
        CommitteeError::InvalidExaminerReference(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        CommitteeError::Storage(message.into())
    }

    /// Maps the error to its foundation-level code.
    pub fn code(&self) -> ErrorCode {
        match self {
            CommitteeError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            CommitteeError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            CommitteeError::CandidateNotFound(_) => ErrorCode::CandidateNotFound,
            CommitteeError::SchedulingConflict { .. } => ErrorCode::SchedulingConflict,
            CommitteeError::InvalidTransition(_) => ErrorCode::InvalidTransition,
            CommitteeError::SessionAlreadyHeld(_) => ErrorCode::SessionAlreadyHeld,
            CommitteeError::InvalidComposition(_) => ErrorCode::InvalidComposition,
            CommitteeError::DuplicateMember(_) => ErrorCode::DuplicateMember,
            CommitteeError::InvalidExaminerReference(_) => ErrorCode::InvalidExaminerReference,
            CommitteeError::AlreadyConfirmed => ErrorCode::AlreadyConfirmed,
            CommitteeError::AlreadyDeclined => ErrorCode::AlreadyDeclined,
            CommitteeError::MemberNotInSession { .. } => ErrorCode::MemberNotInSession,
            CommitteeError::ConcurrentModification(_) => ErrorCode::ConcurrentModification,
            CommitteeError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CommitteeError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    /// Human-readable message for the caller.
    pub fn message(&self) -> String {
        match self {
            CommitteeError::SessionNotFound(id) => format!("Session not found: {}", id),
            CommitteeError::MemberNotFound(id) => format!("Committee member not found: {}", id),
            CommitteeError::CandidateNotFound(id) => format!("Candidate not found: {}", id),
            CommitteeError::SchedulingConflict { conflicting_session } => format!(
                "Candidate already has a session within 2 hours (conflicting session: {})",
                conflicting_session
            ),
            CommitteeError::InvalidTransition(msg) => format!("Invalid transition: {}", msg),
            CommitteeError::SessionAlreadyHeld(id) => {
                format!("Session {} has already been held", id)
            }
            CommitteeError::InvalidComposition(violations) => {
                let rules: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                format!("Invalid committee composition: {}", rules.join("; "))
            }
            CommitteeError::DuplicateMember(examiner) => {
                format!("Examiner {} is already a member of this session", examiner)
            }
            CommitteeError::InvalidExaminerReference(msg) => {
                format!("Invalid examiner reference: {}", msg)
            }
            CommitteeError::AlreadyConfirmed => "Participation has already been confirmed".to_string(),
            CommitteeError::AlreadyDeclined => "Participation has already been declined".to_string(),
            CommitteeError::MemberNotInSession { member, session } => {
                format!("Member {} does not belong to session {}", member, session)
            }
            CommitteeError::ConcurrentModification(msg) => {
                format!("Concurrent modification: {}", msg)
            }
            CommitteeError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CommitteeError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for CommitteeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CommitteeError {}

impl From<DomainError> for CommitteeError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidTransition => CommitteeError::InvalidTransition(err.message),
            ErrorCode::AlreadyConfirmed => CommitteeError::AlreadyConfirmed,
            ErrorCode::AlreadyDeclined => CommitteeError::AlreadyDeclined,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => CommitteeError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::ConcurrentModification => CommitteeError::ConcurrentModification(err.message),
            ErrorCode::SessionAlreadyHeld => {
                // The session id travels in the error details.
                match err.details.get("session_id").and_then(|raw| raw.parse().ok()) {
                    Some(id) => CommitteeError::SessionAlreadyHeld(id),
                    None => CommitteeError::InvalidTransition(err.message),
                }
            }
            _ => CommitteeError::Storage(err.to_string()),
        }
    }
}
