//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the examination committee domain.

mod errors;
mod examiner_ref;
mod ids;
mod invitation_status;
mod member_role;
mod member_type;
mod session_result;
mod session_status;
mod session_type;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use examiner_ref::{ExaminerKind, ExaminerRef};
pub use ids::{CandidateId, ExternalExaminerId, FacultyId, MemberId, ProgramId, SessionId};
pub use invitation_status::InvitationStatus;
pub use member_role::CommitteeRole;
pub use member_type::MemberType;
pub use session_result::SessionResult;
pub use session_status::SessionStatus;
pub use session_type::SessionType;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
