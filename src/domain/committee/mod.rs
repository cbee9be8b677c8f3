//! Committee module - Examination sessions and their panels.
//!
//! The aggregate root is [`ExaminationSession`]; [`CommitteeMember`] rows
//! belong to exactly one session. Conflict detection and composition rules
//! are pure functions over these types; orchestration lives in the
//! application layer.

mod composition;
mod conflict;
mod errors;
mod member;
mod session;

pub use composition::{
    Composition, CompositionViolation, MAX_TITULAR_MEMBERS, MIN_TITULAR_MEMBERS,
};
pub use conflict::{find_conflict, CONFLICT_WINDOW_SECS};
pub use errors::CommitteeError;
pub use member::CommitteeMember;
pub use session::{
    ExaminationSession, SessionDetails, SessionPatch, MAX_LOCATION_LENGTH, MAX_REF_LENGTH,
    MAX_WORK_TITLE_LENGTH,
};
