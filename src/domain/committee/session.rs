//! Examination session aggregate.
//!
//! A session is one scheduled qualification or defense event for one
//! candidate. It owns its committee member rows (removed with it) and is
//! the only place a result can be recorded: `result` is set by the Held
//! transition and nowhere else, so "result iff held" holds by
//! construction.

use crate::domain::foundation::{
    CandidateId, DomainError, ErrorCode, ProgramId, SessionId, SessionResult, SessionStatus,
    SessionType, StateMachine, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Maximum length for the work title.
pub const MAX_WORK_TITLE_LENGTH: usize = 500;

/// Maximum length for the location.
pub const MAX_LOCATION_LENGTH: usize = 255;

/// Maximum length for document references and the videoconference link.
pub const MAX_REF_LENGTH: usize = 500;

/// Descriptive fields of a session with no lifecycle behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDetails {
    /// Where the session takes place.
    pub location: Option<String>,

    /// Whether the session is held remotely.
    pub is_remote: bool,

    /// Link for remote participation.
    pub videoconference_link: Option<String>,

    /// Title of the work under examination.
    pub work_title: Option<String>,

    /// Whether the candidate's advisor sits in.
    pub advisor_participates: bool,

    /// Free-form annotations; cancellation reasons are appended here.
    pub notes: Option<String>,

    /// Reference to the minutes document.
    pub minutes_document_ref: Option<String>,

    /// Reference to the thesis/dissertation document.
    pub thesis_document_ref: Option<String>,
}

impl Default for SessionDetails {
    fn default() -> Self {
        Self {
            location: None,
            is_remote: false,
            videoconference_link: None,
            work_title: None,
            advisor_participates: true,
            notes: None,
            minutes_document_ref: None,
            thesis_document_ref: None,
        }
    }
}

/// Field changes applied by the update operation.
///
/// `None` means "leave unchanged". Status and result are deliberately
/// absent: they only move through the lifecycle methods.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub scheduled_at: Option<Timestamp>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub videoconference_link: Option<String>,
    pub work_title: Option<String>,
    pub advisor_participates: Option<bool>,
    pub notes: Option<String>,
    pub minutes_document_ref: Option<String>,
    pub thesis_document_ref: Option<String>,
}

impl SessionPatch {
    /// True when the patch would move the session to a new time.
    pub fn changes_schedule(&self, current: &Timestamp) -> bool {
        matches!(&self.scheduled_at, Some(t) if t != current)
    }
}

/// Examination session aggregate.
///
/// # Invariants
///
/// - `result` is `Some` iff `status == Held`
/// - `held_at` is `Some` iff `status == Held`
/// - `id`, `candidate_id`, `program_id`, `session_type` never change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExaminationSession {
    /// Unique identifier for this session.
    id: SessionId,

    /// Candidate under examination.
    candidate_id: CandidateId,

    /// Program hosting the session.
    program_id: ProgramId,

    /// Kind of examination.
    session_type: SessionType,

    /// When the session is scheduled.
    scheduled_at: Timestamp,

    /// Descriptive fields.
    details: SessionDetails,

    /// Current lifecycle status.
    status: SessionStatus,

    /// Recorded outcome, present exactly when held.
    result: Option<SessionResult>,

    /// When the session was actually held.
    held_at: Option<Timestamp>,

    /// When the record was created.
    created_at: Timestamp,

    /// When the record was last updated.
    updated_at: Timestamp,
}

impl ExaminationSession {
    /// Creates a new session in `Scheduled` status.
    ///
    /// The caller is responsible for the candidate's conflict check; the
    /// aggregate only validates its own fields.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a descriptive field fails its length or
    ///   presence check
    pub fn new(
        id: SessionId,
        candidate_id: CandidateId,
        program_id: ProgramId,
        session_type: SessionType,
        scheduled_at: Timestamp,
        details: SessionDetails,
    ) -> Result<Self, DomainError> {
        Self::validate_details(&details)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            candidate_id,
            program_id,
            session_type,
            scheduled_at,
            details,
            status: SessionStatus::Scheduled,
            result: None,
            held_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        candidate_id: CandidateId,
        program_id: ProgramId,
        session_type: SessionType,
        scheduled_at: Timestamp,
        details: SessionDetails,
        status: SessionStatus,
        result: Option<SessionResult>,
        held_at: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            candidate_id,
            program_id,
            session_type,
            scheduled_at,
            details,
            status,
            result,
            held_at,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the candidate id.
    pub fn candidate_id(&self) -> &CandidateId {
        &self.candidate_id
    }

    /// Returns the hosting program id.
    pub fn program_id(&self) -> &ProgramId {
        &self.program_id
    }

    /// Returns the session type.
    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Returns the scheduled time.
    pub fn scheduled_at(&self) -> &Timestamp {
        &self.scheduled_at
    }

    /// Returns the descriptive fields.
    pub fn details(&self) -> &SessionDetails {
        &self.details
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the recorded result.
    pub fn result(&self) -> Option<SessionResult> {
        self.result
    }

    /// Returns when the session was held.
    pub fn held_at(&self) -> Option<&Timestamp> {
        self.held_at.as_ref()
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the record was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true once the session has been held.
    pub fn is_held(&self) -> bool {
        self.status.is_held()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Confirms the schedule: `Scheduled -> Confirmed`.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` from any other status
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(SessionStatus::Confirmed)
            .map_err(invalid_session_transition)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Cancels the session, appending the reason to notes.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session is Scheduled or Confirmed
    pub fn cancel(&mut self, reason: Option<&str>) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(SessionStatus::Cancelled)
            .map_err(invalid_session_transition)?;
        if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
            self.append_note(&format!("Cancelled: {}", reason.trim()));
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Moves the session to a new time: `Scheduled|Confirmed -> Rescheduled`.
    ///
    /// The caller re-runs the conflict check against `new_time` first; the
    /// aggregate only enforces the status guard.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session is Scheduled or Confirmed
    pub fn reschedule(&mut self, new_time: Timestamp) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(SessionStatus::Rescheduled)
            .map_err(invalid_session_transition)?;
        self.scheduled_at = new_time;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Records the session as held with its outcome.
    ///
    /// Gated only on the session not already being held; composition
    /// validation happens in the service before this is called. The only
    /// place `result` and `held_at` are ever set.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the session is already Held
    pub fn mark_held(&mut self, result: SessionResult) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(SessionStatus::Held)
            .map_err(invalid_session_transition)?;
        self.result = Some(result);
        self.held_at = Some(Timestamp::now());
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Applies a field patch. Scheduling-time changes must be conflict
    /// checked by the caller before this is applied.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyHeld` if the session has been held
    /// - `ValidationFailed` if a patched field fails its check
    pub fn apply_patch(&mut self, patch: SessionPatch) -> Result<(), DomainError> {
        self.ensure_not_held()?;

        let mut next = self.details.clone();
        if let Some(location) = patch.location {
            next.location = Some(location);
        }
        if let Some(is_remote) = patch.is_remote {
            next.is_remote = is_remote;
        }
        if let Some(link) = patch.videoconference_link {
            next.videoconference_link = Some(link);
        }
        if let Some(title) = patch.work_title {
            next.work_title = Some(title);
        }
        if let Some(advisor) = patch.advisor_participates {
            next.advisor_participates = advisor;
        }
        if let Some(notes) = patch.notes {
            next.notes = Some(notes);
        }
        if let Some(minutes) = patch.minutes_document_ref {
            next.minutes_document_ref = Some(minutes);
        }
        if let Some(thesis) = patch.thesis_document_ref {
            next.thesis_document_ref = Some(thesis);
        }
        Self::validate_details(&next)?;

        self.details = next;
        if let Some(scheduled_at) = patch.scheduled_at {
            self.scheduled_at = scheduled_at;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Validates that the session has not been held.
    pub fn ensure_not_held(&self) -> Result<(), DomainError> {
        if self.is_held() {
            Err(DomainError::new(
                ErrorCode::SessionAlreadyHeld,
                "Session has already been held",
            )
            .with_detail("session_id", self.id.to_string()))
        } else {
            Ok(())
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn append_note(&mut self, line: &str) {
        match &mut self.details.notes {
            Some(notes) => {
                notes.push('\n');
                notes.push_str(line);
            }
            None => self.details.notes = Some(line.to_string()),
        }
    }

    fn validate_details(details: &SessionDetails) -> Result<(), DomainError> {
        if let Some(title) = &details.work_title {
            if title.trim().is_empty() {
                return Err(DomainError::validation("work_title", "Work title cannot be blank"));
            }
            if title.len() > MAX_WORK_TITLE_LENGTH {
                return Err(DomainError::validation(
                    "work_title",
                    format!("Work title must be {} characters or less", MAX_WORK_TITLE_LENGTH),
                ));
            }
        }
        if let Some(location) = &details.location {
            if location.len() > MAX_LOCATION_LENGTH {
                return Err(DomainError::validation(
                    "location",
                    format!("Location must be {} characters or less", MAX_LOCATION_LENGTH),
                ));
            }
        }
        for (field, value) in [
            ("videoconference_link", &details.videoconference_link),
            ("minutes_document_ref", &details.minutes_document_ref),
            ("thesis_document_ref", &details.thesis_document_ref),
        ] {
            if let Some(value) = value {
                if value.len() > MAX_REF_LENGTH {
                    return Err(DomainError::validation(
                        field,
                        format!("{} must be {} characters or less", field, MAX_REF_LENGTH),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn invalid_session_transition(err: ValidationError) -> DomainError {
    DomainError::new(ErrorCode::InvalidTransition, err.to_string())
}
