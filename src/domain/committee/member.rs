//! Committee member entity.
//!
//! A member ties one examiner (internal faculty or external examiner) to
//! one session, with a seat type, a role, and an invitation lifecycle.
//! Members are created and removed only while the owning session has not
//! been held; that guard lives in the service layer, which owns the
//! session lookup.

use crate::domain::foundation::{
    CommitteeRole, DomainError, ErrorCode, ExaminerRef, InvitationStatus, MemberId, MemberType,
    SessionId, StateMachine, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// One examiner's seat on a session's committee.
///
/// # Invariants
///
/// - `examiner` references exactly one examiner kind (by construction).
/// - `invited_at` is set iff the invitation has been sent.
/// - `responded_at` is set by the first confirm or decline and never
///   overwritten by later responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeMember {
    /// Unique identifier for this member row.
    id: MemberId,

    /// Session this member sits on.
    session_id: SessionId,

    /// The examiner behind the seat.
    examiner: ExaminerRef,

    /// Titular (voting) or alternate seat.
    member_type: MemberType,

    /// Function on the panel.
    role: CommitteeRole,

    /// Invitation lifecycle status.
    invitation_status: InvitationStatus,

    /// When the invitation was sent.
    invited_at: Option<Timestamp>,

    /// When the member first responded (confirm or decline).
    responded_at: Option<Timestamp>,

    /// Display ordering for the oral examination round.
    presentation_order: Option<u32>,

    /// Free-form annotations; decline reasons are appended here.
    notes: Option<String>,

    /// When the member row was created.
    created_at: Timestamp,
}

impl CommitteeMember {
    /// Creates a new member with a pending invitation.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `presentation_order` is zero
    pub fn new(
        id: MemberId,
        session_id: SessionId,
        examiner: ExaminerRef,
        member_type: MemberType,
        role: CommitteeRole,
        presentation_order: Option<u32>,
    ) -> Result<Self, DomainError> {
        Self::validate_presentation_order(presentation_order)?;

        Ok(Self {
            id,
            session_id,
            examiner,
            member_type,
            role,
            invitation_status: InvitationStatus::Pending,
            invited_at: None,
            responded_at: None,
            presentation_order,
            notes: None,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a member from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MemberId,
        session_id: SessionId,
        examiner: ExaminerRef,
        member_type: MemberType,
        role: CommitteeRole,
        invitation_status: InvitationStatus,
        invited_at: Option<Timestamp>,
        responded_at: Option<Timestamp>,
        presentation_order: Option<u32>,
        notes: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            examiner,
            member_type,
            role,
            invitation_status,
            invited_at,
            responded_at,
            presentation_order,
            notes,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the member id.
    pub fn id(&self) -> &MemberId {
        &self.id
    }

    /// Returns the owning session id.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the examiner reference.
    pub fn examiner(&self) -> &ExaminerRef {
        &self.examiner
    }

    /// Returns the seat type.
    pub fn member_type(&self) -> MemberType {
        self.member_type
    }

    /// Returns the panel role.
    pub fn role(&self) -> CommitteeRole {
        self.role
    }

    /// Returns the invitation status.
    pub fn invitation_status(&self) -> InvitationStatus {
        self.invitation_status
    }

    /// Returns when the invitation was sent.
    pub fn invited_at(&self) -> Option<&Timestamp> {
        self.invited_at.as_ref()
    }

    /// Returns when the member first responded.
    pub fn responded_at(&self) -> Option<&Timestamp> {
        self.responded_at.as_ref()
    }

    /// Returns the presentation order.
    pub fn presentation_order(&self) -> Option<u32> {
        self.presentation_order
    }

    /// Returns the member notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns when the row was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// A member is external if it references an external examiner or holds
    /// the external-member role.
    pub fn is_external(&self) -> bool {
        self.examiner.is_external() || self.role.marks_external()
    }

    /// Returns true for titular (voting) seats.
    pub fn is_titular(&self) -> bool {
        self.member_type.is_titular()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Invitation lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the invitation as sent, stamping `invited_at`.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the invitation is still pending
    pub fn send_invite(&mut self) -> Result<(), DomainError> {
        self.invitation_status = self
            .invitation_status
            .transition_to(InvitationStatus::Sent)
            .map_err(invalid_invitation_transition)?;
        self.invited_at = Some(Timestamp::now());
        Ok(())
    }

    /// Confirms participation, stamping `responded_at` on first response.
    ///
    /// # Errors
    ///
    /// - `AlreadyConfirmed` if the member already confirmed
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        if self.invitation_status.is_confirmed() {
            return Err(DomainError::new(
                ErrorCode::AlreadyConfirmed,
                "Participation has already been confirmed",
            ));
        }

        self.invitation_status = InvitationStatus::Confirmed;
        if self.responded_at.is_none() {
            self.responded_at = Some(Timestamp::now());
        }
        Ok(())
    }

    /// Declines participation, stamping `responded_at` on first response
    /// and appending the reason to notes.
    ///
    /// # Errors
    ///
    /// - `AlreadyDeclined` if the member already declined
    pub fn decline(&mut self, reason: Option<&str>) -> Result<(), DomainError> {
        if self.invitation_status.is_declined() {
            return Err(DomainError::new(
                ErrorCode::AlreadyDeclined,
                "Participation has already been declined",
            ));
        }

        self.invitation_status = InvitationStatus::Declined;
        if self.responded_at.is_none() {
            self.responded_at = Some(Timestamp::now());
        }
        if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
            self.append_note(&format!("Declined: {}", reason.trim()));
        }
        Ok(())
    }

    fn append_note(&mut self, line: &str) {
        match &mut self.notes {
            Some(notes) => {
                notes.push('\n');
                notes.push_str(line);
            }
            None => self.notes = Some(line.to_string()),
        }
    }

    fn validate_presentation_order(order: Option<u32>) -> Result<(), DomainError> {
        if order == Some(0) {
            return Err(ValidationError::out_of_range("presentation_order", 1, i32::MAX, 0).into());
        }
        Ok(())
    }
}

fn invalid_invitation_transition(err: ValidationError) -> DomainError {
    DomainError::new(ErrorCode::InvalidTransition, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ExternalExaminerId, FacultyId};

    fn internal_member() -> CommitteeMember {
        CommitteeMember::new(
            MemberId::new(),
            SessionId::new(),
            ExaminerRef::Internal(FacultyId::new()),
            MemberType::Titular,
            CommitteeRole::InternalMember,
            None,
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_member_starts_pending() {
        let member = internal_member();
        assert_eq!(member.invitation_status(), InvitationStatus::Pending);
        assert!(member.invited_at().is_none());
        assert!(member.responded_at().is_none());
    }

    #[test]
    fn new_member_rejects_zero_presentation_order() {
        let result = CommitteeMember::new(
            MemberId::new(),
            SessionId::new(),
            ExaminerRef::Internal(FacultyId::new()),
            MemberType::Titular,
            CommitteeRole::InternalMember,
            Some(0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_member_accepts_positive_presentation_order() {
        let member = CommitteeMember::new(
            MemberId::new(),
            SessionId::new(),
            ExaminerRef::Internal(FacultyId::new()),
            MemberType::Titular,
            CommitteeRole::InternalMember,
            Some(1),
        )
        .unwrap();
        assert_eq!(member.presentation_order(), Some(1));
    }

    // Derived externality

    #[test]
    fn external_examiner_is_external() {
        let member = CommitteeMember::new(
            MemberId::new(),
            SessionId::new(),
            ExaminerRef::External(ExternalExaminerId::new()),
            MemberType::Titular,
            CommitteeRole::InternalMember,
            None,
        )
        .unwrap();
        assert!(member.is_external());
    }

    #[test]
    fn external_role_is_external_even_with_internal_examiner() {
        let member = CommitteeMember::new(
            MemberId::new(),
            SessionId::new(),
            ExaminerRef::Internal(FacultyId::new()),
            MemberType::Titular,
            CommitteeRole::ExternalMember,
            None,
        )
        .unwrap();
        assert!(member.is_external());
    }

    #[test]
    fn internal_examiner_with_internal_role_is_not_external() {
        assert!(!internal_member().is_external());
    }

    // Invitation lifecycle tests

    #[test]
    fn send_invite_stamps_invited_at() {
        let mut member = internal_member();
        member.send_invite().unwrap();
        assert_eq!(member.invitation_status(), InvitationStatus::Sent);
        assert!(member.invited_at().is_some());
    }

    #[test]
    fn send_invite_twice_fails() {
        let mut member = internal_member();
        member.send_invite().unwrap();
        let result = member.send_invite();
        assert!(matches!(
            result,
            Err(DomainError { code: ErrorCode::InvalidTransition, .. })
        ));
    }

    #[test]
    fn confirm_stamps_responded_at() {
        let mut member = internal_member();
        member.send_invite().unwrap();
        member.confirm().unwrap();
        assert_eq!(member.invitation_status(), InvitationStatus::Confirmed);
        assert!(member.responded_at().is_some());
    }

    #[test]
    fn confirm_twice_fails() {
        let mut member = internal_member();
        member.confirm().unwrap();
        let result = member.confirm();
        assert!(matches!(
            result,
            Err(DomainError { code: ErrorCode::AlreadyConfirmed, .. })
        ));
    }

    #[test]
    fn decline_appends_reason_to_notes() {
        let mut member = internal_member();
        member.send_invite().unwrap();
        member.decline(Some("schedule clash")).unwrap();
        assert_eq!(member.invitation_status(), InvitationStatus::Declined);
        assert_eq!(member.notes(), Some("Declined: schedule clash"));
    }

    #[test]
    fn decline_without_reason_leaves_notes_untouched() {
        let mut member = internal_member();
        member.decline(None).unwrap();
        assert!(member.notes().is_none());
    }

    #[test]
    fn decline_twice_fails() {
        let mut member = internal_member();
        member.decline(None).unwrap();
        let result = member.decline(None);
        assert!(matches!(
            result,
            Err(DomainError { code: ErrorCode::AlreadyDeclined, .. })
        ));
    }

    #[test]
    fn decline_after_confirm_is_permitted() {
        let mut member = internal_member();
        member.confirm().unwrap();
        member.decline(Some("had to withdraw")).unwrap();
        assert_eq!(member.invitation_status(), InvitationStatus::Declined);
    }

    #[test]
    fn confirm_after_decline_is_permitted() {
        let mut member = internal_member();
        member.decline(None).unwrap();
        member.confirm().unwrap();
        assert_eq!(member.invitation_status(), InvitationStatus::Confirmed);
    }

    #[test]
    fn responded_at_is_not_overwritten_by_second_response() {
        let mut member = internal_member();
        member.confirm().unwrap();
        let first = *member.responded_at().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        member.decline(None).unwrap();
        assert_eq!(member.responded_at(), Some(&first));
    }

    #[test]
    fn pending_to_sent_to_confirmed_path() {
        let mut member = internal_member();
        member.send_invite().unwrap();
        member.confirm().unwrap();
        assert!(member.invited_at().is_some());
        assert!(member.responded_at().is_some());
    }

    #[test]
    fn pending_to_declined_path_skips_invited_at() {
        let mut member = internal_member();
        member.decline(None).unwrap();
        assert!(member.invited_at().is_none());
        assert!(member.responded_at().is_some());
    }
}
