//! AddMemberHandler - Command handler for seating an examiner on a panel.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, CommitteeMember};
use crate::domain::foundation::{CommitteeRole, ExaminerRef, MemberId, MemberType, SessionId};
use crate::ports::{ExaminerDirectory, MemberStore, SessionStore};

/// Command to add a member to a session's committee.
#[derive(Debug, Clone)]
pub struct AddMemberCommand {
    pub session_id: SessionId,
    pub examiner: ExaminerRef,
    pub member_type: MemberType,
    pub role: CommitteeRole,
    pub presentation_order: Option<u32>,
}

/// Handler for adding committee members.
pub struct AddMemberHandler {
    sessions: Arc<dyn SessionStore>,
    members: Arc<dyn MemberStore>,
    examiners: Arc<dyn ExaminerDirectory>,
}

impl AddMemberHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        members: Arc<dyn MemberStore>,
        examiners: Arc<dyn ExaminerDirectory>,
    ) -> Self {
        Self {
            sessions,
            members,
            examiners,
        }
    }

    pub async fn handle(&self, cmd: AddMemberCommand) -> Result<CommitteeMember, CommitteeError> {
        tracing::info!(session = %cmd.session_id, examiner = %cmd.examiner, "Adding committee member");

        // 1. The session must exist and not have been held.
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;
        session.ensure_not_held()?;

        // 2. The reference must resolve to a real examiner of that kind.
        self.examiners
            .get_examiner(&cmd.examiner)
            .await?
            .ok_or_else(|| {
                CommitteeError::invalid_examiner(format!("No examiner found for {}", cmd.examiner))
            })?;

        // 3. One seat per examiner per session.
        if self
            .members
            .exists_for_examiner(&cmd.session_id, &cmd.examiner)
            .await?
        {
            return Err(CommitteeError::DuplicateMember(cmd.examiner));
        }

        let member = CommitteeMember::new(
            MemberId::new(),
            cmd.session_id,
            cmd.examiner,
            cmd.member_type,
            cmd.role,
            cmd.presentation_order,
        )?;

        self.members.save(&member).await?;
        tracing::info!(member = %member.id(), "Committee member added");

        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryExaminerDirectory, InMemoryMemberStore, InMemorySessionStore,
    };
    use crate::domain::committee::{ExaminationSession, SessionDetails};
    use crate::domain::foundation::{
        CandidateId, ExternalExaminerId, FacultyId, InvitationStatus, ProgramId, SessionResult,
        SessionType, Timestamp,
    };

    struct Fixture {
        sessions: Arc<InMemorySessionStore>,
        members: Arc<InMemoryMemberStore>,
        examiners: Arc<InMemoryExaminerDirectory>,
        handler: AddMemberHandler,
    }

    fn fixture() -> Fixture {
        let sessions = Arc::new(InMemorySessionStore::new());
        let members = Arc::new(InMemoryMemberStore::new());
        let examiners = Arc::new(InMemoryExaminerDirectory::new());
        let handler = AddMemberHandler::new(sessions.clone(), members.clone(), examiners.clone());
        Fixture {
            sessions,
            members,
            examiners,
            handler,
        }
    }

    async fn saved_session(fx: &Fixture) -> ExaminationSession {
        let session = ExaminationSession::new(
            SessionId::new(),
            CandidateId::new(),
            ProgramId::new(),
            SessionType::DefenseMasters,
            Timestamp::now().plus_days(12),
            SessionDetails::default(),
        )
        .unwrap();
        fx.sessions.save(&session).await.unwrap();
        session
    }

    fn command(session_id: SessionId, examiner: ExaminerRef) -> AddMemberCommand {
        AddMemberCommand {
            session_id,
            examiner,
            member_type: MemberType::Titular,
            role: CommitteeRole::InternalMember,
            presentation_order: None,
        }
    }

    #[tokio::test]
    async fn adds_registered_examiner_as_pending_member() {
        let fx = fixture();
        let session = saved_session(&fx).await;
        let examiner = ExaminerRef::Internal(FacultyId::new());
        fx.examiners.register(examiner, "Dr. Moreira").await;

        let member = fx.handler.handle(command(*session.id(), examiner)).await.unwrap();

        assert_eq!(member.invitation_status(), InvitationStatus::Pending);
        assert_eq!(member.session_id(), session.id());
        assert_eq!(fx.members.member_count().await, 1);
    }

    #[tokio::test]
    async fn fails_for_unknown_session() {
        let fx = fixture();
        let examiner = ExaminerRef::Internal(FacultyId::new());
        fx.examiners.register(examiner, "Dr. Moreira").await;

        let result = fx.handler.handle(command(SessionId::new(), examiner)).await;
        assert!(matches!(result, Err(CommitteeError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn fails_once_session_is_held() {
        let fx = fixture();
        let mut session = saved_session(&fx).await;
        session.mark_held(SessionResult::Approved).unwrap();
        fx.sessions.update(&session).await.unwrap();

        let examiner = ExaminerRef::Internal(FacultyId::new());
        fx.examiners.register(examiner, "Dr. Moreira").await;

        let result = fx.handler.handle(command(*session.id(), examiner)).await;
        assert!(matches!(result, Err(CommitteeError::SessionAlreadyHeld(_))));
        assert_eq!(fx.members.member_count().await, 0);
    }

    #[tokio::test]
    async fn fails_for_unresolved_examiner() {
        let fx = fixture();
        let session = saved_session(&fx).await;
        let examiner = ExaminerRef::External(ExternalExaminerId::new());

        let result = fx.handler.handle(command(*session.id(), examiner)).await;
        assert!(matches!(
            result,
            Err(CommitteeError::InvalidExaminerReference(_))
        ));
    }

    #[tokio::test]
    async fn rejects_duplicate_examiner_on_same_session() {
        let fx = fixture();
        let session = saved_session(&fx).await;
        let examiner = ExaminerRef::Internal(FacultyId::new());
        fx.examiners.register(examiner, "Dr. Moreira").await;

        fx.handler.handle(command(*session.id(), examiner)).await.unwrap();
        let result = fx.handler.handle(command(*session.id(), examiner)).await;

        assert!(matches!(result, Err(CommitteeError::DuplicateMember(e)) if e == examiner));
        assert_eq!(fx.members.member_count().await, 1);
    }

    #[tokio::test]
    async fn same_examiner_can_sit_on_two_sessions() {
        let fx = fixture();
        let session_a = saved_session(&fx).await;
        let session_b = saved_session(&fx).await;
        let examiner = ExaminerRef::Internal(FacultyId::new());
        fx.examiners.register(examiner, "Dr. Moreira").await;

        fx.handler.handle(command(*session_a.id(), examiner)).await.unwrap();
        fx.handler.handle(command(*session_b.id(), examiner)).await.unwrap();

        assert_eq!(fx.members.member_count().await, 2);
    }

    #[tokio::test]
    async fn propagates_presentation_order_validation() {
        let fx = fixture();
        let session = saved_session(&fx).await;
        let examiner = ExaminerRef::Internal(FacultyId::new());
        fx.examiners.register(examiner, "Dr. Moreira").await;

        let mut cmd = command(*session.id(), examiner);
        cmd.presentation_order = Some(0);

        let result = fx.handler.handle(cmd).await;
        assert!(matches!(result, Err(CommitteeError::ValidationFailed { .. })));
    }
}
