//! RemoveMemberHandler - Command handler for unseating a committee member.

use std::sync::Arc;

use crate::domain::committee::CommitteeError;
use crate::domain::foundation::{MemberId, SessionId};
use crate::ports::{MemberStore, SessionStore};

/// Command to remove a member from a session's committee.
#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    pub session_id: SessionId,
    pub member_id: MemberId,
}

/// Handler for removing committee members.
pub struct RemoveMemberHandler {
    sessions: Arc<dyn SessionStore>,
    members: Arc<dyn MemberStore>,
}

impl RemoveMemberHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, members: Arc<dyn MemberStore>) -> Self {
        Self { sessions, members }
    }

    pub async fn handle(&self, cmd: RemoveMemberCommand) -> Result<(), CommitteeError> {
        tracing::info!(session = %cmd.session_id, member = %cmd.member_id, "Removing committee member");

        let member = self
            .members
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or(CommitteeError::MemberNotFound(cmd.member_id))?;

        if member.session_id() != &cmd.session_id {
            return Err(CommitteeError::MemberNotInSession {
                member: cmd.member_id,
                session: cmd.session_id,
            });
        }

        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;
        session.ensure_not_held()?;

        self.members.delete(&cmd.member_id).await?;
        tracing::info!(member = %cmd.member_id, "Committee member removed");

        Ok(())
    }
}
