//! SendInviteHandler - Command handler for sending a member's invitation.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, CommitteeMember};
use crate::domain::foundation::MemberId;
use crate::ports::MemberStore;

/// Command to send an invitation to a committee member.
#[derive(Debug, Clone)]
pub struct SendInviteCommand {
    pub member_id: MemberId,
}

/// Handler for sending invitations.
pub struct SendInviteHandler {
    members: Arc<dyn MemberStore>,
}

impl SendInviteHandler {
    pub fn new(members: Arc<dyn MemberStore>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: SendInviteCommand) -> Result<CommitteeMember, CommitteeError> {
        tracing::info!(member = %cmd.member_id, "Sending committee invitation");

        let mut member = self
            .members
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or(CommitteeError::MemberNotFound(cmd.member_id))?;

        member.send_invite()?;
        self.members.update(&member).await?;
        tracing::info!(member = %member.id(), "Invitation sent");

        Ok(member)
    }
}
