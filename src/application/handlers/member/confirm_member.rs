//! ConfirmMemberHandler - Command handler for confirming participation.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, CommitteeMember};
use crate::domain::foundation::MemberId;
use crate::ports::MemberStore;

/// Command to record a member's confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmMemberCommand {
    pub member_id: MemberId,
}

/// Handler for invitation confirmations.
pub struct ConfirmMemberHandler {
    members: Arc<dyn MemberStore>,
}

impl ConfirmMemberHandler {
    pub fn new(members: Arc<dyn MemberStore>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: ConfirmMemberCommand) -> Result<CommitteeMember, CommitteeError> {
        tracing::info!(member = %cmd.member_id, "Confirming committee participation");

        let mut member = self
            .members
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or(CommitteeError::MemberNotFound(cmd.member_id))?;

        member.confirm()?;
        self.members.update(&member).await?;
        tracing::info!(member = %member.id(), "Participation confirmed");

        Ok(member)
    }
}
