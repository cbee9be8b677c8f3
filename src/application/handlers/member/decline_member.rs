//! DeclineMemberHandler - Command handler for declining participation.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, CommitteeMember};
use crate::domain::foundation::MemberId;
use crate::ports::MemberStore;

/// Command to record a member's decline, with an optional reason kept in
/// the member notes.
#[derive(Debug, Clone)]
pub struct DeclineMemberCommand {
    pub member_id: MemberId,
    pub reason: Option<String>,
}

/// Handler for invitation declines.
pub struct DeclineMemberHandler {
    members: Arc<dyn MemberStore>,
}

impl DeclineMemberHandler {
    pub fn new(members: Arc<dyn MemberStore>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: DeclineMemberCommand) -> Result<CommitteeMember, CommitteeError> {
        tracing::info!(member = %cmd.member_id, "Declining committee participation");

        let mut member = self
            .members
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or(CommitteeError::MemberNotFound(cmd.member_id))?;

        member.decline(cmd.reason.as_deref())?;
        self.members.update(&member).await?;
        tracing::info!(member = %member.id(), "Participation declined");

        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMemberStore;
    use crate::domain::foundation::{
        CommitteeRole, ExaminerRef, ExternalExaminerId, InvitationStatus, MemberType, SessionId,
    };

    async fn saved_member(members: &InMemoryMemberStore) -> CommitteeMember {
        let member = CommitteeMember::new(
            MemberId::new(),
            SessionId::new(),
            ExaminerRef::External(ExternalExaminerId::new()),
            MemberType::Titular,
            CommitteeRole::ExternalMember,
            None,
        )
        .unwrap();
        members.save(&member).await.unwrap();
        member
    }

    #[tokio::test]
    async fn declines_with_reason_in_notes() {
        let members = Arc::new(InMemoryMemberStore::new());
        let member = saved_member(&members).await;

        let handler = DeclineMemberHandler::new(members.clone());
        let declined = handler
            .handle(DeclineMemberCommand {
                member_id: *member.id(),
                reason: Some("conference travel".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(declined.invitation_status(), InvitationStatus::Declined);
        assert_eq!(declined.notes(), Some("Declined: conference travel"));
        assert!(declined.responded_at().is_some());
    }

    #[tokio::test]
    async fn declining_twice_fails_with_already_declined() {
        let members = Arc::new(InMemoryMemberStore::new());
        let member = saved_member(&members).await;

        let handler = DeclineMemberHandler::new(members);
        let cmd = DeclineMemberCommand {
            member_id: *member.id(),
            reason: None,
        };
        handler.handle(cmd.clone()).await.unwrap();

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(CommitteeError::AlreadyDeclined)));
    }

    #[tokio::test]
    async fn declining_a_confirmed_member_is_permitted() {
        let members = Arc::new(InMemoryMemberStore::new());
        let mut member = saved_member(&members).await;
        member.confirm().unwrap();
        members.update(&member).await.unwrap();

        let handler = DeclineMemberHandler::new(members);
        let declined = handler
            .handle(DeclineMemberCommand {
                member_id: *member.id(),
                reason: Some("schedule change".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(declined.invitation_status(), InvitationStatus::Declined);
    }

    #[tokio::test]
    async fn fails_for_unknown_member() {
        let handler = DeclineMemberHandler::new(Arc::new(InMemoryMemberStore::new()));
        let result = handler
            .handle(DeclineMemberCommand {
                member_id: MemberId::new(),
                reason: None,
            })
            .await;
        assert!(matches!(result, Err(CommitteeError::MemberNotFound(_))));
    }
}
