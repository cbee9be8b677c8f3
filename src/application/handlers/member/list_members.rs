//! ListMembersHandler - Query handler for a session's committee.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, CommitteeMember};
use crate::domain::foundation::SessionId;
use crate::ports::MemberStore;

/// Query for a session's members, ordered by presentation order.
#[derive(Debug, Clone)]
pub struct ListMembersQuery {
    pub session_id: SessionId,
}

/// Handler for listing committee members.
pub struct ListMembersHandler {
    members: Arc<dyn MemberStore>,
}

impl ListMembersHandler {
    pub fn new(members: Arc<dyn MemberStore>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, query: ListMembersQuery) -> Result<Vec<CommitteeMember>, CommitteeError> {
        tracing::debug!(session = %query.session_id, "Listing committee members");

        let members = self.members.find_by_session(&query.session_id).await?;
        Ok(members)
    }
}
