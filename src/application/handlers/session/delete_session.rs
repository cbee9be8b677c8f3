//! DeleteSessionHandler - Command handler for hard-deleting a session.

use std::sync::Arc;

use crate::domain::committee::CommitteeError;
use crate::domain::foundation::SessionId;
use crate::ports::{MemberStore, SessionStore};

/// Command to hard-delete a session and its members.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for session deletion. Held sessions are never deleted.
pub struct DeleteSessionHandler {
    sessions: Arc<dyn SessionStore>,
    members: Arc<dyn MemberStore>,
}

impl DeleteSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, members: Arc<dyn MemberStore>) -> Self {
        Self { sessions, members }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), CommitteeError> {
        tracing::info!(session = %cmd.session_id, "Deleting examination session");

        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;

        session.ensure_not_held()?;

        // The session owns its members: they go with it.
        self.members.delete_by_session(session.id()).await?;
        self.sessions.delete(session.id()).await?;
        tracing::info!(session = %cmd.session_id, "Examination session deleted");

        Ok(())
    }
}
