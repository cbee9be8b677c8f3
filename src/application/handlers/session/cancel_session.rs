//! CancelSessionHandler - Command handler for cancelling a session.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, ExaminationSession};
use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

/// Command to cancel a session, with an optional reason recorded in the
/// session notes.
#[derive(Debug, Clone)]
pub struct CancelSessionCommand {
    pub session_id: SessionId,
    pub reason: Option<String>,
}

/// Handler for session cancellation.
pub struct CancelSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl CancelSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        cmd: CancelSessionCommand,
    ) -> Result<ExaminationSession, CommitteeError> {
        tracing::info!(session = %cmd.session_id, "Cancelling examination session");

        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;

        session.cancel(cmd.reason.as_deref())?;
        self.sessions.update(&session).await?;
        tracing::info!(session = %session.id(), "Examination session cancelled");

        Ok(session)
    }
}
