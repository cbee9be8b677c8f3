//! MarkSessionHeldHandler - Command handler for recording a session's outcome.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, Composition, ExaminationSession};
use crate::domain::foundation::{SessionId, SessionResult};
use crate::ports::{MemberStore, SessionStore};

/// Command to mark a session as held with its recorded result.
#[derive(Debug, Clone)]
pub struct MarkSessionHeldCommand {
    pub session_id: SessionId,
    pub result: SessionResult,
}

/// Handler for the held transition.
pub struct MarkSessionHeldHandler {
    sessions: Arc<dyn SessionStore>,
    members: Arc<dyn MemberStore>,
}

impl MarkSessionHeldHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, members: Arc<dyn MemberStore>) -> Self {
        Self { sessions, members }
    }

    pub async fn handle(
        &self,
        cmd: MarkSessionHeldCommand,
    ) -> Result<ExaminationSession, CommitteeError> {
        tracing::info!(session = %cmd.session_id, result = %cmd.result, "Marking session as held");

        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;

        // Composition gates the whole operation; the result is only
        // recorded for a valid panel.
        let members = self.members.find_by_session(session.id()).await?;
        let violations = Composition::of(&members).violations();
        if !violations.is_empty() {
            return Err(CommitteeError::InvalidComposition(violations));
        }

        session.mark_held(cmd.result)?;
        self.sessions.update(&session).await?;
        tracing::info!(session = %session.id(), "Session held");

        Ok(session)
    }
}
