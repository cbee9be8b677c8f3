//! UpdateSessionHandler - Command handler for patching session fields.

use std::sync::Arc;

use crate::domain::committee::{find_conflict, CommitteeError, ExaminationSession, SessionPatch};
use crate::domain::foundation::SessionId;
use crate::ports::{CandidateLock, SessionStore};

/// Command to update a session's descriptive fields and, optionally, its
/// scheduled time.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub session_id: SessionId,
    pub patch: SessionPatch,
}

/// Handler for session updates.
pub struct UpdateSessionHandler {
    sessions: Arc<dyn SessionStore>,
    locks: Arc<dyn CandidateLock>,
}

impl UpdateSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, locks: Arc<dyn CandidateLock>) -> Self {
        Self { sessions, locks }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSessionCommand,
    ) -> Result<ExaminationSession, CommitteeError> {
        tracing::info!(session = %cmd.session_id, "Updating examination session");

        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;

        let proposed = cmd
            .patch
            .scheduled_at
            .filter(|t| t != session.scheduled_at());

        if let Some(proposed) = proposed {
            // Moving the session re-runs the conflict check under the
            // candidate's lease, excluding the session itself.
            let _lease = self.locks.acquire(session.candidate_id()).await?;

            let active = self
                .sessions
                .find_active_for_candidate(session.candidate_id(), Some(session.id()))
                .await?;
            if let Some(conflicting) = find_conflict(&active, &proposed) {
                return Err(CommitteeError::scheduling_conflict(conflicting));
            }

            session.apply_patch(cmd.patch)?;
            self.sessions.update(&session).await?;
        } else {
            session.apply_patch(cmd.patch)?;
            self.sessions.update(&session).await?;
        }

        Ok(session)
    }
}
