//! ConfirmSessionHandler - Command handler for confirming a schedule.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, ExaminationSession};
use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

/// Command to confirm a scheduled session.
#[derive(Debug, Clone)]
pub struct ConfirmSessionCommand {
    pub session_id: SessionId,
}

/// Handler for session confirmation.
pub struct ConfirmSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ConfirmSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmSessionCommand,
    ) -> Result<ExaminationSession, CommitteeError> {
        tracing::info!(session = %cmd.session_id, "Confirming examination session");

        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;

        session.confirm()?;
        self.sessions.update(&session).await?;

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::committee::SessionDetails;
    use crate::domain::foundation::{
        CandidateId, ProgramId, SessionStatus, SessionType, Timestamp,
    };

    fn scheduled_session() -> ExaminationSession {
        ExaminationSession::new(
            SessionId::new(),
            CandidateId::new(),
            ProgramId::new(),
            SessionType::QualificationDoctoral,
            Timestamp::now().plus_days(14),
            SessionDetails::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn confirms_scheduled_session() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let session = scheduled_session();
        sessions.save(&session).await.unwrap();

        let handler = ConfirmSessionHandler::new(sessions.clone());
        let confirmed = handler
            .handle(ConfirmSessionCommand { session_id: *session.id() })
            .await
            .unwrap();

        assert_eq!(confirmed.status(), SessionStatus::Confirmed);
        let stored = sessions.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Confirmed);
    }

    #[tokio::test]
    async fn fails_for_unknown_session() {
        let handler = ConfirmSessionHandler::new(Arc::new(InMemorySessionStore::new()));
        let result = handler
            .handle(ConfirmSessionCommand { session_id: SessionId::new() })
            .await;
        assert!(matches!(result, Err(CommitteeError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn confirming_twice_fails() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let session = scheduled_session();
        sessions.save(&session).await.unwrap();

        let handler = ConfirmSessionHandler::new(sessions);
        let cmd = ConfirmSessionCommand { session_id: *session.id() };
        handler.handle(cmd.clone()).await.unwrap();

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(CommitteeError::InvalidTransition(_))));
    }

    #[tokio::test]
    async fn cancelled_session_cannot_be_confirmed() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let mut session = scheduled_session();
        session.cancel(None).unwrap();
        sessions.save(&session).await.unwrap();

        let handler = ConfirmSessionHandler::new(sessions);
        let result = handler
            .handle(ConfirmSessionCommand { session_id: *session.id() })
            .await;
        assert!(matches!(result, Err(CommitteeError::InvalidTransition(_))));
    }
}
