//! RescheduleSessionHandler - Command handler for moving a session.

use std::sync::Arc;

use crate::domain::committee::{find_conflict, CommitteeError, ExaminationSession};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{CandidateLock, SessionStore};

/// Command to reschedule a session to a new time.
#[derive(Debug, Clone)]
pub struct RescheduleSessionCommand {
    pub session_id: SessionId,
    pub new_time: Timestamp,
}

/// Handler for session rescheduling.
pub struct RescheduleSessionHandler {
    sessions: Arc<dyn SessionStore>,
    locks: Arc<dyn CandidateLock>,
}

impl RescheduleSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, locks: Arc<dyn CandidateLock>) -> Self {
        Self { sessions, locks }
    }

    pub async fn handle(
        &self,
        cmd: RescheduleSessionCommand,
    ) -> Result<ExaminationSession, CommitteeError> {
        tracing::info!(session = %cmd.session_id, "Rescheduling examination session");

        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;

        // Status guard comes before the conflict check so a session that
        // cannot move never reports a conflict.
        if !session.status().can_reschedule() {
            return Err(CommitteeError::invalid_transition(format!(
                "Cannot reschedule a session in status {}",
                session.status()
            )));
        }

        let _lease = self.locks.acquire(session.candidate_id()).await?;

        let active = self
            .sessions
            .find_active_for_candidate(session.candidate_id(), Some(session.id()))
            .await?;
        if let Some(conflicting) = find_conflict(&active, &cmd.new_time) {
            return Err(CommitteeError::scheduling_conflict(conflicting));
        }

        session.reschedule(cmd.new_time)?;
        self.sessions.update(&session).await?;
        tracing::info!(session = %session.id(), "Examination session rescheduled");

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCandidateLock, InMemorySessionStore};
    use crate::domain::committee::SessionDetails;
    use crate::domain::foundation::{
        CandidateId, ProgramId, SessionStatus, SessionType, Timestamp,
    };

    fn session_for(candidate_id: CandidateId, scheduled_at: Timestamp) -> ExaminationSession {
        ExaminationSession::new(
            SessionId::new(),
            candidate_id,
            ProgramId::new(),
            SessionType::DefenseDoctoral,
            scheduled_at,
            SessionDetails::default(),
        )
        .unwrap()
    }

    fn handler(sessions: Arc<InMemorySessionStore>) -> RescheduleSessionHandler {
        RescheduleSessionHandler::new(sessions, Arc::new(InMemoryCandidateLock::new()))
    }

    #[tokio::test]
    async fn reschedules_to_free_slot() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let session = session_for(CandidateId::new(), Timestamp::now().plus_days(7));
        sessions.save(&session).await.unwrap();

        let new_time = session.scheduled_at().plus_days(2);
        let rescheduled = handler(sessions.clone())
            .handle(RescheduleSessionCommand {
                session_id: *session.id(),
                new_time,
            })
            .await
            .unwrap();

        assert_eq!(rescheduled.status(), SessionStatus::Rescheduled);
        assert_eq!(rescheduled.scheduled_at(), &new_time);
    }

    #[tokio::test]
    async fn rejects_conflicting_new_time() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let candidate = CandidateId::new();
        let base = Timestamp::now().plus_days(7);

        let blocker = session_for(candidate, base);
        let session = session_for(candidate, base.plus_hours(8));
        sessions.save(&blocker).await.unwrap();
        sessions.save(&session).await.unwrap();

        let result = handler(sessions.clone())
            .handle(RescheduleSessionCommand {
                session_id: *session.id(),
                new_time: base.plus_minutes(119),
            })
            .await;

        assert!(matches!(
            result,
            Err(CommitteeError::SchedulingConflict { conflicting_session }) if conflicting_session == *blocker.id()
        ));
        // The stored session is untouched.
        let stored = sessions.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Scheduled);
    }

    #[tokio::test]
    async fn two_hours_from_neighbor_is_accepted() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let candidate = CandidateId::new();
        let base = Timestamp::now().plus_days(7);

        let neighbor = session_for(candidate, base);
        let session = session_for(candidate, base.plus_hours(8));
        sessions.save(&neighbor).await.unwrap();
        sessions.save(&session).await.unwrap();

        handler(sessions)
            .handle(RescheduleSessionCommand {
                session_id: *session.id(),
                new_time: base.plus_minutes(120),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rescheduled_session_cannot_move_again() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let session = session_for(CandidateId::new(), Timestamp::now().plus_days(7));
        sessions.save(&session).await.unwrap();

        let h = handler(sessions);
        h.handle(RescheduleSessionCommand {
            session_id: *session.id(),
            new_time: session.scheduled_at().plus_days(1),
        })
        .await
        .unwrap();

        let result = h
            .handle(RescheduleSessionCommand {
                session_id: *session.id(),
                new_time: session.scheduled_at().plus_days(2),
            })
            .await;
        assert!(matches!(result, Err(CommitteeError::InvalidTransition(_))));
    }

    #[tokio::test]
    async fn cancelled_session_cannot_be_rescheduled() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let mut session = session_for(CandidateId::new(), Timestamp::now().plus_days(7));
        session.cancel(None).unwrap();
        sessions.save(&session).await.unwrap();

        let result = handler(sessions)
            .handle(RescheduleSessionCommand {
                session_id: *session.id(),
                new_time: Timestamp::now().plus_days(10),
            })
            .await;
        assert!(matches!(result, Err(CommitteeError::InvalidTransition(_))));
    }

    #[tokio::test]
    async fn fails_for_unknown_session() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let result = handler(sessions)
            .handle(RescheduleSessionCommand {
                session_id: SessionId::new(),
                new_time: Timestamp::now(),
            })
            .await;
        assert!(matches!(result, Err(CommitteeError::SessionNotFound(_))));
    }
}
