//! In-memory SessionStore adapter.
//!
//! Stores sessions in a HashMap behind an async RwLock. Useful for
//! testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::committee::ExaminationSession;
use crate::domain::foundation::{CandidateId, DomainError, ErrorCode, SessionId, Timestamp};
use crate::ports::SessionStore;

/// In-memory storage for examination sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, ExaminationSession>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &ExaminationSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &ExaminationSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ExaminationSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn find_active_for_candidate(
        &self,
        candidate_id: &CandidateId,
        excluding: Option<&SessionId>,
    ) -> Result<Vec<ExaminationSession>, DomainError> {
        let sessions = self.sessions.read().await;
        let mut active: Vec<ExaminationSession> = sessions
            .values()
            .filter(|s| s.candidate_id() == candidate_id)
            .filter(|s| s.status().blocks_schedule())
            .filter(|s| excluding != Some(s.id()))
            .cloned()
            .collect();
        active.sort_by_key(|s| *s.scheduled_at());
        Ok(active)
    }

    async fn find_by_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<ExaminationSession>, DomainError> {
        let sessions = self.sessions.read().await;
        let mut found: Vec<ExaminationSession> = sessions
            .values()
            .filter(|s| s.candidate_id() == candidate_id)
            .cloned()
            .collect();
        found.sort_by_key(|s| *s.scheduled_at());
        Ok(found)
    }

    async fn find_upcoming(&self, from: &Timestamp) -> Result<Vec<ExaminationSession>, DomainError> {
        let sessions = self.sessions.read().await;
        let mut upcoming: Vec<ExaminationSession> = sessions
            .values()
            .filter(|s| s.status().blocks_schedule())
            .filter(|s| !s.scheduled_at().is_before(from))
            .cloned()
            .collect();
        upcoming.sort_by_key(|s| *s.scheduled_at());
        Ok(upcoming)
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::committee::SessionDetails;
    use crate::domain::foundation::{ProgramId, SessionType};

    fn session_for(candidate_id: CandidateId, scheduled_at: Timestamp) -> ExaminationSession {
        ExaminationSession::new(
            SessionId::new(),
            candidate_id,
            ProgramId::new(),
            SessionType::QualificationMasters,
            scheduled_at,
            SessionDetails::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_roundtrip() {
        let store = InMemorySessionStore::new();
        let session = session_for(CandidateId::new(), Timestamp::now());

        store.save(&session).await.unwrap();
        let loaded = store.find_by_id(session.id()).await.unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn update_fails_for_unknown_session() {
        let store = InMemorySessionStore::new();
        let session = session_for(CandidateId::new(), Timestamp::now());

        let result = store.update(&session).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn find_active_excludes_cancelled_and_excluded() {
        let store = InMemorySessionStore::new();
        let candidate = CandidateId::new();
        let base = Timestamp::now();

        let mut cancelled = session_for(candidate, base);
        cancelled.cancel(None).unwrap();
        let kept = session_for(candidate, base.plus_hours(5));
        let excluded = session_for(candidate, base.plus_hours(10));

        store.save(&cancelled).await.unwrap();
        store.save(&kept).await.unwrap();
        store.save(&excluded).await.unwrap();

        let active = store
            .find_active_for_candidate(&candidate, Some(excluded.id()))
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), kept.id());
    }

    #[tokio::test]
    async fn find_active_ignores_other_candidates() {
        let store = InMemorySessionStore::new();
        let candidate = CandidateId::new();
        let other = session_for(CandidateId::new(), Timestamp::now());
        store.save(&other).await.unwrap();

        let active = store.find_active_for_candidate(&candidate, None).await.unwrap();
        assert!(active.is_empty());
    }

    #[tokio::test]
    async fn find_upcoming_is_sorted_and_filtered() {
        let store = InMemorySessionStore::new();
        let now = Timestamp::now();

        let past = session_for(CandidateId::new(), now.minus_hours(5));
        let later = session_for(CandidateId::new(), now.plus_hours(10));
        let sooner = session_for(CandidateId::new(), now.plus_hours(5));

        store.save(&past).await.unwrap();
        store.save(&later).await.unwrap();
        store.save(&sooner).await.unwrap();

        let upcoming = store.find_upcoming(&now).await.unwrap();
        let ids: Vec<_> = upcoming.iter().map(|s| *s.id()).collect();
        assert_eq!(ids, vec![*sooner.id(), *later.id()]);
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let store = InMemorySessionStore::new();
        let session = session_for(CandidateId::new(), Timestamp::now());
        store.save(&session).await.unwrap();

        store.delete(session.id()).await.unwrap();
        assert_eq!(store.session_count().await, 0);
        assert!(store.delete(session.id()).await.is_err());
    }
}
