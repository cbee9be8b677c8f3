//! GetSessionHandler - Query handler for a single session.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, ExaminationSession};
use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

/// Query for one session by id.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for session lookup.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<ExaminationSession, CommitteeError> {
        tracing::debug!(session = %query.session_id, "Fetching examination session");

        self.sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(query.session_id))
    }
}
