//! ListCandidateSessionsHandler - Query handler for a candidate's sessions.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, ExaminationSession};
use crate::domain::foundation::CandidateId;
use crate::ports::SessionStore;

/// Query for all of a candidate's sessions, ordered by scheduled time.
#[derive(Debug, Clone)]
pub struct ListCandidateSessionsQuery {
    pub candidate_id: CandidateId,
}

/// Handler for listing a candidate's sessions.
pub struct ListCandidateSessionsHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ListCandidateSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        query: ListCandidateSessionsQuery,
    ) -> Result<Vec<ExaminationSession>, CommitteeError> {
        tracing::debug!(candidate = %query.candidate_id, "Listing candidate sessions");

        let sessions = self.sessions.find_by_candidate(&query.candidate_id).await?;
        Ok(sessions)
    }
}
