//! ListUpcomingSessionsHandler - Query handler for the program calendar.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, ExaminationSession};
use crate::domain::foundation::Timestamp;
use crate::ports::SessionStore;

/// Query for non-cancelled sessions scheduled at or after a point in time.
#[derive(Debug, Clone)]
pub struct ListUpcomingSessionsQuery {
    pub from: Timestamp,
}

/// Handler for listing upcoming sessions.
pub struct ListUpcomingSessionsHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ListUpcomingSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        query: ListUpcomingSessionsQuery,
    ) -> Result<Vec<ExaminationSession>, CommitteeError> {
        tracing::debug!("Listing upcoming sessions");

        let sessions = self.sessions.find_upcoming(&query.from).await?;
        Ok(sessions)
    }
}
