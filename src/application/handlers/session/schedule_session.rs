//! ScheduleSessionHandler - Command handler for scheduling a new session.

use std::sync::Arc;

use crate::domain::committee::{
    find_conflict, CommitteeError, ExaminationSession, SessionDetails,
};
use crate::domain::foundation::{CandidateId, ProgramId, SessionId, SessionType, Timestamp};
use crate::ports::{CandidateDirectory, CandidateLock, SessionStore};

/// Command to schedule a new examination session.
#[derive(Debug, Clone)]
pub struct ScheduleSessionCommand {
    pub candidate_id: CandidateId,
    pub program_id: ProgramId,
    pub session_type: SessionType,
    pub scheduled_at: Timestamp,
    pub details: SessionDetails,
}

/// Handler for scheduling sessions.
pub struct ScheduleSessionHandler {
    sessions: Arc<dyn SessionStore>,
    candidates: Arc<dyn CandidateDirectory>,
    locks: Arc<dyn CandidateLock>,
}

impl ScheduleSessionHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        candidates: Arc<dyn CandidateDirectory>,
        locks: Arc<dyn CandidateLock>,
    ) -> Self {
        Self {
            sessions,
            candidates,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: ScheduleSessionCommand,
    ) -> Result<ExaminationSession, CommitteeError> {
        tracing::info!(candidate = %cmd.candidate_id, "Scheduling examination session");

        // 1. The candidate must exist in the student-records collaborator.
        self.candidates
            .get_candidate(&cmd.candidate_id)
            .await?
            .ok_or(CommitteeError::CandidateNotFound(cmd.candidate_id))?;

        // 2. Conflict check and save happen under the candidate's lease.
        let _lease = self.locks.acquire(&cmd.candidate_id).await?;

        let active = self
            .sessions
            .find_active_for_candidate(&cmd.candidate_id, None)
            .await?;
        if let Some(conflicting) = find_conflict(&active, &cmd.scheduled_at) {
            return Err(CommitteeError::scheduling_conflict(conflicting));
        }

        let session = ExaminationSession::new(
            SessionId::new(),
            cmd.candidate_id,
            cmd.program_id,
            cmd.session_type,
            cmd.scheduled_at,
            cmd.details,
        )?;

        self.sessions.save(&session).await?;
        tracing::info!(session = %session.id(), "Examination session scheduled");

        Ok(session)
    }
}
