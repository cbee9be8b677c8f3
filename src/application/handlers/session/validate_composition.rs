//! ValidateCompositionHandler - Read-only composition check.

use std::sync::Arc;

use crate::domain::committee::{CommitteeError, Composition, CompositionViolation};
use crate::domain::foundation::SessionId;
use crate::ports::{MemberStore, SessionStore};

/// Command to check a session's current panel against the composition rules.
#[derive(Debug, Clone)]
pub struct ValidateCompositionCommand {
    pub session_id: SessionId,
}

/// Outcome of a composition check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionReport {
    pub titular_count: usize,
    pub external_count: usize,
    pub violations: Vec<CompositionViolation>,
}

impl CompositionReport {
    /// True when the panel satisfies every rule.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Handler for the read-only composition check.
pub struct ValidateCompositionHandler {
    sessions: Arc<dyn SessionStore>,
    members: Arc<dyn MemberStore>,
}

impl ValidateCompositionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, members: Arc<dyn MemberStore>) -> Self {
        Self { sessions, members }
    }

    pub async fn handle(
        &self,
        cmd: ValidateCompositionCommand,
    ) -> Result<CompositionReport, CommitteeError> {
        tracing::debug!(session = %cmd.session_id, "Validating committee composition");

        self.sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CommitteeError::SessionNotFound(cmd.session_id))?;

        let members = self.members.find_by_session(&cmd.session_id).await?;
        let composition = Composition::of(&members);

        Ok(CompositionReport {
            titular_count: composition.titular_count(),
            external_count: composition.external_count(),
            violations: composition.violations(),
        })
    }
}
