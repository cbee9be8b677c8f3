//! Candidate directory port.
//!
//! Candidates (and their program membership) are owned by the
//! student-records subsystem; this core only needs to resolve an id.

use crate::domain::foundation::{CandidateId, DomainError, ProgramId};
use async_trait::async_trait;

/// Candidate record as supplied by the student-records collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub program_id: ProgramId,
}

/// Lookup port for candidate records.
#[async_trait]
pub trait CandidateDirectory: Send + Sync {
    /// Resolve a candidate by id.
    ///
    /// Returns `None` for unknown candidates.
    async fn get_candidate(&self, id: &CandidateId)
        -> Result<Option<CandidateRecord>, DomainError>;
}
