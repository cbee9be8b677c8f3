//! Per-candidate lock port.
//!
//! The conflict check reads a broader set of records than it writes, so
//! every write path that runs it must serialize against concurrent writers
//! for the same candidate. Handlers acquire the candidate's lease before
//! the check and hold it until the write has been persisted.

use crate::domain::foundation::{CandidateId, DomainError};
use async_trait::async_trait;

/// A held lease on one candidate's schedule. Released on drop.
pub trait LockLease: Send {}

/// Lock port scoping check-then-act sequences to one candidate.
#[async_trait]
pub trait CandidateLock: Send + Sync {
    /// Acquire the lease for a candidate, waiting for any current holder.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the lock provider fails
    async fn acquire(&self, candidate_id: &CandidateId) -> Result<Box<dyn LockLease>, DomainError>;
}
