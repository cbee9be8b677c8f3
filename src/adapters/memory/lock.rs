//! In-memory per-candidate lock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::{CandidateId, DomainError};
use crate::ports::{CandidateLock, LockLease};

/// One mutex per candidate, created on first acquisition.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateLock {
    locks: Arc<Mutex<HashMap<CandidateId, Arc<Mutex<()>>>>>,
}

impl InMemoryCandidateLock {
    /// Create a new lock provider.
    pub fn new() -> Self {
        Self::default()
    }
}

struct InMemoryLease {
    _guard: OwnedMutexGuard<()>,
}

impl LockLease for InMemoryLease {}

#[async_trait]
impl CandidateLock for InMemoryCandidateLock {
    async fn acquire(&self, candidate_id: &CandidateId) -> Result<Box<dyn LockLease>, DomainError> {
        // Clone the candidate's mutex out of the registry before awaiting
        // it, so the registry itself is never held across the wait.
        let candidate_mutex = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(*candidate_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        let guard = candidate_mutex.lock_owned().await;
        Ok(Box::new(InMemoryLease { _guard: guard }))
    }
}
