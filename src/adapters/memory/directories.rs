//! In-memory candidate and examiner directories.
//!
//! Stand-ins for the student-records and faculty/external-examiner
//! collaborators, seeded explicitly by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CandidateId, DomainError, ExaminerRef, ProgramId};
use crate::ports::{CandidateDirectory, CandidateRecord, ExaminerDirectory, ExaminerRecord};

/// In-memory candidate directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateDirectory {
    candidates: Arc<RwLock<HashMap<CandidateId, CandidateRecord>>>,
}

impl InMemoryCandidateDirectory {
    /// Create a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate, returning its id.
    pub async fn register(&self, program_id: ProgramId) -> CandidateId {
        let id = CandidateId::new();
        self.candidates
            .write()
            .await
            .insert(id, CandidateRecord { id, program_id });
        id
    }

    /// Register a candidate under a fixed id.
    pub async fn register_with_id(&self, id: CandidateId, program_id: ProgramId) {
        self.candidates
            .write()
            .await
            .insert(id, CandidateRecord { id, program_id });
    }
}

#[async_trait]
impl CandidateDirectory for InMemoryCandidateDirectory {
    async fn get_candidate(
        &self,
        id: &CandidateId,
    ) -> Result<Option<CandidateRecord>, DomainError> {
        let candidates = self.candidates.read().await;
        Ok(candidates.get(id).cloned())
    }
}

/// In-memory examiner directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExaminerDirectory {
    examiners: Arc<RwLock<HashMap<ExaminerRef, ExaminerRecord>>>,
}

impl InMemoryExaminerDirectory {
    /// Create a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an examiner under the given reference.
    pub async fn register(&self, examiner: ExaminerRef, display_name: impl Into<String>) {
        self.examiners.write().await.insert(
            examiner,
            ExaminerRecord {
                examiner,
                display_name: display_name.into(),
            },
        );
    }
}

#[async_trait]
impl ExaminerDirectory for InMemoryExaminerDirectory {
    async fn get_examiner(
        &self,
        examiner: &ExaminerRef,
    ) -> Result<Option<ExaminerRecord>, DomainError> {
        let examiners = self.examiners.read().await;
        Ok(examiners.get(examiner).cloned())
    }
}
