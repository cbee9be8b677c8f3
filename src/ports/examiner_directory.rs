//! Examiner directory port.
//!
//! Faculty members and external examiners are owned by their own
//! subsystems; this core resolves a tagged reference to confirm the
//! examiner exists before seating them on a panel.

use crate::domain::foundation::{DomainError, ExaminerRef};
use async_trait::async_trait;

/// Examiner record as supplied by the owning collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExaminerRecord {
    pub examiner: ExaminerRef,
    pub display_name: String,
}

/// Lookup port for examiner records.
#[async_trait]
pub trait ExaminerDirectory: Send + Sync {
    /// Resolve an examiner reference.
    ///
    /// Returns `None` when no examiner of the referenced kind exists under
    /// that id.
    async fn get_examiner(&self, examiner: &ExaminerRef)
        -> Result<Option<ExaminerRecord>, DomainError>;
}
