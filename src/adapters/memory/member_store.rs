//! In-memory MemberStore adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::committee::CommitteeMember;
use crate::domain::foundation::{DomainError, ErrorCode, ExaminerRef, MemberId, SessionId};
use crate::ports::MemberStore;

/// In-memory storage for committee members.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberStore {
    members: Arc<RwLock<HashMap<MemberId, CommitteeMember>>>,
}

impl InMemoryMemberStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.members.write().await.clear();
    }

    /// Get the number of stored members.
    pub async fn member_count(&self) -> usize {
        self.members.read().await.len()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn save(&self, member: &CommitteeMember) -> Result<(), DomainError> {
        let mut members = self.members.write().await;
        members.insert(*member.id(), member.clone());
        Ok(())
    }

    async fn update(&self, member: &CommitteeMember) -> Result<(), DomainError> {
        let mut members = self.members.write().await;
        if !members.contains_key(member.id()) {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("Committee member not found: {}", member.id()),
            ));
        }
        members.insert(*member.id(), member.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<CommitteeMember>, DomainError> {
        let members = self.members.read().await;
        Ok(members.get(id).cloned())
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<CommitteeMember>, DomainError> {
        let members = self.members.read().await;
        let mut found: Vec<CommitteeMember> = members
            .values()
            .filter(|m| m.session_id() == session_id)
            .cloned()
            .collect();
        // Explicit presentation orders first, then creation order.
        found.sort_by(|a, b| {
            match (a.presentation_order(), b.presentation_order()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.created_at().cmp(b.created_at()),
            }
        });
        Ok(found)
    }

    async fn exists_for_examiner(
        &self,
        session_id: &SessionId,
        examiner: &ExaminerRef,
    ) -> Result<bool, DomainError> {
        let members = self.members.read().await;
        Ok(members
            .values()
            .any(|m| m.session_id() == session_id && m.examiner() == examiner))
    }

    async fn delete(&self, id: &MemberId) -> Result<(), DomainError> {
        let mut members = self.members.write().await;
        if members.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("Committee member not found: {}", id),
            ));
        }
        Ok(())
    }

    async fn delete_by_session(&self, session_id: &SessionId) -> Result<(), DomainError> {
        let mut members = self.members.write().await;
        members.retain(|_, m| m.session_id() != session_id);
        Ok(())
    }
}
