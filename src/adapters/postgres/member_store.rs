//! PostgreSQL implementation of MemberStore.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::committee::CommitteeMember;
use crate::domain::foundation::{
    CommitteeRole, DomainError, ErrorCode, ExaminerRef, ExternalExaminerId, FacultyId,
    InvitationStatus, MemberId, MemberType, SessionId, Timestamp,
};
use crate::ports::MemberStore;

/// PostgreSQL implementation of MemberStore.
#[derive(Clone)]
pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    /// Creates a new PostgresMemberStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const MEMBER_COLUMNS: &str = r#"
    id, session_id, examiner_kind, examiner_id, member_type, role,
    invitation_status, invited_at, responded_at, presentation_order,
    notes, created_at
"#;

#[async_trait]
impl MemberStore for PostgresMemberStore {
    async fn save(&self, member: &CommitteeMember) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO committee_members (
                id, session_id, examiner_kind, examiner_id, member_type, role,
                invitation_status, invited_at, responded_at, presentation_order,
                notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(member.id().as_uuid())
        .bind(member.session_id().as_uuid())
        .bind(examiner_kind_str(member.examiner()))
        .bind(member.examiner().examiner_uuid())
        .bind(member_type_to_str(member.member_type()))
        .bind(role_to_str(member.role()))
        .bind(invitation_status_to_str(member.invitation_status()))
        .bind(member.invited_at().map(|t| *t.as_datetime()))
        .bind(member.responded_at().map(|t| *t.as_datetime()))
        .bind(member.presentation_order().map(|o| o as i32))
        .bind(member.notes())
        .bind(member.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert committee member: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, member: &CommitteeMember) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE committee_members SET
                member_type = $2,
                role = $3,
                invitation_status = $4,
                invited_at = $5,
                responded_at = $6,
                presentation_order = $7,
                notes = $8
            WHERE id = $1
            "#,
        )
        .bind(member.id().as_uuid())
        .bind(member_type_to_str(member.member_type()))
        .bind(role_to_str(member.role()))
        .bind(invitation_status_to_str(member.invitation_status()))
        .bind(member.invited_at().map(|t| *t.as_datetime()))
        .bind(member.responded_at().map(|t| *t.as_datetime()))
        .bind(member.presentation_order().map(|o| o as i32))
        .bind(member.notes())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update committee member: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("Committee member not found: {}", member.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<CommitteeMember>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM committee_members WHERE id = $1",
            MEMBER_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch committee member: {}", e),
            )
        })?;

        row.map(row_to_member).transpose()
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<CommitteeMember>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM committee_members
            WHERE session_id = $1
            ORDER BY presentation_order NULLS LAST, created_at
            "#,
            MEMBER_COLUMNS
        ))
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session members: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_member).collect()
    }

    async fn exists_for_examiner(
        &self,
        session_id: &SessionId,
        examiner: &ExaminerRef,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM committee_members
            WHERE session_id = $1 AND examiner_kind = $2 AND examiner_id = $3
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(examiner_kind_str(examiner))
        .bind(examiner.examiner_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check examiner membership: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn delete(&self, id: &MemberId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM committee_members WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete committee member: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("Committee member not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn delete_by_session(&self, session_id: &SessionId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM committee_members WHERE session_id = $1")
            .bind(session_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete session members: {}", e),
                )
            })?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn examiner_kind_str(examiner: &ExaminerRef) -> &'static str {
    match examiner {
        ExaminerRef::Internal(_) => "internal",
        ExaminerRef::External(_) => "external",
    }
}

fn make_examiner_ref(kind: &str, id: uuid::Uuid) -> Result<ExaminerRef, DomainError> {
    match kind {
        "internal" => Ok(ExaminerRef::Internal(FacultyId::from_uuid(id))),
        "external" => Ok(ExaminerRef::External(ExternalExaminerId::from_uuid(id))),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid examiner kind: {}", kind),
        )),
    }
}

fn member_type_to_str(member_type: MemberType) -> &'static str {
    match member_type {
        MemberType::Titular => "titular",
        MemberType::Alternate => "alternate",
    }
}

fn str_to_member_type(s: &str) -> Result<MemberType, DomainError> {
    match s {
        "titular" => Ok(MemberType::Titular),
        "alternate" => Ok(MemberType::Alternate),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid member type: {}", s),
        )),
    }
}

fn role_to_str(role: CommitteeRole) -> &'static str {
    match role {
        CommitteeRole::Chair => "chair",
        CommitteeRole::InternalMember => "internal_member",
        CommitteeRole::ExternalMember => "external_member",
        CommitteeRole::Advisor => "advisor",
        CommitteeRole::CoAdvisor => "co_advisor",
    }
}

fn str_to_role(s: &str) -> Result<CommitteeRole, DomainError> {
    match s {
        "chair" => Ok(CommitteeRole::Chair),
        "internal_member" => Ok(CommitteeRole::InternalMember),
        "external_member" => Ok(CommitteeRole::ExternalMember),
        "advisor" => Ok(CommitteeRole::Advisor),
        "co_advisor" => Ok(CommitteeRole::CoAdvisor),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid committee role: {}", s),
        )),
    }
}

fn invitation_status_to_str(status: InvitationStatus) -> &'static str {
    match status {
        InvitationStatus::Pending => "pending",
        InvitationStatus::Sent => "sent",
        InvitationStatus::Confirmed => "confirmed",
        InvitationStatus::Declined => "declined",
        InvitationStatus::Cancelled => "cancelled",
    }
}

fn str_to_invitation_status(s: &str) -> Result<InvitationStatus, DomainError> {
    match s {
        "pending" => Ok(InvitationStatus::Pending),
        "sent" => Ok(InvitationStatus::Sent),
        "confirmed" => Ok(InvitationStatus::Confirmed),
        "declined" => Ok(InvitationStatus::Declined),
        "cancelled" => Ok(InvitationStatus::Cancelled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid invitation status: {}", s),
        )),
    }
}

fn column_err(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read column '{}': {}", column, e),
        )
    }
}

fn row_to_member(row: sqlx::postgres::PgRow) -> Result<CommitteeMember, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(column_err("id"))?;
    let session_id: uuid::Uuid = row.try_get("session_id").map_err(column_err("session_id"))?;
    let examiner_kind: String = row
        .try_get("examiner_kind")
        .map_err(column_err("examiner_kind"))?;
    let examiner_id: uuid::Uuid = row.try_get("examiner_id").map_err(column_err("examiner_id"))?;
    let member_type: String = row.try_get("member_type").map_err(column_err("member_type"))?;
    let role: String = row.try_get("role").map_err(column_err("role"))?;
    let invitation_status: String = row
        .try_get("invitation_status")
        .map_err(column_err("invitation_status"))?;
    let invited_at: Option<chrono::DateTime<chrono::Utc>> =
        row.try_get("invited_at").map_err(column_err("invited_at"))?;
    let responded_at: Option<chrono::DateTime<chrono::Utc>> =
        row.try_get("responded_at").map_err(column_err("responded_at"))?;
    let presentation_order: Option<i32> = row
        .try_get("presentation_order")
        .map_err(column_err("presentation_order"))?;
    let notes: Option<String> = row.try_get("notes").map_err(column_err("notes"))?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(column_err("created_at"))?;

    Ok(CommitteeMember::reconstitute(
        MemberId::from_uuid(id),
        SessionId::from_uuid(session_id),
        make_examiner_ref(&examiner_kind, examiner_id)?,
        str_to_member_type(&member_type)?,
        str_to_role(&role)?,
        str_to_invitation_status(&invitation_status)?,
        invited_at.map(Timestamp::from_datetime),
        responded_at.map(Timestamp::from_datetime),
        presentation_order.map(|o| o as u32),
        notes,
        Timestamp::from_datetime(created_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_type_conversion_roundtrips() {
        for member_type in [MemberType::Titular, MemberType::Alternate] {
            assert_eq!(
                str_to_member_type(member_type_to_str(member_type)).unwrap(),
                member_type
            );
        }
    }

    #[test]
    fn role_conversion_roundtrips() {
        for role in [
            CommitteeRole::Chair,
            CommitteeRole::InternalMember,
            CommitteeRole::ExternalMember,
            CommitteeRole::Advisor,
            CommitteeRole::CoAdvisor,
        ] {
            assert_eq!(str_to_role(role_to_str(role)).unwrap(), role);
        }
    }

    #[test]
    fn invitation_status_conversion_roundtrips() {
        for status in [
            InvitationStatus::Pending,
            InvitationStatus::Sent,
            InvitationStatus::Confirmed,
            InvitationStatus::Declined,
            InvitationStatus::Cancelled,
        ] {
            assert_eq!(
                str_to_invitation_status(invitation_status_to_str(status)).unwrap(),
                status
            );
        }
    }

    #[test]
    fn examiner_ref_rebuilds_from_kind_and_id() {
        let uuid = uuid::Uuid::new_v4();
        let internal = make_examiner_ref("internal", uuid).unwrap();
        assert!(!internal.is_external());
        assert_eq!(internal.examiner_uuid(), &uuid);

        let external = make_examiner_ref("external", uuid).unwrap();
        assert!(external.is_external());

        assert!(make_examiner_ref("guest", uuid).is_err());
    }
}
