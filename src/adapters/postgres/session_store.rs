//! PostgreSQL implementation of SessionStore.
//!
//! Persists ExaminationSession aggregates to PostgreSQL.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::committee::{ExaminationSession, SessionDetails};
use crate::domain::foundation::{
    CandidateId, DomainError, ErrorCode, ProgramId, SessionId, SessionResult, SessionStatus,
    SessionType, Timestamp,
};
use crate::ports::SessionStore;

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SESSION_COLUMNS: &str = r#"
    id, candidate_id, program_id, session_type, scheduled_at,
    location, is_remote, videoconference_link, work_title,
    advisor_participates, notes, minutes_document_ref, thesis_document_ref,
    status, result, held_at, created_at, updated_at
"#;

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn save(&self, session: &ExaminationSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO examination_sessions (
                id, candidate_id, program_id, session_type, scheduled_at,
                location, is_remote, videoconference_link, work_title,
                advisor_participates, notes, minutes_document_ref, thesis_document_ref,
                status, result, held_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.candidate_id().as_uuid())
        .bind(session.program_id().as_uuid())
        .bind(session_type_to_str(session.session_type()))
        .bind(session.scheduled_at().as_datetime())
        .bind(session.details().location.as_deref())
        .bind(session.details().is_remote)
        .bind(session.details().videoconference_link.as_deref())
        .bind(session.details().work_title.as_deref())
        .bind(session.details().advisor_participates)
        .bind(session.details().notes.as_deref())
        .bind(session.details().minutes_document_ref.as_deref())
        .bind(session.details().thesis_document_ref.as_deref())
        .bind(session_status_to_str(session.status()))
        .bind(session.result().map(session_result_to_str))
        .bind(session.held_at().map(|t| *t.as_datetime()))
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert session: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, session: &ExaminationSession) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE examination_sessions SET
                scheduled_at = $2,
                location = $3,
                is_remote = $4,
                videoconference_link = $5,
                work_title = $6,
                advisor_participates = $7,
                notes = $8,
                minutes_document_ref = $9,
                thesis_document_ref = $10,
                status = $11,
                result = $12,
                held_at = $13,
                updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.scheduled_at().as_datetime())
        .bind(session.details().location.as_deref())
        .bind(session.details().is_remote)
        .bind(session.details().videoconference_link.as_deref())
        .bind(session.details().work_title.as_deref())
        .bind(session.details().advisor_participates)
        .bind(session.details().notes.as_deref())
        .bind(session.details().minutes_document_ref.as_deref())
        .bind(session.details().thesis_document_ref.as_deref())
        .bind(session_status_to_str(session.status()))
        .bind(session.result().map(session_result_to_str))
        .bind(session.held_at().map(|t| *t.as_datetime()))
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update session: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ExaminationSession>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM examination_sessions WHERE id = $1",
            SESSION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session: {}", e),
            )
        })?;

        row.map(row_to_session).transpose()
    }

    async fn find_active_for_candidate(
        &self,
        candidate_id: &CandidateId,
        excluding: Option<&SessionId>,
    ) -> Result<Vec<ExaminationSession>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM examination_sessions
            WHERE candidate_id = $1
              AND status <> 'cancelled'
              AND ($2::uuid IS NULL OR id <> $2)
            ORDER BY scheduled_at
            "#,
            SESSION_COLUMNS
        ))
        .bind(candidate_id.as_uuid())
        .bind(excluding.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch candidate sessions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn find_by_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<ExaminationSession>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM examination_sessions
            WHERE candidate_id = $1
            ORDER BY scheduled_at
            "#,
            SESSION_COLUMNS
        ))
        .bind(candidate_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch candidate sessions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn find_upcoming(&self, from: &Timestamp) -> Result<Vec<ExaminationSession>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM examination_sessions
            WHERE scheduled_at >= $1
              AND status <> 'cancelled'
            ORDER BY scheduled_at
            "#,
            SESSION_COLUMNS
        ))
        .bind(from.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch upcoming sessions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM examination_sessions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete session: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn session_status_to_str(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Scheduled => "scheduled",
        SessionStatus::Confirmed => "confirmed",
        SessionStatus::Held => "held",
        SessionStatus::Cancelled => "cancelled",
        SessionStatus::Rescheduled => "rescheduled",
    }
}

fn str_to_session_status(s: &str) -> Result<SessionStatus, DomainError> {
    match s {
        "scheduled" => Ok(SessionStatus::Scheduled),
        "confirmed" => Ok(SessionStatus::Confirmed),
        "held" => Ok(SessionStatus::Held),
        "cancelled" => Ok(SessionStatus::Cancelled),
        "rescheduled" => Ok(SessionStatus::Rescheduled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", s),
        )),
    }
}

fn session_type_to_str(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::QualificationMasters => "qualification_masters",
        SessionType::QualificationDoctoral => "qualification_doctoral",
        SessionType::DefenseMasters => "defense_masters",
        SessionType::DefenseDoctoral => "defense_doctoral",
        SessionType::DefenseDirectDoctoral => "defense_direct_doctoral",
        SessionType::ProficiencyExam => "proficiency_exam",
    }
}

fn str_to_session_type(s: &str) -> Result<SessionType, DomainError> {
    match s {
        "qualification_masters" => Ok(SessionType::QualificationMasters),
        "qualification_doctoral" => Ok(SessionType::QualificationDoctoral),
        "defense_masters" => Ok(SessionType::DefenseMasters),
        "defense_doctoral" => Ok(SessionType::DefenseDoctoral),
        "defense_direct_doctoral" => Ok(SessionType::DefenseDirectDoctoral),
        "proficiency_exam" => Ok(SessionType::ProficiencyExam),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session type: {}", s),
        )),
    }
}

fn session_result_to_str(result: SessionResult) -> &'static str {
    match result {
        SessionResult::Approved => "approved",
        SessionResult::ApprovedWithRestrictions => "approved_with_restrictions",
        SessionResult::ApprovedWithCorrections => "approved_with_corrections",
        SessionResult::Rejected => "rejected",
    }
}

fn str_to_session_result(s: &str) -> Result<SessionResult, DomainError> {
    match s {
        "approved" => Ok(SessionResult::Approved),
        "approved_with_restrictions" => Ok(SessionResult::ApprovedWithRestrictions),
        "approved_with_corrections" => Ok(SessionResult::ApprovedWithCorrections),
        "rejected" => Ok(SessionResult::Rejected),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session result: {}", s),
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

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<ExaminationSession, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(column_err("id"))?;
    let candidate_id: uuid::Uuid = row.try_get("candidate_id").map_err(column_err("candidate_id"))?;
    let program_id: uuid::Uuid = row.try_get("program_id").map_err(column_err("program_id"))?;

    let session_type: String = row.try_get("session_type").map_err(column_err("session_type"))?;
    let scheduled_at: chrono::DateTime<chrono::Utc> =
        row.try_get("scheduled_at").map_err(column_err("scheduled_at"))?;

    let details = SessionDetails {
        location: row.try_get("location").map_err(column_err("location"))?,
        is_remote: row.try_get("is_remote").map_err(column_err("is_remote"))?,
        videoconference_link: row
            .try_get("videoconference_link")
            .map_err(column_err("videoconference_link"))?,
        work_title: row.try_get("work_title").map_err(column_err("work_title"))?,
        advisor_participates: row
            .try_get("advisor_participates")
            .map_err(column_err("advisor_participates"))?,
        notes: row.try_get("notes").map_err(column_err("notes"))?,
        minutes_document_ref: row
            .try_get("minutes_document_ref")
            .map_err(column_err("minutes_document_ref"))?,
        thesis_document_ref: row
            .try_get("thesis_document_ref")
            .map_err(column_err("thesis_document_ref"))?,
    };

    let status: String = row.try_get("status").map_err(column_err("status"))?;
    let result: Option<String> = row.try_get("result").map_err(column_err("result"))?;
    let held_at: Option<chrono::DateTime<chrono::Utc>> =
        row.try_get("held_at").map_err(column_err("held_at"))?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(column_err("created_at"))?;
    let updated_at: chrono::DateTime<chrono::Utc> =
        row.try_get("updated_at").map_err(column_err("updated_at"))?;

    Ok(ExaminationSession::reconstitute(
        SessionId::from_uuid(id),
        CandidateId::from_uuid(candidate_id),
        ProgramId::from_uuid(program_id),
        str_to_session_type(&session_type)?,
        Timestamp::from_datetime(scheduled_at),
        details,
        str_to_session_status(&status)?,
        result.as_deref().map(str_to_session_result).transpose()?,
        held_at.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
