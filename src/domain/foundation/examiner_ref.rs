//! ExaminerRef tagged reference to an internal or external examiner.
//!
//! A committee member points at exactly one examiner record: either an
//! internal faculty member or an external examiner. Making the reference
//! an enum means the "exactly one of the two" rule holds by construction
//! instead of being re-checked on every persist.

use crate::domain::foundation::{ExternalExaminerId, FacultyId};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of examiner a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExaminerKind {
    Internal,
    External,
}

impl fmt::Display for ExaminerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExaminerKind::Internal => "internal",
            ExaminerKind::External => "external",
        };
        write!(f, "{}", s)
    }
}

/// Reference to the examiner record behind a committee member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ExaminerRef {
    Internal(FacultyId),
    External(ExternalExaminerId),
}

impl ExaminerRef {
    /// Returns the kind of examiner referenced.
    pub fn kind(&self) -> ExaminerKind {
        match self {
            ExaminerRef::Internal(_) => ExaminerKind::Internal,
            ExaminerRef::External(_) => ExaminerKind::External,
        }
    }

    /// Returns true for references to external examiners.
    pub fn is_external(&self) -> bool {
        matches!(self, ExaminerRef::External(_))
    }

    /// Returns the underlying examiner UUID regardless of kind.
    pub fn examiner_uuid(&self) -> &Uuid {
        match self {
            ExaminerRef::Internal(id) => id.as_uuid(),
            ExaminerRef::External(id) => id.as_uuid(),
        }
    }

    /// Returns the faculty id for internal references.
    pub fn as_internal(&self) -> Option<&FacultyId> {
        match self {
            ExaminerRef::Internal(id) => Some(id),
            ExaminerRef::External(_) => None,
        }
    }

    /// Returns the external examiner id for external references.
    pub fn as_external(&self) -> Option<&ExternalExaminerId> {
        match self {
            ExaminerRef::Internal(_) => None,
            ExaminerRef::External(id) => Some(id),
        }
    }
}

impl fmt::Display for ExaminerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.examiner_uuid())
    }
}
