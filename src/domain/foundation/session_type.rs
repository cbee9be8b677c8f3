//! SessionType enum for the kinds of examination sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of examination session a candidate can be scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    QualificationMasters,
    QualificationDoctoral,
    DefenseMasters,
    DefenseDoctoral,
    DefenseDirectDoctoral,
    ProficiencyExam,
}

impl SessionType {
    /// Returns true for thesis/dissertation defense sessions.
    pub fn is_defense(&self) -> bool {
        matches!(
            self,
            SessionType::DefenseMasters
                | SessionType::DefenseDoctoral
                | SessionType::DefenseDirectDoctoral
        )
    }

    /// Returns true for qualification exam sessions.
    pub fn is_qualification(&self) -> bool {
        matches!(
            self,
            SessionType::QualificationMasters | SessionType::QualificationDoctoral
        )
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionType::QualificationMasters => "QualificationMasters",
            SessionType::QualificationDoctoral => "QualificationDoctoral",
            SessionType::DefenseMasters => "DefenseMasters",
            SessionType::DefenseDoctoral => "DefenseDoctoral",
            SessionType::DefenseDirectDoctoral => "DefenseDirectDoctoral",
            SessionType::ProficiencyExam => "ProficiencyExam",
        };
        write!(f, "{}", s)
    }
}
