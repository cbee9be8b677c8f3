//! CommitteeRole enum for the function a member holds on the panel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Function a member performs on the examination committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitteeRole {
    Chair,
    InternalMember,
    ExternalMember,
    Advisor,
    CoAdvisor,
}

impl CommitteeRole {
    /// Returns true if the role chairs the session.
    pub fn is_chair(&self) -> bool {
        matches!(self, CommitteeRole::Chair)
    }

    /// Returns true if the role marks the member as external to the program.
    pub fn marks_external(&self) -> bool {
        matches!(self, CommitteeRole::ExternalMember)
    }
}

impl fmt::Display for CommitteeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommitteeRole::Chair => "Chair",
            CommitteeRole::InternalMember => "InternalMember",
            CommitteeRole::ExternalMember => "ExternalMember",
            CommitteeRole::Advisor => "Advisor",
            CommitteeRole::CoAdvisor => "CoAdvisor",
        };
        write!(f, "{}", s)
    }
}
