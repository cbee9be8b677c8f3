//! SessionResult enum for recorded examination outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome recorded when a session is marked held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionResult {
    Approved,
    ApprovedWithRestrictions,
    ApprovedWithCorrections,
    Rejected,
}

impl SessionResult {
    /// Returns true for any approval variant.
    pub fn is_approval(&self) -> bool {
        !matches!(self, SessionResult::Rejected)
    }

    /// Returns true if the candidate owes corrections before final approval.
    pub fn requires_corrections(&self) -> bool {
        matches!(self, SessionResult::ApprovedWithCorrections)
    }
}

impl fmt::Display for SessionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionResult::Approved => "Approved",
            SessionResult::ApprovedWithRestrictions => "ApprovedWithRestrictions",
            SessionResult::ApprovedWithCorrections => "ApprovedWithCorrections",
            SessionResult::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approvals_are_approvals() {
        assert!(SessionResult::Approved.is_approval());
        assert!(SessionResult::ApprovedWithRestrictions.is_approval());
        assert!(SessionResult::ApprovedWithCorrections.is_approval());
        assert!(!SessionResult::Rejected.is_approval());
    }

    #[test]
    fn only_corrections_variant_requires_corrections() {
        assert!(SessionResult::ApprovedWithCorrections.requires_corrections());
        assert!(!SessionResult::Approved.requires_corrections());
        assert!(!SessionResult::Rejected.requires_corrections());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionResult::ApprovedWithRestrictions).unwrap(),
            "\"approved_with_restrictions\""
        );
    }
}
