//! Panel composition rules.
//!
//! A session may only be held with a panel of 3 to 5 titular members, at
//! least one of whom is external to the hosting program. Invitation status
//! never enters into it: a titular seat counts whether or not the member
//! has confirmed.

use crate::domain::committee::CommitteeMember;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of titular members on a panel.
pub const MIN_TITULAR_MEMBERS: usize = 3;

/// Maximum number of titular members on a panel.
pub const MAX_TITULAR_MEMBERS: usize = 5;

/// A specific composition rule a member set fails to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CompositionViolation {
    TooFewTitularMembers { actual: usize },
    TooManyTitularMembers { actual: usize },
    NoExternalMember,
}

impl fmt::Display for CompositionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionViolation::TooFewTitularMembers { actual } => write!(
                f,
                "Panel must have at least {} titular members, got {}",
                MIN_TITULAR_MEMBERS, actual
            ),
            CompositionViolation::TooManyTitularMembers { actual } => write!(
                f,
                "Panel must have at most {} titular members, got {}",
                MAX_TITULAR_MEMBERS, actual
            ),
            CompositionViolation::NoExternalMember => {
                write!(f, "Panel must include at least one external member")
            }
        }
    }
}

/// Counting view over a session's member set.
#[derive(Debug, Clone)]
pub struct Composition<'a> {
    members: &'a [CommitteeMember],
}

impl<'a> Composition<'a> {
    /// Wraps a member list for composition queries.
    pub fn of(members: &'a [CommitteeMember]) -> Self {
        Self { members }
    }

    /// Number of titular members.
    pub fn titular_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.member_type().is_titular())
            .count()
    }

    /// Number of members considered external to the hosting program.
    pub fn external_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_external()).count()
    }

    /// Checks every composition rule, collecting all violations.
    ///
    /// Returns an empty vec when the panel is valid.
    pub fn violations(&self) -> Vec<CompositionViolation> {
        let mut violations = Vec::new();

        let titulars = self.titular_count();
        if titulars < MIN_TITULAR_MEMBERS {
            violations.push(CompositionViolation::TooFewTitularMembers { actual: titulars });
        } else if titulars > MAX_TITULAR_MEMBERS {
            violations.push(CompositionViolation::TooManyTitularMembers { actual: titulars });
        }

        if self.external_count() == 0 {
            violations.push(CompositionViolation::NoExternalMember);
        }

        violations
    }

    /// True when every composition rule holds.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        CommitteeRole, ExaminerRef, ExternalExaminerId, FacultyId, MemberId, MemberType, SessionId,
    };

    fn member(examiner: ExaminerRef, member_type: MemberType, role: CommitteeRole) -> CommitteeMember {
        CommitteeMember::new(
            MemberId::new(),
            SessionId::new(),
            examiner,
            member_type,
            role,
            None,
        )
        .unwrap()
    }

    fn internal_titular() -> CommitteeMember {
        member(
            ExaminerRef::Internal(FacultyId::new()),
            MemberType::Titular,
            CommitteeRole::InternalMember,
        )
    }

    fn external_titular() -> CommitteeMember {
        member(
            ExaminerRef::External(ExternalExaminerId::new()),
            MemberType::Titular,
            CommitteeRole::ExternalMember,
        )
    }

    #[test]
    fn two_titulars_is_too_few() {
        let members = vec![internal_titular(), external_titular()];
        let violations = Composition::of(&members).violations();
        assert_eq!(
            violations,
            vec![CompositionViolation::TooFewTitularMembers { actual: 2 }]
        );
    }

    #[test]
    fn three_titulars_with_one_external_passes() {
        let members = vec![internal_titular(), internal_titular(), external_titular()];
        assert!(Composition::of(&members).is_valid());
    }

    #[test]
    fn five_titulars_passes() {
        let mut members = vec![external_titular()];
        for _ in 0..4 {
            members.push(internal_titular());
        }
        assert!(Composition::of(&members).is_valid());
    }

    #[test]
    fn six_titulars_is_too_many() {
        let mut members = vec![external_titular()];
        for _ in 0..5 {
            members.push(internal_titular());
        }
        let violations = Composition::of(&members).violations();
        assert_eq!(
            violations,
            vec![CompositionViolation::TooManyTitularMembers { actual: 6 }]
        );
    }

    #[test]
    fn all_internal_panel_lacks_external() {
        let members = vec![internal_titular(), internal_titular(), internal_titular()];
        let violations = Composition::of(&members).violations();
        assert_eq!(violations, vec![CompositionViolation::NoExternalMember]);
    }

    #[test]
    fn empty_panel_reports_both_rules() {
        let members: Vec<CommitteeMember> = vec![];
        let violations = Composition::of(&members).violations();
        assert_eq!(
            violations,
            vec![
                CompositionViolation::TooFewTitularMembers { actual: 0 },
                CompositionViolation::NoExternalMember,
            ]
        );
    }

    #[test]
    fn internal_examiner_with_external_role_counts_as_external() {
        let role_external = member(
            ExaminerRef::Internal(FacultyId::new()),
            MemberType::Titular,
            CommitteeRole::ExternalMember,
        );
        let members = vec![internal_titular(), internal_titular(), role_external];
        assert!(Composition::of(&members).is_valid());
    }

    #[test]
    fn alternates_do_not_count_toward_titular_range() {
        let alternate = member(
            ExaminerRef::External(ExternalExaminerId::new()),
            MemberType::Alternate,
            CommitteeRole::ExternalMember,
        );
        let members = vec![
            internal_titular(),
            internal_titular(),
            internal_titular(),
            alternate,
        ];
        // The alternate still satisfies the external rule.
        assert!(Composition::of(&members).is_valid());
        assert_eq!(Composition::of(&members).titular_count(), 3);
    }

    #[test]
    fn unconfirmed_members_still_count() {
        let members = vec![internal_titular(), internal_titular(), external_titular()];
        assert!(members.iter().all(|m| !m.invitation_status().is_confirmed()));
        assert!(Composition::of(&members).is_valid());
    }
}
