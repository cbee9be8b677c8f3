//! InvitationStatus state machine for committee member invitations.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Invitation status of a committee member.
///
/// Confirm and decline are deliberately loose: a member may confirm from
/// any status except `Confirmed`, and decline from any status except
/// `Declined`, so a decline can follow a confirmation (and vice versa).
/// `Cancelled` is an administrative status: representable and loadable
/// from storage, but no operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Sent,
    Confirmed,
    Declined,
    Cancelled,
}

impl InvitationStatus {
    /// Returns true if the member has confirmed participation.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, InvitationStatus::Confirmed)
    }

    /// Returns true if the member has declined participation.
    pub fn is_declined(&self) -> bool {
        matches!(self, InvitationStatus::Declined)
    }

    /// Returns true if the invitation is still awaiting a send.
    pub fn is_pending(&self) -> bool {
        matches!(self, InvitationStatus::Pending)
    }
}

impl StateMachine for InvitationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InvitationStatus::*;
        match target {
            Sent => matches!(self, Pending),
            Confirmed => !matches!(self, Confirmed),
            Declined => !matches!(self, Declined),
            Pending | Cancelled => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InvitationStatus::*;
        match self {
            Pending => vec![Sent, Confirmed, Declined],
            Sent => vec![Confirmed, Declined],
            Confirmed => vec![Declined],
            Declined => vec![Confirmed],
            Cancelled => vec![Confirmed, Declined],
        }
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvitationStatus::Pending => "Pending",
            InvitationStatus::Sent => "Sent",
            InvitationStatus::Confirmed => "Confirmed",
            InvitationStatus::Declined => "Declined",
            InvitationStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}
