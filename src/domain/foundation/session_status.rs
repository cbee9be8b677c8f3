//! SessionStatus state machine for the examination session lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheduling status of an examination session.
///
/// `Held` is reachable from every other status, including `Cancelled` and
/// `Rescheduled`: marking a session held is gated only on it not already
/// being held. Cancel and reschedule are narrower and only leave
/// `Scheduled` or `Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Confirmed,
    Held,
    Cancelled,
    Rescheduled,
}

impl SessionStatus {
    /// Returns true if the session has been held.
    pub fn is_held(&self) -> bool {
        matches!(self, SessionStatus::Held)
    }

    /// Returns true if the session can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, SessionStatus::Scheduled | SessionStatus::Confirmed)
    }

    /// Returns true if the session can still be rescheduled.
    pub fn can_reschedule(&self) -> bool {
        matches!(self, SessionStatus::Scheduled | SessionStatus::Confirmed)
    }

    /// Returns true if the session counts toward scheduling conflicts.
    ///
    /// Every status except `Cancelled` occupies the candidate's calendar.
    pub fn blocks_schedule(&self) -> bool {
        !matches!(self, SessionStatus::Cancelled)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Scheduled, Confirmed)
                | (Scheduled, Cancelled)
                | (Scheduled, Rescheduled)
                | (Scheduled, Held)
                | (Confirmed, Cancelled)
                | (Confirmed, Rescheduled)
                | (Confirmed, Held)
                | (Rescheduled, Held)
                | (Cancelled, Held)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Scheduled => vec![Confirmed, Cancelled, Rescheduled, Held],
            Confirmed => vec![Cancelled, Rescheduled, Held],
            Rescheduled => vec![Held],
            Cancelled => vec![Held],
            Held => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Scheduled => "Scheduled",
            SessionStatus::Confirmed => "Confirmed",
            SessionStatus::Held => "Held",
            SessionStatus::Cancelled => "Cancelled",
            SessionStatus::Rescheduled => "Rescheduled",
        };
        write!(f, "{}", s)
    }
}
