//! Scheduling conflict detection for a candidate's sessions.
//!
//! A candidate cannot have two active sessions closer than two hours
//! apart. The window is open at its edges: sessions exactly two hours
//! apart do not conflict.

use crate::domain::committee::ExaminationSession;
use crate::domain::foundation::{SessionId, Timestamp};

/// Half-width of the conflict window around a proposed session time.
pub const CONFLICT_WINDOW_SECS: i64 = 2 * 60 * 60;

/// Finds a session of the same candidate that collides with `proposed`.
///
/// `existing` is the candidate's session list as returned by storage;
/// cancelled sessions never collide, and the caller excludes the session
/// under edit when rescheduling. Returns the first colliding session id.
pub fn find_conflict(existing: &[ExaminationSession], proposed: &Timestamp) -> Option<SessionId> {
    existing
        .iter()
        .filter(|session| session.status().blocks_schedule())
        .find(|session| within_window(session.scheduled_at(), proposed))
        .map(|session| *session.id())
}

/// True when the two times are strictly closer than the window half-width.
fn within_window(a: &Timestamp, b: &Timestamp) -> bool {
    let gap = a.duration_since(b).num_seconds().abs();
    gap < CONFLICT_WINDOW_SECS
}
