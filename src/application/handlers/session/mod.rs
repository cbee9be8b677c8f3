//! Session command and query handlers.

mod cancel_session;
mod confirm_session;
mod delete_session;
mod get_session;
mod list_candidate_sessions;
mod list_upcoming_sessions;
mod mark_session_held;
mod reschedule_session;
mod schedule_session;
mod update_session;
mod validate_composition;

pub use cancel_session::{CancelSessionCommand, CancelSessionHandler};
pub use confirm_session::{ConfirmSessionCommand, ConfirmSessionHandler};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_candidate_sessions::{ListCandidateSessionsHandler, ListCandidateSessionsQuery};
pub use list_upcoming_sessions::{ListUpcomingSessionsHandler, ListUpcomingSessionsQuery};
pub use mark_session_held::{MarkSessionHeldCommand, MarkSessionHeldHandler};
pub use reschedule_session::{RescheduleSessionCommand, RescheduleSessionHandler};
pub use schedule_session::{ScheduleSessionCommand, ScheduleSessionHandler};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};
pub use validate_composition::{
    CompositionReport, ValidateCompositionCommand, ValidateCompositionHandler,
};
