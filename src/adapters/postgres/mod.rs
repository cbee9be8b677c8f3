//! PostgreSQL adapters.
//!
//! sqlx-backed implementations of the storage, directory, and lock ports.

mod candidate_directory;
mod candidate_lock;
mod examiner_directory;
mod member_store;
mod session_store;

pub use candidate_directory::PostgresCandidateDirectory;
pub use candidate_lock::PostgresCandidateLock;
pub use examiner_directory::PostgresExaminerDirectory;
pub use member_store::PostgresMemberStore;
pub use session_store::PostgresSessionStore;
