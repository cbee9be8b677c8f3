//! In-memory adapters.
//!
//! HashMap-backed implementations of the storage, directory, and lock
//! ports. Useful for testing and development.

mod directories;
mod lock;
mod member_store;
mod session_store;

pub use directories::{InMemoryCandidateDirectory, InMemoryExaminerDirectory};
pub use lock::InMemoryCandidateLock;
pub use member_store::InMemoryMemberStore;
pub use session_store::InMemorySessionStore;
