//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `SessionStore` - ExaminationSession persistence
//! - `MemberStore` - CommitteeMember persistence
//!
//! ## Collaborator Ports
//!
//! - `CandidateDirectory` - candidate lookup (student records subsystem)
//! - `ExaminerDirectory` - examiner lookup (faculty / external registries)
//!
//! ## Concurrency Ports
//!
//! - `CandidateLock` - per-candidate serialization of check-then-act writes

mod candidate_directory;
mod candidate_lock;
mod examiner_directory;
mod member_store;
mod session_store;

pub use candidate_directory::{CandidateDirectory, CandidateRecord};
pub use candidate_lock::{CandidateLock, LockLease};
pub use examiner_directory::{ExaminerDirectory, ExaminerRecord};
pub use member_store::MemberStore;
pub use session_store::SessionStore;
