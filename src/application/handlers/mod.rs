//! Command and query handlers, one per service operation.

pub mod member;
pub mod session;
