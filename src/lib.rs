//! Examboard - Examination committee engine for graduate programs
//!
//! This crate schedules qualification and defense sessions, composes their
//! examiner panels under institutional rules, tracks invitations, and
//! records outcomes. Candidate and examiner records, report rendering, and
//! the transport layer live in other subsystems behind the ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
