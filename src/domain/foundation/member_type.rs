//! MemberType enum distinguishing voting members from alternates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a committee member holds a full (voting) seat or an alternate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    Titular,
    Alternate,
}

impl MemberType {
    /// Returns true for full voting members.
    pub fn is_titular(&self) -> bool {
        matches!(self, MemberType::Titular)
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemberType::Titular => "Titular",
            MemberType::Alternate => "Alternate",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titular_is_titular() {
        assert!(MemberType::Titular.is_titular());
        assert!(!MemberType::Alternate.is_titular());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&MemberType::Alternate).unwrap(),
            "\"alternate\""
        );
    }
}
