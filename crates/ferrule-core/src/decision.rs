//! Outcome of a policy decision.

use std::fmt;

/// Result of evaluating a policy expression against a document.
///
/// Only a boolean `true` allows. Any other successful result, including
/// non-boolean values, is a deny.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The policy allows the request.
    Allow,
    /// The policy denies the request.
    Deny,
}

impl Decision {
    /// Map an evaluator's boolean verdict to a decision.
    pub fn from_verdict(verdict: bool) -> Self {
        if verdict {
            Self::Allow
        } else {
            Self::Deny
        }
    }

    /// Whether this decision allows the request.
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for Decision {
    fn from(verdict: bool) -> Self {
        Self::from_verdict(verdict)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
        }
    }
}
