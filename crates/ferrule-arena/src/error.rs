//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The request does not fit in the remaining space. The cursor is
    /// left where it was.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still free in the arena.
        remaining: usize,
    },
    /// A region does not lie inside the allocated extent of the arena.
    OutOfBounds {
        /// Start offset of the rejected region.
        offset: u32,
        /// Length of the rejected region.
        len: u32,
        /// First offset past the allocated extent.
        limit: u32,
    },
    /// The arena configuration violates an invariant.
    InvalidConfig {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::OutOfBounds { offset, len, limit } => {
                write!(
                    f,
                    "region [{offset}, +{len}) lies outside the allocated extent (limit {limit})"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}
