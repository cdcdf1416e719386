//! Region descriptors.
//!
//! A [`Region`] is the `(offset, len)` pair that identifies a buffer in
//! the arena. It is the only thing that crosses the host/guest edge; the
//! bytes themselves stay put.

use std::fmt;

/// Location of a buffer within the arena.
///
/// Regions are plain values: they carry no lifetime and grant no access on
/// their own. Access goes through [`Arena::view`](crate::Arena::view), which
/// checks the region against the allocated extent first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct Region {
    offset: u32,
    len: u32,
}

impl Region {
    /// The null region: offset 0, length 0. Returned for zero-size
    /// allocations and used as the failure sentinel.
    pub const NULL: Region = Region { offset: 0, len: 0 };

    /// Describe `len` bytes starting at `offset`.
    pub const fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Start offset.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether the region spans zero bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this is the null sentinel.
    pub fn is_null(&self) -> bool {
        self.offset == 0
    }

    /// One past the last byte, widened so it cannot overflow.
    pub fn end(&self) -> u64 {
        u64::from(self.offset) + u64::from(self.len)
    }

    /// Whether the two regions share at least one byte.
    pub fn overlaps(&self, other: &Region) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        u64::from(self.offset) < other.end() && u64::from(other.offset) < self.end()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region(off={}, len={})", self.offset, self.len)
    }
}
