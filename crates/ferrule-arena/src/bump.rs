//! The bump allocator backing every guest-side buffer.
//!
//! [`Arena`] is a bump allocator over a fixed `Box<[u8]>`. Allocations are
//! carved sequentially and never individually released; the backing
//! storage never grows or moves, so an offset handed to the host stays
//! valid for the arena's whole lifetime.

use std::ops::Range;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::region::Region;
use crate::view::BufferView;

/// Fixed-capacity, never-reclaiming byte arena.
///
/// Single-owner: every mutating method takes `&mut self`. The guest runtime
/// wraps one instance in its process-wide handle; nothing in here is
/// synchronised.
pub struct Arena {
    /// Backing storage. Zero-initialised once; regions are never reused,
    /// so a fresh allocation is always zero-filled.
    data: Box<[u8]>,
    /// Next free byte. Always within `[reserved, data.len()]`.
    cursor: usize,
    /// Length of the null guard at the start of `data`.
    reserved: usize,
}

impl Arena {
    /// Create an arena from a validated config.
    pub fn new(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            data: vec![0u8; config.capacity as usize].into_boxed_slice(),
            cursor: config.reserved as usize,
            reserved: config.reserved as usize,
        })
    }

    /// Create an arena with the given capacity and the default null guard.
    pub fn with_capacity(capacity: u32) -> Result<Self, ArenaError> {
        Self::new(&ArenaConfig::new(capacity))
    }

    /// Reserve `size` contiguous bytes at the cursor.
    ///
    /// A zero-size request returns [`Region::NULL`] and leaves the cursor
    /// alone. A request that does not fit returns
    /// [`ArenaError::CapacityExceeded`], also leaving the cursor alone.
    pub fn allocate(&mut self, size: u32) -> Result<Region, ArenaError> {
        if size == 0 {
            return Ok(Region::NULL);
        }
        let remaining = self.remaining();
        if size as usize > remaining {
            return Err(ArenaError::CapacityExceeded {
                requested: size as usize,
                remaining,
            });
        }
        let offset = self.cursor;
        self.cursor += size as usize;
        Ok(Region::new(offset as u32, size))
    }

    /// Accepted for symmetry with hosts that pair every allocation with a
    /// free. Memory is never reclaimed.
    pub fn release(&mut self, _offset: u32) {}

    /// Allocate a region sized exactly to `bytes` and copy them in.
    ///
    /// Empty input yields [`Region::NULL`].
    pub fn store(&mut self, bytes: &[u8]) -> Result<Region, ArenaError> {
        let size = u32::try_from(bytes.len()).map_err(|_| ArenaError::CapacityExceeded {
            requested: bytes.len(),
            remaining: self.remaining(),
        })?;
        let region = self.allocate(size)?;
        let range = self.checked_range(region)?;
        self.data[range].copy_from_slice(bytes);
        Ok(region)
    }

    /// Borrow a read-only view over an allocated region.
    ///
    /// An empty region always succeeds with an empty view, whatever its
    /// offset. Any other region must lie within `[reserved, cursor)`.
    pub fn view(&self, region: Region) -> Result<BufferView<'_>, ArenaError> {
        let range = self.checked_range(region)?;
        Ok(BufferView::new(&self.data[range], region))
    }

    /// Borrow an allocated region for writing.
    ///
    /// Same bounds rules as [`view`](Self::view).
    pub fn view_mut(&mut self, region: Region) -> Result<&mut [u8], ArenaError> {
        let range = self.checked_range(region)?;
        Ok(&mut self.data[range])
    }

    /// Offset of the next allocation.
    pub fn cursor(&self) -> u32 {
        self.cursor as u32
    }

    /// Total size of the backing storage, null guard included.
    pub fn capacity(&self) -> u32 {
        self.data.len() as u32
    }

    /// Length of the null guard.
    pub fn reserved(&self) -> u32 {
        self.reserved as u32
    }

    /// Bytes handed out so far.
    pub fn used(&self) -> usize {
        self.cursor - self.reserved
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Address of the first byte of the backing storage.
    ///
    /// Stable for the arena's lifetime: the storage is boxed and never
    /// reallocated.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    fn checked_range(&self, region: Region) -> Result<Range<usize>, ArenaError> {
        if region.is_empty() {
            return Ok(0..0);
        }
        let start = region.offset() as usize;
        if start < self.reserved || region.end() > self.cursor as u64 {
            return Err(ArenaError::OutOfBounds {
                offset: region.offset(),
                len: region.len(),
                limit: self.cursor as u32,
            });
        }
        Ok(start..start + region.len() as usize)
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.data.len())
            .field("reserved", &self.reserved)
            .field("cursor", &self.cursor)
            .finish()
    }
}
