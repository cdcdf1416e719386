//! Host-visible address space over an [`Arena`].
//!
//! The host only ever sees 32-bit addresses. [`GuestHeap`] maps them to
//! arena regions and back:
//!
//! ```text
//! address = base + offset        (offset 0 ⇒ address 0, the null sentinel)
//! ```
//!
//! On `wasm32`, `base` is the linear-memory address of the arena storage,
//! so hosts can read and write the returned addresses directly. Everywhere
//! else (native tests, benches) `base` is 0 and addresses equal offsets.

use crate::bump::Arena;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::region::Region;
use crate::view::BufferView;

/// Width in bytes of a host-provided length slot.
pub const LENGTH_SLOT_BYTES: u32 = 4;

/// An arena plus the translation between host addresses and offsets.
#[derive(Debug)]
pub struct GuestHeap {
    arena: Arena,
    base: u32,
}

impl GuestHeap {
    /// Create a heap backed by a fresh arena.
    pub fn new(config: &ArenaConfig) -> Result<Self, ArenaError> {
        let arena = Arena::new(config)?;
        let base = linear_base(&arena);
        Ok(Self { arena, base })
    }

    /// The underlying arena.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Address of arena offset 0.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Allocate `size` bytes and return the host address (0 for a
    /// zero-size request).
    pub fn allocate(&mut self, size: u32) -> Result<u32, ArenaError> {
        let region = self.arena.allocate(size)?;
        Ok(self.address_of(region))
    }

    /// No-op counterpart to [`allocate`](Self::allocate).
    pub fn release(&mut self, ptr: u32) {
        self.arena.release(ptr.saturating_sub(self.base));
    }

    /// Host address of a region; the null region maps to 0.
    pub fn address_of(&self, region: Region) -> u32 {
        if region.is_null() {
            0
        } else {
            self.base + region.offset()
        }
    }

    /// Translate a host `(ptr, len)` pair into a region.
    ///
    /// A zero length yields [`Region::NULL`] whatever the pointer. The
    /// region is not yet checked against the allocated extent; that
    /// happens when it is viewed.
    pub fn region_at(&self, ptr: u32, len: u32) -> Result<Region, ArenaError> {
        if len == 0 {
            return Ok(Region::NULL);
        }
        match ptr.checked_sub(self.base) {
            Some(offset) => Ok(Region::new(offset, len)),
            None => Err(ArenaError::OutOfBounds {
                offset: ptr,
                len,
                limit: self.arena.cursor(),
            }),
        }
    }

    /// Zero-copy, bounds-checked view over a host `(ptr, len)` pair.
    pub fn view(&self, ptr: u32, len: u32) -> Result<BufferView<'_>, ArenaError> {
        let region = self.region_at(ptr, len)?;
        self.arena.view(region)
    }

    /// Copy `bytes` into a fresh region sized exactly to them.
    pub fn store(&mut self, bytes: &[u8]) -> Result<Region, ArenaError> {
        self.arena.store(bytes)
    }

    /// Resolve and bounds-check the 4-byte length slot at `ptr`.
    ///
    /// Done before any work is delegated, so a bad slot never costs an
    /// allocation.
    pub fn length_slot(&self, ptr: u32) -> Result<Region, ArenaError> {
        let region = self.region_at(ptr, LENGTH_SLOT_BYTES)?;
        self.arena.view(region)?;
        Ok(region)
    }

    /// Write `value` little-endian into a slot from
    /// [`length_slot`](Self::length_slot).
    pub fn write_length(&mut self, slot: Region, value: u32) -> Result<(), ArenaError> {
        self.arena
            .view_mut(slot)?
            .copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Host-side write: copy `bytes` to the allocated memory at `ptr`.
    ///
    /// Stands in for the host writing linear memory directly.
    pub fn host_write(&mut self, ptr: u32, bytes: &[u8]) -> Result<(), ArenaError> {
        let len = u32::try_from(bytes.len()).map_err(|_| ArenaError::OutOfBounds {
            offset: ptr,
            len: u32::MAX,
            limit: self.arena.cursor(),
        })?;
        let region = self.region_at(ptr, len)?;
        self.arena.view_mut(region)?.copy_from_slice(bytes);
        Ok(())
    }

    /// Host-side read of `len` bytes at `ptr`.
    pub fn host_read(&self, ptr: u32, len: u32) -> Result<&[u8], ArenaError> {
        Ok(self.view(ptr, len)?.as_bytes())
    }
}

#[cfg(target_arch = "wasm32")]
fn linear_base(arena: &Arena) -> u32 {
    arena.as_ptr() as usize as u32
}

#[cfg(not(target_arch = "wasm32"))]
fn linear_base(_arena: &Arena) -> u32 {
    0
}
