//! Host-side driver for a local [`GuestHeap`].
//!
//! Mirrors what a real host does around a boundary call: allocate, write
//! the input bytes, hand over `(ptr, len)` pairs, then read results back by
//! address. Every method panics on failure; this is test scaffolding.

use ferrule_arena::{ArenaConfig, GuestHeap, Region, LENGTH_SLOT_BYTES};

/// A host staged against its own heap.
pub struct HostHarness {
    heap: GuestHeap,
}

impl HostHarness {
    /// Harness over a heap of `capacity` bytes.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            heap: GuestHeap::new(&ArenaConfig::new(capacity)).unwrap(),
        }
    }

    pub fn heap(&self) -> &GuestHeap {
        &self.heap
    }

    pub fn heap_mut(&mut self) -> &mut GuestHeap {
        &mut self.heap
    }

    /// Current arena cursor.
    pub fn cursor(&self) -> u32 {
        self.heap.arena().cursor()
    }

    /// Allocate room for `bytes`, copy them in, and return `(ptr, len)`.
    pub fn put(&mut self, bytes: &[u8]) -> (u32, u32) {
        let len = u32::try_from(bytes.len()).unwrap();
        let ptr = self.heap.allocate(len).unwrap();
        if len > 0 {
            self.heap.host_write(ptr, bytes).unwrap();
        }
        (ptr, len)
    }

    pub fn put_str(&mut self, text: &str) -> (u32, u32) {
        self.put(text.as_bytes())
    }

    /// Allocate a 4-byte output length slot, pre-filled with `0xFF`.
    pub fn length_slot(&mut self) -> u32 {
        let ptr = self.heap.allocate(LENGTH_SLOT_BYTES).unwrap();
        self.heap.host_write(ptr, &[0xff; 4]).unwrap();
        ptr
    }

    /// Read the little-endian length in a slot.
    pub fn read_length(&self, slot: u32) -> u32 {
        let bytes = self.heap.host_read(slot, LENGTH_SLOT_BYTES).unwrap();
        u32::from_le_bytes(bytes.try_into().unwrap())
    }

    /// Copy `len` bytes out of the heap.
    pub fn read(&self, ptr: u32, len: u32) -> Vec<u8> {
        self.heap.host_read(ptr, len).unwrap().to_vec()
    }

    /// Copy an output region out of the heap.
    pub fn read_region(&self, region: Region) -> Vec<u8> {
        self.read(self.heap.address_of(region), region.len())
    }

    /// Follow an `(address, slot)` output pair, as a host does after
    /// `generate_image`.
    pub fn read_output(&self, address: u32, slot: u32) -> Vec<u8> {
        self.read(address, self.read_length(slot))
    }
}

impl Default for HostHarness {
    fn default() -> Self {
        Self::with_capacity(1 << 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_read() {
        let mut host = HostHarness::with_capacity(256);
        let (ptr, len) = host.put_str("policy");
        assert_eq!(host.read(ptr, len), b"policy");
    }

    #[test]
    fn empty_put_is_null() {
        let mut host = HostHarness::with_capacity(256);
        let cursor = host.cursor();
        assert_eq!(host.put(b""), (0, 0));
        assert_eq!(host.cursor(), cursor);
    }

    #[test]
    fn slot_starts_poisoned() {
        let mut host = HostHarness::with_capacity(256);
        let slot = host.length_slot();
        assert_eq!(host.read_length(slot), u32::MAX);
    }

    #[test]
    fn stored_region_reads_back() {
        let mut host = HostHarness::default();
        let region = host.heap_mut().store(b"output").unwrap();
        assert_eq!(host.read_region(region), b"output");
    }
}
