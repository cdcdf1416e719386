//! Zero-copy typed views over arena memory.

use ferrule_core::{DecodeError, Document, StructuredDecoder};

use crate::region::Region;

/// Read-only view over a checked region of the arena.
///
/// Borrows the arena, so the arena cannot allocate (and thus cannot be
/// mutated) while a view is alive. Obtained from
/// [`Arena::view`](crate::Arena::view).
#[derive(Clone, Copy, Debug)]
pub struct BufferView<'a> {
    bytes: &'a [u8],
    region: Region,
}

impl<'a> BufferView<'a> {
    pub(crate) fn new(bytes: &'a [u8], region: Region) -> Self {
        debug_assert_eq!(bytes.len(), region.len() as usize);
        Self { bytes, region }
    }

    /// The region this view covers.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Interpret the bytes as UTF-8 text.
    pub fn as_text(&self) -> Result<&'a str, DecodeError> {
        std::str::from_utf8(self.bytes).map_err(|e| DecodeError::InvalidText {
            valid_up_to: e.valid_up_to(),
        })
    }

    /// Decode the bytes into a structured document.
    pub fn decode<D>(&self, decoder: &D) -> Result<Document, DecodeError>
    where
        D: StructuredDecoder + ?Sized,
    {
        decoder.decode(self.bytes)
    }
}

impl AsRef<[u8]> for BufferView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
