//! `generate_image`: render text as a PNG QR code in guest memory.

use ferrule_arena::{GuestHeap, Region};
use ferrule_core::RasterEncoder;

use crate::boundary::{read_text, settle, BoundaryError, OutputSlot};
use crate::runtime;

/// Encode the text at `(text_ptr, text_len)` and store the image.
///
/// The length slot is checked before the encoder runs, and the output
/// region is only allocated once encoding succeeded.
pub fn generate_image_with<R>(
    heap: &mut GuestHeap,
    encoder: &R,
    text_ptr: u32,
    text_len: u32,
    size_out_ptr: u32,
) -> Result<Region, BoundaryError>
where
    R: RasterEncoder + ?Sized,
{
    let slot = OutputSlot::resolve(heap, size_out_ptr)?;
    let image = {
        let text = read_text(heap, text_ptr, text_len)?;
        encoder.encode(text)?
    };
    slot.emit(heap, &image)
}

/// Render the text as a 256×256 PNG QR code (medium error correction).
///
/// Writes the PNG byte length, little-endian, to the 4-byte slot at
/// `size_out_ptr` and returns the PNG address. Returns 0 on any failure, in
/// which case the slot is not written and no memory is consumed. Every call
/// allocates a fresh region.
#[cfg_attr(target_arch = "wasm32", no_mangle)]
#[allow(unsafe_code)]
pub extern "C" fn generate_image(text_ptr: u32, text_len: u32, size_out_ptr: u32) -> u32 {
    ffi_guard_or!(0, {
        runtime::with_runtime(0, |rt| {
            let result =
                generate_image_with(&mut rt.heap, &rt.encoder, text_ptr, text_len, size_out_ptr);
            match settle("generate_image", result) {
                Ok(region) => rt.heap.address_of(region),
                Err(_) => 0,
            }
        })
    })
}
