//! Per-thread record of the most recent failure.
//!
//! Status codes say *what kind* of failure happened; the message recorded
//! here says what exactly went wrong. The host fetches it with
//! [`last_error_message`], which uses the same output convention as
//! `generate_image`.

use std::any::Any;
use std::fmt::{self, Write as _};

use ferrule_arena::{GuestHeap, Region};

use crate::boundary::{BoundaryError, OutputSlot};
use crate::runtime;
use crate::LAST_ERROR;

/// Record `error` as the last failure of `operation`.
pub(crate) fn record_error(operation: &str, error: &dyn fmt::Display) {
    LAST_ERROR.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.clear();
        let _ = write!(slot, "{operation}: {error}");
    });
}

/// Record a free-form message as the last failure.
pub(crate) fn record_message(message: &str) {
    LAST_ERROR.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.clear();
        slot.push_str(message);
    });
}

/// Record a caught panic payload.
pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::warn!(panic = %detail, "panic caught at guest boundary");
    record_message(&format!("panicked: {detail}"));
}

/// The last failure recorded on this thread, or an empty string.
pub fn last_error() -> String {
    LAST_ERROR.with(|cell| cell.borrow().clone())
}

/// Forget the last recorded failure on this thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|cell| cell.borrow_mut().clear());
}

/// Copy the last recorded failure into `heap`.
///
/// Returns the null region (and leaves the slot untouched) when nothing has
/// been recorded.
pub fn last_error_message_with(
    heap: &mut GuestHeap,
    size_out_ptr: u32,
) -> Result<Region, BoundaryError> {
    let slot = OutputSlot::resolve(heap, size_out_ptr)?;
    let message = last_error();
    if message.is_empty() {
        return Ok(Region::NULL);
    }
    slot.emit(heap, message.as_bytes())
}

/// Copy the most recent failure message into guest memory.
///
/// Writes the UTF-8 byte length to the 4-byte slot at `size_out_ptr` and
/// returns the message address. Returns 0 if no failure has been recorded
/// or the slot is invalid. Fetching the message does not clear it.
#[cfg_attr(target_arch = "wasm32", no_mangle)]
#[allow(unsafe_code)]
pub extern "C" fn last_error_message(size_out_ptr: u32) -> u32 {
    ffi_guard_or!(0, {
        runtime::with_runtime(0, |rt| {
            match last_error_message_with(&mut rt.heap, size_out_ptr) {
                Ok(region) => rt.heap.address_of(region),
                Err(e) => {
                    tracing::debug!(error = %e, "last_error_message failed");
                    0
                }
            }
        })
    })
}
