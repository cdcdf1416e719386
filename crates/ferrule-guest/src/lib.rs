//! Exported guest entry points for the Ferrule host/guest boundary.
//!
//! Every export takes and returns plain integers. Buffers cross the edge as
//! `(address, length)` pairs inside the guest heap (see
//! [`ferrule_arena::GuestHeap`]); results come back as a status code or as
//! the address of a freshly allocated output region whose length is written
//! to a host-supplied 4-byte slot.
//!
//! | Export | Returns |
//! |--------|---------|
//! | [`allocate`](memory::allocate) | address, 0 on zero size or exhaustion |
//! | [`release`](memory::release) | nothing (no-op) |
//! | [`evaluate_decision`](decision::evaluate_decision) | [`GuestStatus`] as `i32` |
//! | [`generate_image`](raster::generate_image) | PNG address, 0 on failure |
//! | [`last_error_message`](diagnostics::last_error_message) | message address, 0 if none |
//!
//! The exports carry unmangled symbol names only on `wasm32`. Native builds
//! link them as ordinary Rust functions, so a host binary keeps its own
//! `allocate` or `release` symbols.
//!
//! Each export body runs inside `ffi_guard!` so a panic never unwinds into
//! the host. The protocol logic lives in `*_with` functions that take the
//! heap and collaborators explicitly, so it can be driven without the
//! process-wide runtime.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::cell::RefCell;

thread_local! {
    /// Display text of the most recent failure on this thread.
    pub(crate) static LAST_ERROR: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Run an export body, converting a panic into `$fallback`.
///
/// The panic payload is recorded in `LAST_ERROR` so the host can fetch it
/// through `last_error_message`.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {{
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::diagnostics::record_panic(payload.as_ref());
                $fallback
            }
        }
    }};
}

/// `ffi_guard_or!` for status-returning exports: a panic becomes
/// `GuestStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::GuestStatus::Panicked as i32, $body)
    };
}

/// Lock a mutex, returning `$fallback` from the enclosing function if a
/// previous panic poisoned it.
macro_rules! ffi_lock {
    ($mutex:expr, $fallback:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => {
                $crate::diagnostics::record_message(
                    "guest runtime is poisoned by an earlier panic",
                );
                ::tracing::warn!("guest runtime mutex is poisoned");
                return $fallback;
            }
        }
    };
}

pub mod boundary;
#[cfg(all(target_arch = "wasm32", feature = "compat-exports"))]
mod compat;
pub mod decision;
pub mod diagnostics;
pub mod memory;
pub mod raster;
pub mod runtime;
pub mod status;

pub use boundary::BoundaryError;
pub use decision::{evaluate_decision, evaluate_decision_with};
pub use diagnostics::{last_error, last_error_message, last_error_message_with};
pub use memory::{allocate, release};
pub use raster::{generate_image, generate_image_with};
pub use runtime::{with_heap, GuestRuntime};
pub use status::GuestStatus;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_guard_catches_panic_and_stores_message() {
        diagnostics::clear_last_error();

        let status = ffi_guard!({
            panic!("deliberate test panic inside a guarded body");
        });

        assert_eq!(status, GuestStatus::Panicked as i32);
        let message = last_error();
        assert!(
            message.contains("deliberate test panic inside a guarded body"),
            "panic message must be recorded, got: {message:?}"
        );
    }

    #[test]
    fn panicking_collaborator_is_contained() {
        use ferrule_test_utils::{HostHarness, MockEncoder};

        let mut host = HostHarness::default();
        let (ptr, len) = host.put_str("hello");
        let slot = host.length_slot();
        let before = host.cursor();
        let encoder = MockEncoder::panicking("encoder exploded");

        let address = ffi_guard_or!(0, {
            let result = generate_image_with(host.heap_mut(), &encoder, ptr, len, slot);
            match boundary::settle("generate_image", result) {
                Ok(region) => host.heap().address_of(region),
                Err(_) => 0,
            }
        });
        assert_eq!(address, 0);
        assert_eq!(host.cursor(), before);
        assert_eq!(host.read_length(slot), u32::MAX);

        let message_slot = host.length_slot();
        let region = last_error_message_with(host.heap_mut(), message_slot).unwrap();
        let message = String::from_utf8(host.read_region(region)).unwrap();
        assert_eq!(message, "panicked: encoder exploded");
    }

    #[test]
    fn ffi_guard_passes_through_normal_results() {
        let status = ffi_guard!({ GuestStatus::Allow as i32 });
        assert_eq!(status, 1);
    }

    #[test]
    fn ffi_guard_or_uses_fallback() {
        let address: u32 = ffi_guard_or!(0, {
            let values: Vec<u32> = Vec::new();
            values[3]
        });
        assert_eq!(address, 0);
        assert!(last_error().contains("panic"));
    }

    #[test]
    fn ffi_lock_reports_poisoned_mutex() {
        use std::sync::Mutex;

        fn read(mutex: &Mutex<u32>) -> i32 {
            let guard = ffi_lock!(mutex, GuestStatus::InternalError as i32);
            *guard as i32
        }

        let mutex = Mutex::new(7);
        assert_eq!(read(&mutex), 7);

        let _ = std::panic::catch_unwind(|| {
            let _guard = mutex.lock().unwrap();
            panic!("poison");
        });
        assert_eq!(read(&mutex), GuestStatus::InternalError as i32);
        assert!(last_error().contains("poisoned"));
    }
}
