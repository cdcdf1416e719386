//! Integration test: a native host binary that links the guest crate and
//! defines C symbols with the same names as the exports.
//!
//! On native targets the exports are ordinary Rust functions, so these
//! definitions link without a duplicate-symbol error.

#![cfg(not(target_arch = "wasm32"))]

mod host {
    use std::sync::atomic::{AtomicU32, Ordering};

    pub static ALLOCATED: AtomicU32 = AtomicU32::new(0);
    pub static RELEASED: AtomicU32 = AtomicU32::new(0);

    #[no_mangle]
    pub extern "C" fn allocate(size: u32) -> u32 {
        ALLOCATED.fetch_add(size, Ordering::SeqCst)
    }

    #[no_mangle]
    pub extern "C" fn release(ptr: u32) {
        RELEASED.store(ptr, Ordering::SeqCst);
    }

    #[no_mangle]
    pub extern "C" fn evaluate_decision(_: u32, _: u32, _: u32, _: u32) -> i32 {
        42
    }
}

#[test]
fn host_symbols_and_guest_exports_coexist() {
    use std::sync::atomic::Ordering;

    assert_eq!(host::allocate(8), 0);
    assert_eq!(host::allocate(8), 8);
    host::release(7);
    assert_eq!(host::RELEASED.load(Ordering::SeqCst), 7);
    assert_eq!(host::evaluate_decision(0, 0, 0, 0), 42);

    let ptr = ferrule_guest::allocate(8);
    assert_ne!(ptr, 0);
    ferrule_guest::release(ptr);
    assert_eq!(
        ferrule_guest::evaluate_decision(0, 0, 0, 0),
        ferrule_guest::GuestStatus::DecodeFailed as i32
    );
}
