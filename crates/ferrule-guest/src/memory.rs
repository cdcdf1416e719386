//! Heap exports the host uses to stage inputs.

use crate::boundary::{settle, BoundaryError};
use crate::runtime;

/// Reserve `size` bytes of guest memory for the host to write into.
///
/// Returns the address, or 0 if `size` is 0 or the heap is exhausted. The
/// memory stays valid for the life of the instance.
#[cfg_attr(target_arch = "wasm32", no_mangle)]
#[allow(unsafe_code)]
pub extern "C" fn allocate(size: u32) -> u32 {
    ffi_guard_or!(0, {
        runtime::with_runtime(0, |rt| {
            settle("allocate", rt.heap.allocate(size).map_err(BoundaryError::from)).unwrap_or(0)
        })
    })
}

/// Accepted for hosts that pair every allocation with a free. Does nothing.
#[cfg_attr(target_arch = "wasm32", no_mangle)]
#[allow(unsafe_code)]
pub extern "C" fn release(ptr: u32) {
    ffi_guard_or!((), {
        runtime::with_runtime((), |rt| rt.heap.release(ptr))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_returns_null() {
        assert_eq!(allocate(0), 0);
    }

    #[test]
    fn allocations_are_distinct_and_writable() {
        let a = allocate(16);
        let b = allocate(16);
        assert_ne!(a, 0);
        assert_ne!(b, 0);
        assert!(a.abs_diff(b) >= 16);

        runtime::with_heap(|heap| {
            heap.host_write(a, &[1; 16]).unwrap();
            heap.host_write(b, &[2; 16]).unwrap();
            assert_eq!(heap.host_read(a, 16).unwrap(), &[1; 16]);
        })
        .unwrap();
    }

    #[test]
    fn oversized_request_returns_null() {
        assert_eq!(allocate(u32::MAX), 0);
        assert!(crate::last_error().contains("allocate"));
    }

    #[test]
    fn release_keeps_contents() {
        let ptr = allocate(3);
        runtime::with_heap(|heap| heap.host_write(ptr, b"abc").unwrap()).unwrap();
        release(ptr);
        let bytes = runtime::with_heap(|heap| heap.host_read(ptr, 3).unwrap().to_vec()).unwrap();
        assert_eq!(bytes, b"abc");
    }
}
