//! Aliases under the export names of the first-generation guest module, so
//! hosts built against it keep working.
//!
//! Only compiled for `wasm32` with the `compat-exports` feature, since a
//! native `malloc`/`free` would collide with the C library.

use crate::{allocate, evaluate_decision, generate_image, release};

#[export_name = "malloc"]
#[allow(unsafe_code)]
extern "C" fn malloc_alias(size: u32) -> u32 {
    allocate(size)
}

#[export_name = "free"]
#[allow(unsafe_code)]
extern "C" fn free_alias(ptr: u32) {
    release(ptr)
}

#[export_name = "evalPolicy"]
#[allow(unsafe_code)]
extern "C" fn eval_policy_alias(
    policy_ptr: u32,
    policy_len: u32,
    input_ptr: u32,
    input_len: u32,
) -> i32 {
    evaluate_decision(policy_ptr, policy_len, input_ptr, input_len)
}

#[export_name = "generateQR"]
#[allow(unsafe_code)]
extern "C" fn generate_qr_alias(text_ptr: u32, text_len: u32, size_out_ptr: u32) -> u32 {
    generate_image(text_ptr, text_len, size_out_ptr)
}
