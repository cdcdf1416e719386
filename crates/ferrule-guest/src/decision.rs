//! `evaluate_decision`: run a policy expression against a structured input.

use ferrule_arena::GuestHeap;
use ferrule_core::{Decision, ExpressionEvaluator, StructuredDecoder};

use crate::boundary::{read_document, read_text, settle, BoundaryError};
use crate::runtime;
use crate::status::GuestStatus;

/// Evaluate the policy at `(policy_ptr, policy_len)` against the document
/// at `(input_ptr, input_len)`.
///
/// Both regions are bounds-checked before anything is decoded, and the
/// evaluator only runs once both inputs decoded. Nothing is allocated.
pub fn evaluate_decision_with<D, E>(
    heap: &GuestHeap,
    decoder: &D,
    evaluator: &E,
    policy_ptr: u32,
    policy_len: u32,
    input_ptr: u32,
    input_len: u32,
) -> Result<Decision, BoundaryError>
where
    D: StructuredDecoder + ?Sized,
    E: ExpressionEvaluator + ?Sized,
{
    heap.view(policy_ptr, policy_len)?;
    heap.view(input_ptr, input_len)?;

    let document = read_document(heap, decoder, input_ptr, input_len)?;
    let policy = read_text(heap, policy_ptr, policy_len)?;
    let verdict = evaluator.evaluate(policy, &document)?;
    Ok(Decision::from_verdict(verdict))
}

/// Evaluate a CEL policy against a JSON object.
///
/// The document is bound to the variable `object`. Returns `1` (allow) when
/// the expression yields `true`, `0` (deny) for `false` or any non-boolean
/// result, and a negative [`GuestStatus`] on failure.
#[cfg_attr(target_arch = "wasm32", no_mangle)]
#[allow(unsafe_code)]
pub extern "C" fn evaluate_decision(
    policy_ptr: u32,
    policy_len: u32,
    input_ptr: u32,
    input_len: u32,
) -> i32 {
    ffi_guard!({
        runtime::with_runtime(GuestStatus::InternalError.code(), |rt| {
            let result = evaluate_decision_with(
                &rt.heap,
                &rt.decoder,
                &rt.evaluator,
                policy_ptr,
                policy_len,
                input_ptr,
                input_len,
            );
            match settle("evaluate_decision", result) {
                Ok(decision) => GuestStatus::from(decision).code(),
                Err(status) => status.code(),
            }
        })
    })
}
