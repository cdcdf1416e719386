//! Process-wide guest runtime: the heap plus the reference collaborators.
//!
//! One [`GuestRuntime`] exists per instance. It is built from default
//! configuration on the first boundary call and lives until the host
//! discards the instance.

use std::sync::Mutex;

use ferrule_arena::{ArenaConfig, ArenaError, GuestHeap};
use ferrule_capabilities::{CelEvaluator, JsonDecoder, QrEncoder};
use ferrule_core::RasterParams;

use crate::diagnostics;

static RUNTIME: Mutex<Option<GuestRuntime>> = Mutex::new(None);

/// The heap and the collaborators every export delegates to.
#[derive(Debug)]
pub struct GuestRuntime {
    /// All host-visible memory.
    pub heap: GuestHeap,
    /// Decodes the `evaluate_decision` input document.
    pub decoder: JsonDecoder,
    /// Evaluates `evaluate_decision` policies.
    pub evaluator: CelEvaluator,
    /// Renders `generate_image` output.
    pub encoder: QrEncoder,
}

impl GuestRuntime {
    /// Build a runtime over a fresh heap.
    pub fn new(config: &ArenaConfig, raster: RasterParams) -> Result<Self, ArenaError> {
        Ok(Self {
            heap: GuestHeap::new(config)?,
            decoder: JsonDecoder,
            evaluator: CelEvaluator::default(),
            encoder: QrEncoder::new(raster),
        })
    }
}

/// Run `f` against the process-wide runtime, creating it on first use.
///
/// Returns `fallback` if the runtime mutex is poisoned or the runtime
/// cannot be built; both are recorded for `last_error_message`.
pub(crate) fn with_runtime<R>(fallback: R, f: impl FnOnce(&mut GuestRuntime) -> R) -> R {
    let mut slot = ffi_lock!(RUNTIME, fallback);
    if slot.is_none() {
        match GuestRuntime::new(&ArenaConfig::default(), RasterParams::default()) {
            Ok(runtime) => {
                tracing::debug!(
                    capacity = runtime.heap.arena().capacity(),
                    "guest runtime initialised"
                );
                *slot = Some(runtime);
            }
            Err(e) => {
                tracing::warn!(error = %e, "guest runtime initialisation failed");
                diagnostics::record_error("init", &e);
                return fallback;
            }
        }
    }
    match slot.as_mut() {
        Some(runtime) => f(runtime),
        None => fallback,
    }
}

/// Run `f` against the process-wide heap.
///
/// Lets native hosts and tests read outputs and write inputs by address.
/// Returns `None` if the runtime is unavailable.
pub fn with_heap<R>(f: impl FnOnce(&mut GuestHeap) -> R) -> Option<R> {
    with_runtime(None, |rt| Some(f(&mut rt.heap)))
}
