//! Ferrule: a guest-side runtime boundary for sandboxed WebAssembly modules.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Ferrule sub-crates. Native hosts, tests, and tools that drive the boundary
//! in-process only need `ferrule` as a dependency; the compiled guest module
//! itself is built from `ferrule-guest`.
//!
//! # Quick start
//!
//! ```rust
//! use ferrule::prelude::*;
//!
//! let mut heap = GuestHeap::new(&ArenaConfig::new(64 * 1024)).unwrap();
//!
//! // Host side: stage the policy and the document.
//! let policy = b"object.enabled == true";
//! let input = br#"{"enabled": true}"#;
//! let policy_ptr = heap.allocate(policy.len() as u32).unwrap();
//! heap.host_write(policy_ptr, policy).unwrap();
//! let input_ptr = heap.allocate(input.len() as u32).unwrap();
//! heap.host_write(input_ptr, input).unwrap();
//!
//! // Guest side: run the boundary protocol.
//! let decision = evaluate_decision_with(
//!     &heap,
//!     &JsonDecoder,
//!     &CelEvaluator::default(),
//!     policy_ptr,
//!     policy.len() as u32,
//!     input_ptr,
//!     input.len() as u32,
//! )
//! .unwrap();
//! assert_eq!(GuestStatus::from(decision), GuestStatus::Allow);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ferrule-core` | Decisions, raster parameters, error taxonomy, capability traits |
//! | [`arena`] | `ferrule-arena` | Bump arena, regions, views, host address space |
//! | [`capabilities`] | `ferrule-capabilities` | JSON decoder, CEL evaluator, QR encoder |
//! | [`guest`] | `ferrule-guest` | Boundary protocol, status codes, exported entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and capability traits (`ferrule-core`).
///
/// The capability traits ([`types::StructuredDecoder`],
/// [`types::ExpressionEvaluator`], [`types::RasterEncoder`]) are the seams
/// between the boundary and its collaborators.
pub use ferrule_core as types;

/// Arena storage and host addressing (`ferrule-arena`).
///
/// Most users only need [`arena::GuestHeap`] and [`arena::ArenaConfig`]
/// from this module; both are also available in the [`prelude`].
pub use ferrule_arena as arena;

/// Reference collaborators (`ferrule-capabilities`).
pub use ferrule_capabilities as capabilities;

/// Boundary protocol and exports (`ferrule-guest`).
///
/// The `*_with` functions run one boundary call against an explicit heap
/// and collaborators; the `extern "C"` exports run it against the
/// process-wide runtime.
pub use ferrule_guest as guest;

/// Common imports for typical Ferrule usage.
///
/// ```rust
/// use ferrule::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use ferrule_arena::{ArenaConfig, ArenaError, BufferView, GuestHeap, Region};

    // Core types and traits
    pub use ferrule_core::{
        Decision, Document, EcTier, ExpressionEvaluator, RasterEncoder, RasterParams,
        StructuredDecoder,
    };

    // Errors
    pub use ferrule_core::{DecodeError, EvalError, RasterError};

    // Collaborators
    pub use ferrule_capabilities::{CelEvaluator, JsonDecoder, QrEncoder};

    // Boundary
    pub use ferrule_guest::{
        evaluate_decision_with, generate_image_with, last_error_message_with, BoundaryError,
        GuestStatus,
    };
}
