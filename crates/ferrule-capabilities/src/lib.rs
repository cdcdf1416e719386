//! Reference collaborators for the Ferrule guest boundary.
//!
//! Each type implements one capability trait from `ferrule-core` on top of
//! an off-the-shelf library:
//!
//! | Type | Trait | Library |
//! |------|-------|---------|
//! | [`JsonDecoder`] | `StructuredDecoder` | `serde_json` |
//! | [`CelEvaluator`] | `ExpressionEvaluator` | `cel-interpreter` |
//! | [`QrEncoder`] | `RasterEncoder` | `qrcode` + `image` (PNG) |
//!
//! The boundary never looks past the trait contract, so any of these can
//! be swapped for a mock in tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cel;
pub mod json;
pub mod qr;

pub use cel::CelEvaluator;
pub use json::JsonDecoder;
pub use qr::QrEncoder;
