//! Core types and traits for the Ferrule guest boundary.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! vocabulary shared by the arena, the reference collaborators, and the
//! exported entry points: decision outcomes, raster parameters, the error
//! taxonomy of each external collaborator, and the capability traits the
//! boundary delegates to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod decision;
pub mod error;
pub mod raster;
pub mod traits;

pub use decision::Decision;
pub use error::{DecodeError, EvalError, RasterError};
pub use raster::{EcTier, RasterParams};
pub use traits::{Document, ExpressionEvaluator, RasterEncoder, StructuredDecoder};
