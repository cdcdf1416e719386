//! Capability traits for the collaborators the boundary delegates to.
//!
//! The boundary treats each collaborator as opaque: it relies only on the
//! success/failure contract documented here. Reference implementations
//! live in `ferrule-capabilities`; scripted mocks in `ferrule-test-utils`.

use crate::error::{DecodeError, EvalError, RasterError};
use crate::raster::RasterParams;

/// A decoded structured document: a string-keyed map of dynamic values.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Parses a textual serialization into a [`Document`].
pub trait StructuredDecoder {
    /// Decode `bytes` into a document.
    ///
    /// Fails with [`DecodeError`] on malformed input or when the top-level
    /// value is not a map.
    fn decode(&self, bytes: &[u8]) -> Result<Document, DecodeError>;
}

/// Compiles and evaluates a boolean policy expression.
pub trait ExpressionEvaluator {
    /// Name of the variable the document is bound to inside the expression.
    fn variable(&self) -> &str;

    /// Evaluate `expression` with `document` bound to [`variable`](Self::variable).
    ///
    /// Returns `Ok(true)` only when the expression produces boolean `true`.
    /// Any other successful result is `Ok(false)`. Failures are classified
    /// by the phase in which they occurred.
    fn evaluate(&self, expression: &str, document: &Document) -> Result<bool, EvalError>;
}

/// Encodes text into an image byte stream at fixed parameters.
pub trait RasterEncoder {
    /// The fixed parameters this encoder renders with.
    fn params(&self) -> RasterParams;

    /// Encode `text` into a complete image file (header included).
    fn encode(&self, text: &str) -> Result<Vec<u8>, RasterError>;
}
