//! JSON structured-text decoder.

use ferrule_core::{DecodeError, Document, StructuredDecoder};
use serde_json::Value;

/// Decodes a JSON object into a [`Document`].
///
/// Anything other than a top-level object (arrays, scalars, `null`) is
/// rejected with [`DecodeError::UnexpectedShape`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDecoder;

impl StructuredDecoder for JsonDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Document, DecodeError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed {
            reason: e.to_string(),
        })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(DecodeError::UnexpectedShape { expected: "object" }),
        }
    }
}
