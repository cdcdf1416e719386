//! Error types for the external collaborators behind the boundary.
//!
//! One enum per collaborator: structured-text decoding, expression
//! evaluation, and raster encoding. The guest crate maps each variant to
//! a stable status code; nothing here crosses the host/guest edge directly.

use std::error::Error;
use std::fmt;

/// Errors from turning raw input bytes into a typed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The bytes are not valid UTF-8.
    InvalidText {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
    /// The text does not parse under the expected serialization.
    Malformed {
        /// Parser diagnostic.
        reason: String,
    },
    /// The text parsed, but the top-level value has the wrong shape.
    UnexpectedShape {
        /// Shape the boundary expected (e.g. "object").
        expected: &'static str,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidText { valid_up_to } => {
                write!(f, "input is not valid UTF-8 (valid up to byte {valid_up_to})")
            }
            Self::Malformed { reason } => write!(f, "malformed input: {reason}"),
            Self::UnexpectedShape { expected } => {
                write!(f, "input is not a structured {expected}")
            }
        }
    }
}

impl Error for DecodeError {}

/// Errors from compiling and evaluating a policy expression.
///
/// Variants follow the evaluator's phases so a host can tell a bad policy
/// from a bad document from an evaluator fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// The evaluation environment could not be set up (e.g. the document
    /// could not be bound to its variable).
    EnvironmentInit {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The expression failed to parse or compile.
    Compile {
        /// Compiler diagnostic.
        reason: String,
    },
    /// The compiled expression could not be turned into a runnable program.
    ProgramBuild {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The program failed while executing (type mismatch, missing key, ...).
    Runtime {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvironmentInit { reason } => {
                write!(f, "evaluator initialisation failed: {reason}")
            }
            Self::Compile { reason } => write!(f, "expression compile failed: {reason}"),
            Self::ProgramBuild { reason } => write!(f, "program build failed: {reason}"),
            Self::Runtime { reason } => write!(f, "evaluation failed: {reason}"),
        }
    }
}

impl Error for EvalError {}

/// Errors from encoding text into a raster image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// There is nothing to encode.
    EmptyPayload,
    /// The symbol encoder rejected the payload (e.g. too long for any
    /// symbol version at the configured error-correction tier).
    Encode {
        /// Encoder diagnostic.
        reason: String,
    },
    /// The encoded symbol needs more pixels than the fixed resolution.
    ExceedsResolution {
        /// Minimum edge length in pixels the symbol needs.
        required: u32,
        /// Configured edge length in pixels.
        size: u32,
    },
    /// The image could not be serialized to its output format.
    Write {
        /// Writer diagnostic.
        reason: String,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "no data to encode"),
            Self::Encode { reason } => write!(f, "symbol encoding failed: {reason}"),
            Self::ExceedsResolution { required, size } => write!(
                f,
                "symbol needs at least {required}px but the image is {size}px"
            ),
            Self::Write { reason } => write!(f, "image write failed: {reason}"),
        }
    }
}

impl Error for RasterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_includes_detail() {
        let e = DecodeError::InvalidText { valid_up_to: 3 };
        assert!(e.to_string().contains("byte 3"));
        let e = DecodeError::UnexpectedShape { expected: "object" };
        assert_eq!(e.to_string(), "input is not a structured object");
    }

    #[test]
    fn eval_error_display_names_phase() {
        let e = EvalError::Compile {
            reason: "unexpected token".into(),
        };
        assert_eq!(e.to_string(), "expression compile failed: unexpected token");
        let e = EvalError::Runtime {
            reason: "no such key".into(),
        };
        assert!(e.to_string().starts_with("evaluation failed"));
    }

    #[test]
    fn raster_error_display() {
        let e = RasterError::ExceedsResolution {
            required: 300,
            size: 256,
        };
        assert_eq!(
            e.to_string(),
            "symbol needs at least 300px but the image is 256px"
        );
        assert_eq!(RasterError::EmptyPayload.to_string(), "no data to encode");
    }
}
