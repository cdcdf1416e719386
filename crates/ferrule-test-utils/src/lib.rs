//! Test utilities and mock collaborators for Ferrule development.
//!
//! Provides scripted implementations of the capability traits
//! ([`StructuredDecoder`], [`ExpressionEvaluator`], [`RasterEncoder`]) and a
//! [`HostHarness`] that plays the host side of the boundary against a local
//! [`GuestHeap`](ferrule_arena::GuestHeap).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod harness;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use ferrule_core::{
    DecodeError, Document, EvalError, ExpressionEvaluator, RasterEncoder, RasterError,
    RasterParams, StructuredDecoder,
};

pub use harness::HostHarness;

/// Build a [`Document`] from a `serde_json::json!` object literal.
///
/// Panics if `value` is not an object.
pub fn document(value: serde_json::Value) -> Document {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("document fixture must be a JSON object, got {other}"),
    }
}

/// Mock [`StructuredDecoder`] returning a scripted result.
///
/// Counts calls so tests can assert that decoding was (or was not) reached.
pub struct MockDecoder {
    result: Result<Document, DecodeError>,
    calls: AtomicUsize,
}

impl MockDecoder {
    /// Decoder that always yields `doc`.
    pub fn returning(doc: Document) -> Self {
        Self {
            result: Ok(doc),
            calls: AtomicUsize::new(0),
        }
    }

    /// Decoder that always fails with `err`.
    pub fn failing(err: DecodeError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `decode()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for MockDecoder {
    fn default() -> Self {
        Self::returning(Document::new())
    }
}

impl StructuredDecoder for MockDecoder {
    fn decode(&self, _bytes: &[u8]) -> Result<Document, DecodeError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.result.clone()
    }
}

/// Mock [`ExpressionEvaluator`] returning a scripted verdict or failure.
///
/// Records every expression it was asked to evaluate.
pub struct MockEvaluator {
    variable: String,
    result: Result<bool, EvalError>,
    seen: Mutex<Vec<String>>,
}

impl MockEvaluator {
    /// Evaluator that always returns `verdict`.
    pub fn verdict(verdict: bool) -> Self {
        Self::scripted(Ok(verdict))
    }

    /// Evaluator that always fails with `err`.
    pub fn failing(err: EvalError) -> Self {
        Self::scripted(Err(err))
    }

    fn scripted(result: Result<bool, EvalError>) -> Self {
        Self {
            variable: "object".to_string(),
            result,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Expressions received so far, in call order.
    pub fn expressions(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    /// How many times `evaluate()` has been called.
    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl ExpressionEvaluator for MockEvaluator {
    fn variable(&self) -> &str {
        &self.variable
    }

    fn evaluate(&self, expression: &str, _document: &Document) -> Result<bool, EvalError> {
        self.seen.lock().unwrap().push(expression.to_string());
        self.result.clone()
    }
}

enum EncoderScript {
    Bytes(Vec<u8>),
    Fail(RasterError),
    Panic(String),
}

/// Mock [`RasterEncoder`] returning scripted bytes, a failure, or a panic.
pub struct MockEncoder {
    script: EncoderScript,
    calls: AtomicUsize,
}

impl MockEncoder {
    /// Encoder that always returns `bytes`, whatever the text.
    pub fn returning(bytes: impl Into<Vec<u8>>) -> Self {
        Self::scripted(EncoderScript::Bytes(bytes.into()))
    }

    /// Encoder that always fails with `err`.
    pub fn failing(err: RasterError) -> Self {
        Self::scripted(EncoderScript::Fail(err))
    }

    /// Encoder that panics with `message` on every call.
    pub fn panicking(message: impl Into<String>) -> Self {
        Self::scripted(EncoderScript::Panic(message.into()))
    }

    fn scripted(script: EncoderScript) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `encode()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl RasterEncoder for MockEncoder {
    fn params(&self) -> RasterParams {
        RasterParams::default()
    }

    fn encode(&self, _text: &str) -> Result<Vec<u8>, RasterError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.script {
            EncoderScript::Bytes(bytes) => Ok(bytes.clone()),
            EncoderScript::Fail(err) => Err(err.clone()),
            EncoderScript::Panic(message) => panic!("{message}"),
        }
    }
}
