//! Common Expression Language policy evaluator.
//!
//! # Phases
//!
//! | Phase | Step | Error |
//! |-------|------|-------|
//! | environment | bind the document to `object` in a fresh [`Context`] | [`EvalError::EnvironmentInit`] |
//! | compile | [`Program::compile`] | [`EvalError::Compile`] |
//! | program build | fused into compile by `cel-interpreter` | never raised here |
//! | evaluation | [`Program::execute`] | [`EvalError::Runtime`] |
//!
//! Document values reach the expression through `serde`. Every JSON integer
//! that fits in an `i64` is bound as a CEL `int`, so policies can mix
//! document fields with integer literals. Larger integers stay `uint` and
//! numbers with a fractional part are `double`.

use cel_interpreter::{Context, Program, Value};
use ferrule_core::{Document, EvalError, ExpressionEvaluator};
use serde::{Serialize, Serializer};
use serde_json::Value as Json;

/// Evaluates CEL expressions with the document bound to a single variable.
#[derive(Clone, Debug)]
pub struct CelEvaluator {
    variable: String,
}

impl CelEvaluator {
    /// Variable name the document is bound to by default.
    pub const DEFAULT_VARIABLE: &'static str = "object";

    /// Create an evaluator that binds the document to `variable`.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for CelEvaluator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VARIABLE)
    }
}

impl ExpressionEvaluator for CelEvaluator {
    fn variable(&self) -> &str {
        &self.variable
    }

    fn evaluate(&self, expression: &str, document: &Document) -> Result<bool, EvalError> {
        let mut context = Context::default();
        context
            .add_variable(self.variable.as_str(), SignedDocument(document))
            .map_err(|e| EvalError::EnvironmentInit {
                reason: e.to_string(),
            })?;
        let program = Program::compile(expression).map_err(|e| EvalError::Compile {
            reason: e.to_string(),
        })?;
        let value = program.execute(&context).map_err(|e| EvalError::Runtime {
            reason: e.to_string(),
        })?;
        Ok(matches!(value, Value::Bool(true)))
    }
}

/// Serializes a document with integers as `i64` wherever they fit.
///
/// `serde_json` serializes every non-negative integer through
/// `serialize_u64`, which `cel-interpreter` turns into `uint`.
struct SignedDocument<'a>(&'a Document);

impl Serialize for SignedDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, Signed(v))))
    }
}

struct Signed<'a>(&'a Json);

impl Serialize for Signed<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Json::Number(n) => match n.as_i64() {
                Some(i) => serializer.serialize_i64(i),
                None => n.serialize(serializer),
            },
            Json::Array(items) => serializer.collect_seq(items.iter().map(Signed)),
            Json::Object(map) => serializer.collect_map(map.iter().map(|(k, v)| (k, Signed(v)))),
            other => other.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("test document must be an object, got {other}"),
        }
    }

    #[test]
    fn true_field_allows() {
        let cel = CelEvaluator::default();
        let verdict = cel
            .evaluate("object.enabled == true", &doc(json!({"enabled": true})))
            .unwrap();
        assert!(verdict);
    }

    #[test]
    fn false_field_denies() {
        let cel = CelEvaluator::default();
        let verdict = cel
            .evaluate("object.enabled == true", &doc(json!({"enabled": false})))
            .unwrap();
        assert!(!verdict);
    }

    #[test]
    fn non_boolean_result_denies() {
        let cel = CelEvaluator::default();
        let verdict = cel
            .evaluate("object.name", &doc(json!({"name": "web"})))
            .unwrap();
        assert!(!verdict);
    }

    #[test]
    fn nested_string_comparison() {
        let cel = CelEvaluator::default();
        let pod = doc(json!({
            "kind": "Pod",
            "metadata": {"name": "web", "namespace": "prod"}
        }));
        assert!(cel
            .evaluate(
                "object.kind == 'Pod' && object.metadata.namespace == 'prod'",
                &pod
            )
            .unwrap());
    }

    #[test]
    fn syntax_error_is_compile_failure() {
        let cel = CelEvaluator::default();
        let err = cel
            .evaluate("object.enabled == (true", &doc(json!({"enabled": true})))
            .unwrap_err();
        assert!(matches!(err, EvalError::Compile { .. }), "got {err:?}");
    }

    #[test]
    fn missing_key_is_runtime_failure() {
        let cel = CelEvaluator::default();
        let err = cel
            .evaluate("object.missing == true", &doc(json!({"enabled": true})))
            .unwrap_err();
        assert!(matches!(err, EvalError::Runtime { .. }), "got {err:?}");
    }

    #[test]
    fn integer_fields_support_int_arithmetic() {
        let cel = CelEvaluator::default();
        let counts = doc(json!({"count": 1, "limits": {"max": 10}, "ids": [3, 4]}));
        assert!(cel.evaluate("object.count + 1 == 2", &counts).unwrap());
        assert!(cel.evaluate("object.limits.max - object.count == 9", &counts).unwrap());
        assert!(cel.evaluate("object.ids[0] * 2 == 6", &counts).unwrap());
        assert!(cel.evaluate("object.count >= 1", &counts).unwrap());
    }

    #[test]
    fn negative_and_fractional_numbers() {
        let cel = CelEvaluator::default();
        let values = doc(json!({"offset": -3, "ratio": 0.5}));
        assert!(cel.evaluate("object.offset + 3 == 0", &values).unwrap());
        assert!(cel.evaluate("object.ratio * 2.0 == 1.0", &values).unwrap());
    }

    #[test]
    fn integers_beyond_i64_still_bind() {
        let cel = CelEvaluator::default();
        let big = doc(json!({"id": u64::MAX}));
        assert!(cel.evaluate("object.id > 0", &big).unwrap());
    }

    #[test]
    fn custom_variable_name() {
        let cel = CelEvaluator::new("input");
        assert_eq!(cel.variable(), "input");
        assert!(cel
            .evaluate("input.enabled", &doc(json!({"enabled": true})))
            .unwrap());
    }
}
