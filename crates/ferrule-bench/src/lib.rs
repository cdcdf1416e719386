//! Benchmark workloads for the Ferrule guest boundary.
//!
//! Provides deterministic inputs shared by the benches:
//!
//! - [`ADMISSION_POLICY`]: a CEL policy over a Kubernetes-style object
//! - [`admission_document`]: a matching JSON document with `n` labels
//! - [`payload_text`]: printable text of a given length for QR encoding

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use serde_json::{json, Map, Value};

/// Policy that allows a pod in the `prod` namespace with the `web` tier.
pub const ADMISSION_POLICY: &str = "object.kind == 'Pod' \
    && object.metadata.namespace == 'prod' \
    && object.metadata.labels.tier == 'web'";

/// JSON bytes of a pod the [`ADMISSION_POLICY`] allows, padded with
/// `extra_labels` additional labels.
pub fn admission_document(extra_labels: usize) -> Vec<u8> {
    let mut labels = Map::new();
    labels.insert("tier".into(), Value::String("web".into()));
    for i in 0..extra_labels {
        labels.insert(format!("label-{i}"), Value::String(format!("value-{i}")));
    }
    json!({
        "kind": "Pod",
        "metadata": {
            "name": "web-0",
            "namespace": "prod",
            "labels": labels,
        },
        "spec": {"containers": [{"name": "app", "image": "registry.local/app:1"}]}
    })
    .to_string()
    .into_bytes()
}

/// Deterministic printable ASCII text of exactly `len` bytes.
pub fn payload_text(len: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-./:";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + 3) % ALPHABET.len()] as char)
        .collect()
}
