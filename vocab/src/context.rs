//! The fixed JSON-LD `@context` for serialized score graphs.

use serde_json::{json, Value};

use crate::namespaces::{dcat, qb, scores, time, xsd};

/// Returns the `@context` used for JSON-LD output: the Scores ontology as
/// the default vocabulary plus the prefixes score graphs actually use.
#[must_use]
pub fn jsonld_context() -> Value {
    json!({
        "@vocab": scores::NS,
        "dcat": dcat::NS,
        "qb": qb::NS,
        "time": time::NS,
        "xsd": xsd::NS,
    })
}
