//! Compact JSON-LD writer for score graphs.
//!
//! Builds one JSON-LD document with the fixed `@context` from
//! [`scores_vocab::context`] and a `@graph` array of one node object per
//! subject. Property IRIs are compacted against the context: terms under
//! the `@vocab` namespace become bare names, terms under a bound prefix
//! become `prefix:local`, anything else stays a full IRI.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::error::ScoreError;
use crate::graph::{MetaGraph, Term};
use scores_vocab::context::jsonld_context;
use scores_vocab::namespaces::{rdf, xsd};

/// Serializes the graph as compact JSON-LD with the fixed `@context`.
///
/// # Errors
///
/// Returns [`ScoreError::Serialize`] when the document cannot be rendered.
pub fn to_jsonld(graph: &MetaGraph) -> Result<String, ScoreError> {
    let context = jsonld_context();
    let compactor = Compactor::from_context(&context);

    let mut nodes: BTreeMap<Term, Map<String, Value>> = BTreeMap::new();
    for triple in graph.iter() {
        let Some(predicate) = triple.p.as_iri() else {
            continue;
        };
        let node = nodes.entry(triple.s.clone()).or_default();
        if predicate == rdf::TYPE {
            append(node, "@type", type_value(&compactor, &triple.o));
        } else {
            append(
                node,
                &compactor.compact(predicate),
                object_value(&compactor, &triple.o),
            );
        }
    }

    let graph_array: Vec<Value> = nodes
        .into_iter()
        .map(|(subject, properties)| {
            let mut node = Map::new();
            node.insert("@id".to_owned(), Value::String(node_id(&subject)));
            for (key, value) in properties {
                node.insert(key, value);
            }
            Value::Object(node)
        })
        .collect();

    let document = json!({
        "@context": context,
        "@graph": graph_array,
    });
    serde_json::to_string_pretty(&document)
        .map_err(|e| ScoreError::Serialize {
            format: "JSON-LD".to_owned(),
            message: e.to_string(),
        })
}

/// Prefix table extracted from the `@context`.
struct Compactor {
    vocab: Option<String>,
    prefixes: Vec<(String, String)>,
}

impl Compactor {
    fn from_context(context: &Value) -> Self {
        let mut vocab = None;
        let mut prefixes = Vec::new();
        if let Some(entries) = context.as_object() {
            for (key, value) in entries {
                let Some(namespace) = value.as_str() else {
                    continue;
                };
                if key == "@vocab" {
                    vocab = Some(namespace.to_owned());
                } else {
                    prefixes.push((key.clone(), namespace.to_owned()));
                }
            }
        }
        Self { vocab, prefixes }
    }

    fn compact(&self, iri: &str) -> String {
        if let Some(vocab) = &self.vocab {
            if let Some(local) = iri.strip_prefix(vocab.as_str()) {
                return local.to_owned();
            }
        }
        for (prefix, namespace) in &self.prefixes {
            if let Some(local) = iri.strip_prefix(namespace.as_str()) {
                return format!("{prefix}:{local}");
            }
        }
        iri.to_owned()
    }
}

fn node_id(subject: &Term) -> String {
    match subject {
        Term::BlankNode(label) => format!("_:{label}"),
        other => other.text().to_owned(),
    }
}

fn type_value(compactor: &Compactor, object: &Term) -> Value {
    Value::String(match object.as_iri() {
        Some(iri) => compactor.compact(iri),
        None => node_id(object),
    })
}

fn object_value(compactor: &Compactor, object: &Term) -> Value {
    match object {
        Term::Iri(_) | Term::BlankNode(_) => json!({ "@id": node_id(object) }),
        Term::Literal(literal) => {
            if let Some(language) = &literal.language {
                return json!({ "@value": literal.lexical, "@language": language });
            }
            match literal.datatype.as_str() {
                xsd::STRING => Value::String(literal.lexical.clone()),
                xsd::INTEGER => literal
                    .lexical
                    .parse::<i64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(literal.lexical.clone())),
                datatype => json!({
                    "@value": literal.lexical,
                    "@type": compactor.compact(datatype),
                }),
            }
        }
    }
}

/// Appends a value to a node property, collapsing into an array on the
/// second value.
fn append(node: &mut Map<String, Value>, key: &str, value: Value) {
    match node.get_mut(key) {
        None => {
            node.insert(key.to_owned(), value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}
