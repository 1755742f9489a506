//! Shared sub-score measures used by more than one rubric criterion.
//!
//! Every function here is a pure read over the graph returning a small
//! bounded integer; the per-criterion maxima are documented on each
//! function and relied on by the composers and the normaliser.

use crate::graph::{MetaGraph, Term};
use scores_vocab::namespaces::{dcterms, prov, xsd};
use scores_vocab::reference::{
    ADDITIONAL_PROVENANCE_PROPERTIES, LICENSE_PROPERTIES, MACHINE_READABLE_FORMATS,
    MEDIA_TYPE_FORMAT_PROPERTIES, SEARCHABLE_PROPERTIES, URI_EXPECTED_PROPERTIES,
};

/// Machine readability of the described data, 0–2.
///
/// A declared media type among the format properties scores 2; a recognised
/// file-extension token scores 1; both present still score 2.
#[must_use]
pub fn machine_readability_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    let mut value = 0;
    for property in MEDIA_TYPE_FORMAT_PROPERTIES {
        for object in metadata.objects(resource, property) {
            let text = object.text();
            if MACHINE_READABLE_FORMATS.iter().any(|(_, mime)| *mime == text) {
                return 2;
            }
            if MACHINE_READABLE_FORMATS.iter().any(|(ext, _)| *ext == text) {
                // keep looking in case another value is a full media type
                value = 1;
            }
        }
    }
    value
}

/// Use of shared vocabularies and ontologies, 0–2.
///
/// Looks at the objects of the properties expected to carry IRIs: no IRIs at
/// all scores 0, no literals scores 2, IRIs outnumbering literals scores 1.
#[must_use]
pub fn shared_vocabs_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    let mut iris = 0usize;
    let mut literals = 0usize;
    let mut objects = 0usize;
    for property in URI_EXPECTED_PROPERTIES {
        for object in metadata.objects(resource, property) {
            objects += 1;
            if object.is_iri() {
                iris += 1;
            } else if object.is_literal() {
                literals += 1;
            }
        }
    }
    if objects == 0 || iris == 0 {
        return 0;
    }
    if literals == 0 {
        2
    } else if iris > literals {
        1
    } else {
        0
    }
}

/// Presence of a data usage licence, 0 or 2.
#[must_use]
pub fn licensing_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    let declared = LICENSE_PROPERTIES
        .iter()
        .any(|property| metadata.has(resource, property));
    if declared {
        2
    } else {
        0
    }
}

/// Declared provenance, 0 or 2: any predicate from the provenance ontology
/// anywhere in the graph, or one of the additional provenance properties.
#[must_use]
pub fn provenance_score(metadata: &MetaGraph) -> i64 {
    let predicates = metadata.predicates();
    if predicates.iter().any(|p| p.starts_with(prov::NS)) {
        return 2;
    }
    if predicates
        .iter()
        .any(|p| ADDITIONAL_PROVENANCE_PROPERTIES.contains(p))
    {
        return 2;
    }
    0
}

/// Quality of the declared data source, 0–2: a `dcterms:source` IRI scores
/// 2, a literal typed `xsd:anyURI` scores 1, anything else 0.
#[must_use]
pub fn data_source_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    match metadata.value(resource, dcterms::SOURCE) {
        None => 0,
        Some(Term::Iri(_)) => 2,
        Some(term) => match term.as_literal() {
            Some(literal) if literal.datatype == xsd::ANY_URI => 1,
            _ => 0,
        },
    }
}

/// Whether the record carries any free-text-searchable property, 0 or 1.
#[must_use]
pub fn searchable_score(metadata: &MetaGraph) -> i64 {
    let predicates = metadata.predicates();
    if predicates
        .iter()
        .any(|p| SEARCHABLE_PROPERTIES.contains(p))
    {
        1
    } else {
        0
    }
}
