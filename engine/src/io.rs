//! RDF parsing and serialization.
//!
//! This is the only module that touches the RDF toolkit's types. Inputs are
//! parsed with the sophia parsers into an in-memory graph and converted to
//! [`MetaGraph`] terms; outputs convert back and go through the sophia
//! serializers. Compact JSON-LD output with the fixed `@context` is built
//! separately in [`crate::jsonld`].
//!
//! Blank node labels from parsed documents are namespaced with a per-load
//! counter so that unioning independently parsed files never merges two
//! distinct blank nodes that happened to share a label.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use sophia_api::dataset::Dataset;
use sophia_api::graph::{Graph, MutableGraph};
use sophia_api::parser::QuadParser;
use sophia_api::quad::Quad;
use sophia_api::serializer::{Stringifier, TripleSerializer};
use sophia_api::source::{QuadSource, TripleSource};
use sophia_api::term::{BnodeId, IriRef, LanguageTag, SimpleTerm, Term as _, TermKind};
use sophia_api::triple::Triple as _;
use sophia_api::MownStr;
use sophia_inmem::dataset::FastDataset;
use sophia_inmem::graph::FastGraph;
use sophia_jsonld::parser::JsonLdParser;
use sophia_turtle::parser::{nt, turtle};
use sophia_turtle::serializer::nt::NtSerializer;
use sophia_turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};
use sophia_xml::parser as xml_parser;
use sophia_xml::serializer::RdfXmlSerializer;
use tracing::info;

use crate::error::ScoreError;
use crate::fetch::{rdf_accept_header, Fetch};
use crate::graph::{Literal, MetaGraph, Term};
use crate::jsonld;

/// Counter distinguishing blank node scopes of separate parses.
static LOAD_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The RDF concrete syntaxes supported for input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle (`.ttl`, `text/turtle`); output is pretty-printed.
    Turtle,
    /// RDF/XML (`.rdf`, `application/rdf+xml`).
    RdfXml,
    /// JSON-LD (`.json-ld`, `application/ld+json`).
    JsonLd,
    /// N-Triples (`.nt`, `text/nt`).
    NTriples,
}

impl RdfFormat {
    /// Resolves a format from a media type, ignoring parameters.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.split(';').next().map(str::trim) {
            Some("text/turtle") => Some(RdfFormat::Turtle),
            Some("application/rdf+xml") => Some(RdfFormat::RdfXml),
            Some("application/ld+json") => Some(RdfFormat::JsonLd),
            Some("text/nt" | "application/n-triples") => Some(RdfFormat::NTriples),
            _ => None,
        }
    }

    /// Resolves a format from a file extension.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ttl") => Some(RdfFormat::Turtle),
            Some("rdf") => Some(RdfFormat::RdfXml),
            Some("json-ld") => Some(RdfFormat::JsonLd),
            Some("nt") => Some(RdfFormat::NTriples),
            _ => None,
        }
    }

    /// The canonical media type of this format.
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::RdfXml => "application/rdf+xml",
            RdfFormat::JsonLd => "application/ld+json",
            RdfFormat::NTriples => "text/nt",
        }
    }
}

fn parse_error(context: &str, message: impl ToString) -> ScoreError {
    ScoreError::Parse {
        context: context.to_owned(),
        message: message.to_string(),
    }
}

fn serialize_error(format: &str, message: impl ToString) -> ScoreError {
    ScoreError::Serialize {
        format: format.to_owned(),
        message: message.to_string(),
    }
}

/// Parses an RDF document in the given format.
///
/// # Errors
///
/// Returns [`ScoreError::Parse`] when the document is not well-formed.
pub fn parse(source: &str, format: RdfFormat) -> Result<MetaGraph, ScoreError> {
    let load_id = LOAD_COUNTER.fetch_add(1, Ordering::Relaxed);
    match format {
        RdfFormat::Turtle => {
            let parsed: FastGraph = turtle::parse_str(source)
                .collect_triples()
                .map_err(|e| parse_error("Turtle", e))?;
            Ok(from_sophia_graph(&parsed, load_id))
        }
        RdfFormat::NTriples => {
            let parsed: FastGraph = nt::parse_str(source)
                .collect_triples()
                .map_err(|e| parse_error("N-Triples", e))?;
            Ok(from_sophia_graph(&parsed, load_id))
        }
        RdfFormat::RdfXml => {
            let parsed: FastGraph = xml_parser::parse_str(source)
                .collect_triples()
                .map_err(|e| parse_error("RDF/XML", e))?;
            Ok(from_sophia_graph(&parsed, load_id))
        }
        RdfFormat::JsonLd => {
            let parsed: FastDataset = JsonLdParser::new()
                .parse(source.as_bytes())
                .collect_quads()
                .map_err(|e| parse_error("JSON-LD", e))?;
            Ok(from_sophia_default_graph(&parsed, load_id))
        }
    }
}

/// Serializes a graph to the given format.
///
/// # Errors
///
/// Returns [`ScoreError::Serialize`] when the underlying serializer fails.
pub fn serialize(graph: &MetaGraph, format: RdfFormat) -> Result<String, ScoreError> {
    match format {
        RdfFormat::Turtle => {
            let config = TurtleConfig::new().with_pretty(true);
            let mut stringifier = TurtleSerializer::new_stringifier_with_config(config);
            stringifier
                .serialize_graph(&to_sophia_graph(graph))
                .map_err(|e| serialize_error("Turtle", e))?;
            Ok(stringifier.to_string())
        }
        RdfFormat::NTriples => {
            let mut stringifier = NtSerializer::new_stringifier();
            stringifier
                .serialize_graph(&to_sophia_graph(graph))
                .map_err(|e| serialize_error("N-Triples", e))?;
            Ok(stringifier.to_string())
        }
        RdfFormat::RdfXml => {
            let mut stringifier = RdfXmlSerializer::new_stringifier();
            stringifier
                .serialize_graph(&to_sophia_graph(graph))
                .map_err(|e| serialize_error("RDF/XML", e))?;
            Ok(stringifier.to_string())
        }
        RdfFormat::JsonLd => jsonld::to_jsonld(graph),
    }
}

/// Loads a graph from a local RDF file; the extension selects the format.
///
/// # Errors
///
/// Returns [`ScoreError::Io`] when the file cannot be read,
/// [`ScoreError::UnsupportedFormat`] for unknown extensions, and
/// [`ScoreError::Parse`] for malformed content.
pub fn load_path(path: &Path) -> Result<MetaGraph, ScoreError> {
    let format = RdfFormat::from_extension(path)
        .ok_or_else(|| ScoreError::UnsupportedFormat(path.display().to_string()))?;
    let source = std::fs::read_to_string(path).map_err(|e| ScoreError::Io {
        path: path.to_owned(),
        source: e,
    })?;
    let graph = parse(&source, format)?;
    info!(path = %path.display(), triples = graph.len(), "loaded RDF file");
    Ok(graph)
}

/// Fetches a graph from a URL; the response `Content-Type` selects the
/// format.
///
/// # Errors
///
/// Returns [`ScoreError::Http`] on transport failure or a non-success
/// status, [`ScoreError::UnsupportedFormat`] when the response media type is
/// not an RDF type, and [`ScoreError::Parse`] for malformed content.
pub fn load_url(url: &str, fetch: &dyn Fetch) -> Result<MetaGraph, ScoreError> {
    let response = fetch.fetch(url, Some(&rdf_accept_header()))?;
    if !response.success {
        return Err(ScoreError::Http {
            uri: url.to_owned(),
            message: "the server did not answer with a success status".to_owned(),
        });
    }
    let media_type = response.media_type.unwrap_or_default();
    let format = RdfFormat::from_media_type(&media_type)
        .ok_or_else(|| ScoreError::UnsupportedFormat(media_type))?;
    let graph = parse(&response.body, format)?;
    info!(url, triples = graph.len(), "loaded remote RDF");
    Ok(graph)
}

/// Checks that an output path sits in an existing directory and carries a
/// recognised RDF extension, returning the selected format.
///
/// # Errors
///
/// Returns [`ScoreError::OutputDir`] or [`ScoreError::OutputExtension`].
pub fn check_output_file(path: &Path) -> Result<RdfFormat, ScoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ScoreError::OutputDir {
            path: path.to_owned(),
        });
    }
    RdfFormat::from_extension(path).ok_or_else(|| ScoreError::OutputExtension {
        path: path.to_owned(),
    })
}

/// Serializes a graph into a file; the extension selects the format.
///
/// # Errors
///
/// As [`check_output_file`] and [`serialize`], plus [`ScoreError::Io`] when
/// the file cannot be written.
pub fn write_file(graph: &MetaGraph, path: &Path) -> Result<(), ScoreError> {
    let format = check_output_file(path)?;
    let rendered = serialize(graph, format)?;
    std::fs::write(path, rendered).map_err(|e| ScoreError::Io {
        path: path.to_owned(),
        source: e,
    })
}

fn from_sophia_term<T: sophia_api::term::Term>(term: T, load_id: u64) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::BlankNode(format!("g{load_id}x{}", id.as_str()))),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            if let Some(tag) = term.language_tag() {
                Some(Term::lang_literal(lexical, tag.as_str()))
            } else {
                let datatype = term.datatype()?.as_str().to_owned();
                Some(Term::Literal(Literal {
                    lexical,
                    datatype,
                    language: None,
                }))
            }
        }
        // quoted triples and variables have no place in catalogue metadata
        _ => None,
    }
}

fn from_sophia_graph(parsed: &FastGraph, load_id: u64) -> MetaGraph {
    let mut out = MetaGraph::new();
    for triple in parsed.triples() {
        let triple = match triple {
            Ok(t) => t,
            Err(_) => continue,
        };
        let (Some(s), Some(p), Some(o)) = (
            from_sophia_term(triple.s(), load_id),
            from_sophia_term(triple.p(), load_id),
            from_sophia_term(triple.o(), load_id),
        ) else {
            continue;
        };
        if let Some(p) = p.as_iri() {
            out.insert(s, p, o);
        }
    }
    out
}

fn from_sophia_default_graph(parsed: &FastDataset, load_id: u64) -> MetaGraph {
    let mut out = MetaGraph::new();
    for quad in parsed.quads() {
        let quad = match quad {
            Ok(q) => q,
            Err(_) => continue,
        };
        if quad.g().is_some() {
            continue;
        }
        let (Some(s), Some(p), Some(o)) = (
            from_sophia_term(quad.s(), load_id),
            from_sophia_term(quad.p(), load_id),
            from_sophia_term(quad.o(), load_id),
        ) else {
            continue;
        };
        if let Some(p) = p.as_iri() {
            out.insert(s, p, o);
        }
    }
    out
}

fn to_sophia_term(term: &Term) -> SimpleTerm<'_> {
    match term {
        Term::Iri(iri) => SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(iri.as_str()))),
        Term::BlankNode(label) => {
            SimpleTerm::BlankNode(BnodeId::new_unchecked(MownStr::from(label.as_str())))
        }
        Term::Literal(literal) => match &literal.language {
            Some(tag) => SimpleTerm::LiteralLanguage(
                MownStr::from(literal.lexical.as_str()),
                LanguageTag::new_unchecked(MownStr::from(tag.as_str())),
            ),
            None => SimpleTerm::LiteralDatatype(
                MownStr::from(literal.lexical.as_str()),
                IriRef::new_unchecked(MownStr::from(literal.datatype.as_str())),
            ),
        },
    }
}

fn to_sophia_graph(graph: &MetaGraph) -> FastGraph {
    let mut out = FastGraph::new();
    for triple in graph.iter() {
        let inserted = out.insert(
            to_sophia_term(&triple.s),
            to_sophia_term(&triple.p),
            to_sophia_term(&triple.o),
        );
        match inserted {
            Ok(_) => {}
            Err(_) => {}
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use scores_vocab::namespaces::{dcterms, rdf, xsd};

    const SAMPLE: &str = r#"
        @prefix dcterms: <http://purl.org/dc/terms/> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

        <https://example.com/dataset>
            dcterms:title "A dataset"@en ;
            dcterms:created "2020-01-01"^^xsd:date ;
            dcterms:isPartOf <https://example.com/catalogue> ;
            dcterms:publisher [ dcterms:title "An org" ] .
    "#;

    #[test]
    fn turtle_round_trip_preserves_triples() {
        let g = parse(SAMPLE, RdfFormat::Turtle).unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(g.len(), 5);

        let resource = Term::iri("https://example.com/dataset");
        assert_eq!(
            g.value(&resource, dcterms::TITLE),
            Some(&Term::lang_literal("A dataset", "en"))
        );
        assert_eq!(
            g.value(&resource, dcterms::CREATED),
            Some(&Term::typed_literal("2020-01-01", xsd::DATE))
        );

        let rendered = serialize(&g, RdfFormat::NTriples).unwrap_or_else(|e| panic!("write: {e}"));
        let back = parse(&rendered, RdfFormat::NTriples).unwrap_or_else(|e| panic!("reparse: {e}"));
        assert_eq!(back.len(), g.len());
    }

    #[test]
    fn parsed_bnode_labels_do_not_collide_across_loads() {
        let first = parse(SAMPLE, RdfFormat::Turtle).unwrap_or_else(|e| panic!("parse: {e}"));
        let second = parse(SAMPLE, RdfFormat::Turtle).unwrap_or_else(|e| panic!("parse: {e}"));
        let mut union = first.clone();
        union.extend_from(&second);
        // the publisher bnode from each load stays distinct
        assert_eq!(union.len(), first.len() + 2);
    }

    #[test]
    fn malformed_turtle_is_a_parse_error() {
        assert!(matches!(
            parse("this is not turtle", RdfFormat::Turtle),
            Err(ScoreError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_extension_is_rejected_before_writing() {
        let g = MetaGraph::new();
        assert!(matches!(
            write_file(&g, Path::new("out.pdf")),
            Err(ScoreError::OutputExtension { .. })
        ));
    }

    #[test]
    fn formats_resolve_from_media_types_and_extensions() {
        assert_eq!(
            RdfFormat::from_media_type("text/turtle; charset=utf-8"),
            Some(RdfFormat::Turtle)
        );
        assert_eq!(
            RdfFormat::from_extension(Path::new("scores.json-ld")),
            Some(RdfFormat::JsonLd)
        );
        assert_eq!(RdfFormat::from_extension(Path::new("scores.txt")), None);
    }

    #[test]
    fn typed_literals_survive_the_boundary() {
        let mut g = MetaGraph::new();
        g.insert(
            Term::iri("https://example.com/d"),
            rdf::TYPE,
            Term::iri("http://www.w3.org/ns/dcat#Dataset"),
        );
        g.insert(
            Term::iri("https://example.com/d"),
            dcterms::CREATED,
            Term::typed_literal("2020-01-01", xsd::DATE),
        );
        let rendered = serialize(&g, RdfFormat::Turtle).unwrap_or_else(|e| panic!("write: {e}"));
        let back = parse(&rendered, RdfFormat::Turtle).unwrap_or_else(|e| panic!("reparse: {e}"));
        assert_eq!(back.len(), 2);
    }
}
