//! In-memory triple store used by the scoring rules.
//!
//! [`MetaGraph`] is a thin, owned wrapper around a set of triples with the
//! pattern queries the rules need. Parsing and serialization live in
//! [`crate::io`], which converts to and from the RDF toolkit's graph types
//! at the boundary; everything inside the engine works on [`Term`] values.
//!
//! Storage is a `BTreeSet`, which gives set semantics (re-asserting a triple
//! is a no-op, so inference expansion is observably idempotent) and
//! deterministic iteration order.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use scores_vocab::namespaces::{rdf, xsd};

/// Counter backing [`Term::mint_bnode`]. Process-global so that score
/// containers minted by separate passes never alias when their fragments are
/// unioned into one graph.
static BNODE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// An RDF literal: lexical form plus datatype, optionally language-tagged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The lexical form.
    pub lexical: String,
    /// Datatype IRI (`rdf:langString` when a language tag is present).
    pub datatype: String,
    /// Optional language tag.
    pub language: Option<String>,
}

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An IRI reference.
    Iri(String),
    /// A blank node, identified by its label.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Iri(value.into())
    }

    /// Creates a blank node term with the given label.
    pub fn bnode(label: impl Into<String>) -> Self {
        Term::BlankNode(label.into())
    }

    /// Mints a fresh blank node with a process-unique label.
    #[must_use]
    pub fn mint_bnode() -> Self {
        let n = BNODE_COUNTER.fetch_add(1, Ordering::Relaxed);
        Term::BlankNode(format!("s{n}"))
    }

    /// Creates an `xsd:string` literal.
    pub fn string_literal(lexical: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: xsd::STRING.to_owned(),
            language: None,
        })
    }

    /// Creates a literal with an explicit datatype IRI.
    pub fn typed_literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        })
    }

    /// Creates a language-tagged literal.
    pub fn lang_literal(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: rdf::LANG_STRING.to_owned(),
            language: Some(language.into()),
        })
    }

    /// Creates an `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Term::typed_literal(value.to_string(), xsd::INTEGER)
    }

    /// Returns the IRI when this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns true for IRI terms.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Returns true for literal terms.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Returns the literal when this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Parses the value of an `xsd:integer` literal.
    #[must_use]
    pub fn integer_value(&self) -> Option<i64> {
        let literal = self.as_literal()?;
        if literal.datatype == xsd::INTEGER {
            literal.lexical.parse().ok()
        } else {
            None
        }
    }

    /// The text a rule sees for this term: the IRI, the blank node label, or
    /// the literal's lexical form.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::BlankNode(label) => label,
            Term::Literal(l) => &l.lexical,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(l) => write!(f, "{:?}", l.lexical),
        }
    }
}

/// A single RDF triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject.
    pub s: Term,
    /// Predicate (always an IRI in well-formed RDF).
    pub p: Term,
    /// Object.
    pub o: Term,
}

/// An in-memory RDF graph: a set of triples plus bound namespace prefixes.
#[derive(Debug, Clone, Default)]
pub struct MetaGraph {
    triples: BTreeSet<Triple>,
    prefixes: BTreeMap<String, String>,
}

impl MetaGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triples held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true when the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates all triples in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Inserts a triple. Returns true when the triple was not already
    /// present.
    pub fn insert(&mut self, s: Term, p: &str, o: Term) -> bool {
        self.triples.insert(Triple {
            s,
            p: Term::iri(p),
            o,
        })
    }

    /// Returns true when the exact triple is present.
    #[must_use]
    pub fn contains(&self, s: &Term, p: &str, o: &Term) -> bool {
        self.triples.contains(&Triple {
            s: s.clone(),
            p: Term::iri(p),
            o: o.clone(),
        })
    }

    /// Returns true when the subject has at least one value for the
    /// predicate.
    #[must_use]
    pub fn has(&self, s: &Term, p: &str) -> bool {
        self.objects(s, p).next().is_some()
    }

    /// Objects of all `(s, p, ?)` triples.
    pub fn objects<'a>(&'a self, s: &'a Term, p: &'a str) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |t| &t.s == s && t.p.as_iri() == Some(p))
            .map(|t| &t.o)
    }

    /// First object of `(s, p, ?)` in deterministic order, if any.
    #[must_use]
    pub fn value<'a>(&'a self, s: &'a Term, p: &'a str) -> Option<&'a Term> {
        self.objects(s, p).next()
    }

    /// Subjects of all `(?, p, o)` triples.
    pub fn subjects_with<'a>(&'a self, p: &'a str, o: &'a Term) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |t| t.p.as_iri() == Some(p) && &t.o == o)
            .map(|t| &t.s)
    }

    /// Subjects typed as the given class.
    pub fn subjects_of_type<'a>(&'a self, class_iri: &'a str) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |t| {
                t.p.as_iri() == Some(rdf::TYPE) && t.o.as_iri() == Some(class_iri)
            })
            .map(|t| &t.s)
    }

    /// All `(s, o)` pairs connected by the predicate.
    pub fn subject_object_pairs<'a>(
        &'a self,
        p: &'a str,
    ) -> impl Iterator<Item = (&'a Term, &'a Term)> {
        self.triples
            .iter()
            .filter(move |t| t.p.as_iri() == Some(p))
            .map(|t| (&t.s, &t.o))
    }

    /// Predicate IRIs of all triples with the given subject, with repeats
    /// (one entry per triple).
    pub fn predicates_of<'a>(&'a self, s: &'a Term) -> impl Iterator<Item = &'a str> {
        self.triples
            .iter()
            .filter(move |t| &t.s == s)
            .filter_map(|t| t.p.as_iri())
    }

    /// The set of distinct predicate IRIs used anywhere in the graph.
    #[must_use]
    pub fn predicates(&self) -> BTreeSet<&str> {
        self.triples.iter().filter_map(|t| t.p.as_iri()).collect()
    }

    /// Unions another graph into this one, cloning its triples and merging
    /// its prefix bindings.
    pub fn extend_from(&mut self, other: &MetaGraph) {
        self.triples.extend(other.triples.iter().cloned());
        for (prefix, ns) in &other.prefixes {
            self.prefixes
                .entry(prefix.clone())
                .or_insert_with(|| ns.clone());
        }
    }

    /// Unions another graph into this one, consuming it.
    pub fn absorb(&mut self, other: MetaGraph) {
        self.triples.extend(other.triples);
        for (prefix, ns) in other.prefixes {
            self.prefixes.entry(prefix).or_insert(ns);
        }
    }

    /// Binds a namespace prefix for serialization.
    pub fn bind_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Bound namespace prefixes.
    #[must_use]
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scores_vocab::namespaces::{dcat, dcterms};

    #[test]
    fn insert_is_set_semantics() {
        let mut g = MetaGraph::new();
        let s = Term::iri("https://example.com/d");
        assert!(g.insert(s.clone(), dcterms::TITLE, Term::string_literal("T")));
        assert!(!g.insert(s, dcterms::TITLE, Term::string_literal("T")));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn pattern_queries() {
        let mut g = MetaGraph::new();
        let d = Term::iri("https://example.com/d");
        let c = Term::iri("https://example.com/cat");
        g.insert(d.clone(), rdf::TYPE, Term::iri(dcat::RESOURCE));
        g.insert(d.clone(), dcterms::IS_PART_OF, c.clone());
        g.insert(d.clone(), dcterms::TITLE, Term::string_literal("T"));

        assert!(g.has(&d, dcterms::IS_PART_OF));
        assert_eq!(g.value(&d, dcterms::IS_PART_OF), Some(&c));
        assert_eq!(g.subjects_of_type(dcat::RESOURCE).count(), 1);
        assert_eq!(g.predicates_of(&d).count(), 3);
        assert!(g.predicates().contains(dcterms::TITLE));
    }

    #[test]
    fn minted_bnodes_are_distinct() {
        assert_ne!(Term::mint_bnode(), Term::mint_bnode());
    }

    #[test]
    fn integer_literals_round_trip() {
        assert_eq!(Term::integer(14).integer_value(), Some(14));
        assert_eq!(Term::string_literal("14").integer_value(), None);
    }

    #[test]
    fn union_merges_triples_and_prefixes() {
        let mut a = MetaGraph::new();
        a.bind_prefix("dcat", dcat::NS);
        a.insert(Term::iri("https://example.com/x"), dcterms::TITLE, Term::string_literal("X"));
        let mut b = MetaGraph::new();
        b.bind_prefix("dct", dcterms::NS);
        b.insert(Term::iri("https://example.com/y"), dcterms::TITLE, Term::string_literal("Y"));

        a.extend_from(&b);
        assert_eq!(a.len(), 2);
        assert!(a.prefixes().contains_key("dcat"));
        assert!(a.prefixes().contains_key("dct"));
    }
}
