//! RDF — `http://www.w3.org/1999/02/22-rdf-syntax-ns#`.

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// `rdf:type`.
pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:langString` — datatype of language-tagged literals.
pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
