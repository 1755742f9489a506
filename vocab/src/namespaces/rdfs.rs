//! RDFS — `http://www.w3.org/2000/01/rdf-schema#`.

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// `rdfs:label`.
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:member`.
pub const MEMBER: &str = "http://www.w3.org/2000/01/rdf-schema#member";
