//! PROV-O — `http://www.w3.org/ns/prov#`.

/// Namespace IRI. Any predicate under it counts as declared provenance.
pub const NS: &str = "http://www.w3.org/ns/prov#";

/// `prov:qualifiedAttribution`.
pub const QUALIFIED_ATTRIBUTION: &str = "http://www.w3.org/ns/prov#qualifiedAttribution";
/// `prov:agent`.
pub const AGENT: &str = "http://www.w3.org/ns/prov#agent";
/// `prov:hadRole`.
pub const HAD_ROLE: &str = "http://www.w3.org/ns/prov#hadRole";
