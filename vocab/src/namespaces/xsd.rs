//! XML Schema datatypes — `http://www.w3.org/2001/XMLSchema#`.

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// `xsd:string`.
pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:decimal`.
pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:date`.
pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
/// `xsd:anyURI`.
pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
