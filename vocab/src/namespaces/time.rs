//! OWL Time — `http://www.w3.org/2006/time#`.
//!
//! Used for the optional validity interval a score can be qualified with.

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2006/time#";

/// `time:ProperInterval`.
pub const PROPER_INTERVAL: &str = "http://www.w3.org/2006/time#ProperInterval";
/// `time:Instant`.
pub const INSTANT: &str = "http://www.w3.org/2006/time#Instant";
/// `time:hasBeginning`.
pub const HAS_BEGINNING: &str = "http://www.w3.org/2006/time#hasBeginning";
/// `time:hasEnd`.
pub const HAS_END: &str = "http://www.w3.org/2006/time#hasEnd";
/// `time:inXSDDate`.
pub const IN_XSD_DATE: &str = "http://www.w3.org/2006/time#inXSDDate";
