//! RDF Data Cube — `http://purl.org/linked-data/cube#`.
//!
//! Scores are shaped as one `qb:ObservationGroup` per resource per score
//! type, holding one `qb:Observation` per measured dimension.

/// Namespace IRI.
pub const NS: &str = "http://purl.org/linked-data/cube#";

/// `qb:Observation`.
pub const OBSERVATION: &str = "http://purl.org/linked-data/cube#Observation";
/// `qb:ObservationGroup`.
pub const OBSERVATION_GROUP: &str = "http://purl.org/linked-data/cube#ObservationGroup";
/// `qb:observation` — links a group to a member observation.
pub const OBSERVATION_PROP: &str = "http://purl.org/linked-data/cube#observation";
