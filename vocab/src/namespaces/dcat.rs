//! DCAT — `http://www.w3.org/ns/dcat#`.

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/ns/dcat#";

/// `dcat:Resource` — the generic catalogued-resource class scoring iterates.
pub const RESOURCE: &str = "http://www.w3.org/ns/dcat#Resource";
/// `dcat:Dataset`.
pub const DATASET: &str = "http://www.w3.org/ns/dcat#Dataset";
/// `dcat:Catalog`.
pub const CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";

/// `dcat:theme` — carries access-rights themes in catalogue records.
pub const THEME: &str = "http://www.w3.org/ns/dcat#theme";
/// `dcat:mediaType`.
pub const MEDIA_TYPE: &str = "http://www.w3.org/ns/dcat#mediaType";
/// `dcat:keyword`.
pub const KEYWORD: &str = "http://www.w3.org/ns/dcat#keyword";
/// `dcat:hadRole` — role of an agent within a `prov:qualifiedAttribution`.
pub const HAD_ROLE: &str = "http://www.w3.org/ns/dcat#hadRole";
