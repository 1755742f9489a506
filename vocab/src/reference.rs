//! Controlled reference lists consulted by the scoring rules.

use crate::namespaces::{dar, dcat, dcterms, prov, rdfs, roles};

/// Substrings of a resource IRI that indicate a persistent, citable
/// identifier scheme. First match wins when awarding the findability bonus.
pub const PID_INDICATORS: [&str; 7] = [
    "doi:",
    "doi.org",
    "ark:",
    "purl.org",
    "linked.data.gov.au",
    "handle.net",
    "w3id.org",
];

/// Media types offered in the `Accept` header when probing a catalogue or
/// resource IRI for RDF content.
pub const RDF_MEDIA_TYPES: [&str; 6] = [
    "text/turtle",
    "text/n3",
    "application/ld+json",
    "application/n-triples",
    "application/n-quads",
    "application/rdf+xml",
];

/// File-extension tokens considered machine readable, paired with their
/// media types. A declared media type scores higher than a bare extension
/// token in the interoperability rule.
pub const MACHINE_READABLE_FORMATS: [(&str, &str); 15] = [
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("csv", "text/csv"),
    ("tsv", "text/tab-separated-values"),
    ("yaml", "application/x-yaml"),
    ("yml", "application/x-yaml"),
    ("rdf", "application/rdf+xml"),
    ("ttl", "text/turtle"),
    ("jsonld", "application/ld+json"),
    ("geojson", "application/geo+json"),
    ("gml", "application/gml+xml"),
    ("kml", "application/vnd.google-earth.kml+xml"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("xls", "application/vnd.ms-excel"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
];

/// Properties that declare a format or media type.
pub const MEDIA_TYPE_FORMAT_PROPERTIES: [&str; 2] = [dcterms::FORMAT, dcat::MEDIA_TYPE];

/// Properties whose objects are expected to be IRIs into shared
/// vocabularies or ontologies.
pub const URI_EXPECTED_PROPERTIES: [&str; 12] = [
    dcterms::FORMAT,
    dcterms::TYPE,
    dcterms::LICENSE,
    dcterms::PUBLISHER,
    dcterms::CREATOR,
    dcterms::CONTRIBUTOR,
    dcterms::ACCESS_RIGHTS,
    prov::AGENT,
    prov::HAD_ROLE,
    dcat::HAD_ROLE,
    dcat::THEME,
    rdfs::MEMBER,
];

/// Properties that declare a data usage licence.
pub const LICENSE_PROPERTIES: [&str; 1] = [dcterms::LICENSE];

/// Properties outside PROV-O that still count as declared provenance.
pub const ADDITIONAL_PROVENANCE_PROPERTIES: [&str; 1] = [dcterms::SOURCE];

/// Properties whose presence makes a metadata record findable through a
/// catalogue's free-text search.
pub const SEARCHABLE_PROPERTIES: [&str; 4] = [
    dcterms::TITLE,
    dcterms::DESCRIPTION,
    rdfs::LABEL,
    dcat::KEYWORD,
];

/// Point awards per declared access-rights theme.
pub const ACCESS_RIGHTS_POINTS: [(&str, i64); 6] = [
    (dar::PROTECTED, 0),
    (dar::RESTRICTED, 0),
    (dar::METADATA_ONLY, 2),
    (dar::CONDITIONAL, 4),
    (dar::EMBARGOED, 6),
    (dar::OPEN, 10),
];

/// Role codes indicating an organisation exercising indigenous governance
/// over the data.
pub const ORGANISATION_ROLE_CODES: [&str; 4] = [
    roles::CUSTODIAN,
    roles::OWNER,
    roles::RIGHTS_HOLDER,
    roles::DISTRIBUTOR,
];

/// Role codes indicating an individual attributed for the data.
pub const INDIVIDUAL_ROLE_CODES: [&str; 4] = [
    roles::AUTHOR,
    roles::CONTRIBUTOR,
    roles::EDITOR,
    roles::PRINCIPAL_INVESTIGATOR,
];

/// Role codes indicating control of the data (custodianship or ownership).
pub const CONTROL_ROLE_CODES: [&str; 2] = [roles::CUSTODIAN, roles::OWNER];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_rights_cover_the_vocabulary() {
        for term in [
            dar::PROTECTED,
            dar::RESTRICTED,
            dar::METADATA_ONLY,
            dar::CONDITIONAL,
            dar::EMBARGOED,
            dar::OPEN,
        ] {
            assert!(
                ACCESS_RIGHTS_POINTS.iter().any(|(t, _)| *t == term),
                "no point award for {term}"
            );
        }
    }

    #[test]
    fn control_roles_are_organisational() {
        for role in CONTROL_ROLE_CODES {
            assert!(ORGANISATION_ROLE_CODES.contains(&role));
        }
    }
}
