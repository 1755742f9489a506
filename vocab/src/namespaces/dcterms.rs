//! Dublin Core Terms — `http://purl.org/dc/terms/`.

/// Namespace IRI.
pub const NS: &str = "http://purl.org/dc/terms/";

/// `dcterms:title`.
pub const TITLE: &str = "http://purl.org/dc/terms/title";
/// `dcterms:description`.
pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
/// `dcterms:identifier`.
pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
/// `dcterms:created`.
pub const CREATED: &str = "http://purl.org/dc/terms/created";
/// `dcterms:modified`.
pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
/// `dcterms:type`.
pub const TYPE: &str = "http://purl.org/dc/terms/type";
/// `dcterms:isPartOf`.
pub const IS_PART_OF: &str = "http://purl.org/dc/terms/isPartOf";
/// `dcterms:hasPart`.
pub const HAS_PART: &str = "http://purl.org/dc/terms/hasPart";
/// `dcterms:license`.
pub const LICENSE: &str = "http://purl.org/dc/terms/license";
/// `dcterms:rights`.
pub const RIGHTS: &str = "http://purl.org/dc/terms/rights";
/// `dcterms:accessRights`.
pub const ACCESS_RIGHTS: &str = "http://purl.org/dc/terms/accessRights";
/// `dcterms:source`.
pub const SOURCE: &str = "http://purl.org/dc/terms/source";
/// `dcterms:format`.
pub const FORMAT: &str = "http://purl.org/dc/terms/format";
/// `dcterms:publisher`.
pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
/// `dcterms:creator`.
pub const CREATOR: &str = "http://purl.org/dc/terms/creator";
/// `dcterms:contributor`.
pub const CONTRIBUTOR: &str = "http://purl.org/dc/terms/contributor";
