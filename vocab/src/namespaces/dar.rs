//! Data access rights — `https://linked.data.gov.au/def/data-access-rights/`.
//!
//! The controlled vocabulary catalogue records attach via `dcat:theme` to
//! declare how accessible the described data is.

/// Namespace IRI.
pub const NS: &str = "https://linked.data.gov.au/def/data-access-rights/";

/// No access to data or metadata.
pub const PROTECTED: &str = "https://linked.data.gov.au/def/data-access-rights/protected";
/// Access restricted to approved parties.
pub const RESTRICTED: &str =
    "https://linked.data.gov.au/def/data-access-rights/restricted";
/// Only the metadata record is available.
pub const METADATA_ONLY: &str =
    "https://linked.data.gov.au/def/data-access-rights/metadata-only";
/// Access subject to unspecified conditions.
pub const CONDITIONAL: &str =
    "https://linked.data.gov.au/def/data-access-rights/conditional";
/// Access after an embargo date.
pub const EMBARGOED: &str = "https://linked.data.gov.au/def/data-access-rights/embargoed";
/// Fully open access.
pub const OPEN: &str = "https://linked.data.gov.au/def/data-access-rights/open";
