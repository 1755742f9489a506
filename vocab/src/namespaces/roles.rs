//! Data roles — `https://linked.data.gov.au/def/data-roles/`.
//!
//! Role codes carried by `prov:qualifiedAttribution` nodes via
//! `dcat:hadRole` / `prov:hadRole`. The indigeneity code lists built from
//! these live in [`crate::reference`].

/// Namespace IRI.
pub const NS: &str = "https://linked.data.gov.au/def/data-roles/";

/// Custodian of the data.
pub const CUSTODIAN: &str = "https://linked.data.gov.au/def/data-roles/custodian";
/// Owner of the data.
pub const OWNER: &str = "https://linked.data.gov.au/def/data-roles/owner";
/// Holder of rights over the data.
pub const RIGHTS_HOLDER: &str = "https://linked.data.gov.au/def/data-roles/rightsHolder";
/// Distributor of the data.
pub const DISTRIBUTOR: &str = "https://linked.data.gov.au/def/data-roles/distributor";
/// Author of the data.
pub const AUTHOR: &str = "https://linked.data.gov.au/def/data-roles/author";
/// Contributor to the data.
pub const CONTRIBUTOR: &str = "https://linked.data.gov.au/def/data-roles/contributor";
/// Editor of the data.
pub const EDITOR: &str = "https://linked.data.gov.au/def/data-roles/editor";
/// Principal investigator of the originating project.
pub const PRINCIPAL_INVESTIGATOR: &str =
    "https://linked.data.gov.au/def/data-roles/principalInvestigator";
