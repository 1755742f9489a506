//! Scores ontology encoded as typed Rust data.
//!
//! The `scores-vocab` crate carries the vocabulary surface used when scoring
//! catalogued metadata records:
//!
//! - [`namespaces`] — IRI constants for the Scores ontology
//!   (`https://linked.data.gov.au/def/scores/`) and the external vocabularies
//!   it is used with (DCAT, Dublin Core Terms, PROV-O, the RDF Data Cube
//!   vocabulary, OWL Time, the access-rights and data-roles vocabularies).
//! - [`reference`] — the controlled lists the scoring rules consult:
//!   persistent-identifier indicators, machine-readable media types, the
//!   properties expected to carry shared-vocabulary IRIs, the access-rights
//!   point table, and the indigeneity role code lists.
//! - [`rubric`] — the FAIR and CARE dimension tables: measure property,
//!   normalised measure property, and the documented maximum each dimension
//!   is normalised against.
//! - [`context`] — the fixed JSON-LD `@context` used for JSON-LD output.
//!
//! # Entry points
//!
//! ```
//! use scores_vocab::{namespaces::scores, rubric};
//!
//! assert_eq!(scores::FAIR_F_SCORE, "https://linked.data.gov.au/def/scores/fairFScore");
//! assert_eq!(rubric::FAIR_DIMENSIONS[0].maximum, 17);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod context;
pub mod namespaces;
pub mod reference;
pub mod rubric;

pub use rubric::Dimension;
