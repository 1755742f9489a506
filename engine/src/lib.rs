//! FAIR and CARE score calculators for catalogued resources described in
//! RDF metadata.
//!
//! The engine reads a catalogue graph, applies a small set of
//! forward-chaining rules, evaluates the rubric sub-scores for every
//! catalogued resource, and emits the results as RDF observations
//! (`qb:ObservationGroup` / `qb:Observation`) under the Scores ontology,
//! raw and normalised, alongside the original metadata.
//!
//! # Entry points
//!
//! End-to-end runs mirror the command-line tools:
//!
//! ```no_run
//! use scores_engine::fetch::HttpFetcher;
//! use scores_engine::io::RdfFormat;
//! use scores_engine::pipeline::{run_fair, RunOptions, ScoreInput, ScoreOutput};
//! use scores_engine::validation::ProfileValidator;
//!
//! # fn main() -> Result<(), scores_engine::ScoreError> {
//! let fetcher = HttpFetcher::new()?;
//! let outcome = run_fair(
//!     ScoreInput::Path("catalogue.ttl".into()),
//!     &ScoreOutput::StdOut(RdfFormat::Turtle),
//!     &RunOptions::default(),
//!     &fetcher,
//!     &ProfileValidator,
//! )?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```
//!
//! Individual sub-scores are plain functions over a [`graph::MetaGraph`]
//! and can be evaluated on their own; the composed values for one resource
//! live in [`fair::FairSubScores`] and [`care::CareSubScores`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod batch;
pub mod care;
pub mod error;
pub mod fair;
pub mod fetch;
pub mod graph;
pub mod inference;
pub mod io;
pub mod jsonld;
pub mod measures;
pub mod normalize;
pub mod observation;
pub mod pipeline;
pub mod validation;

pub use error::ScoreError;
pub use graph::{MetaGraph, Term};
