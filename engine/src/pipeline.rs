//! End-to-end scoring runs: load, expand, validate, score, normalise,
//! serialize.
//!
//! [`run_fair`] and [`run_care`] accept a file path, a URL, or an in-memory
//! graph, and produce either a rendered document for standard output, a
//! written file (extension selects the format), or the result graph itself.
//! The output target is checked before any scoring work so that a bad
//! target cannot discard a completed run.

use std::path::PathBuf;

use tracing::info;

use crate::batch::{care_scores_for_graph, fair_scores_for_graph};
use crate::error::ScoreError;
use crate::fair::{AccessAggregation, FairOptions};
use crate::fetch::Fetch;
use crate::graph::MetaGraph;
use crate::inference::{expand, Rules};
use crate::io::{check_output_file, load_path, load_url, serialize, write_file, RdfFormat};
use crate::normalize::{normalise_care, normalise_fair, MissingDimension};
use crate::validation::ShapeValidator;

/// Where the input graph comes from.
#[derive(Debug)]
pub enum ScoreInput {
    /// A local RDF file; the extension selects the format.
    Path(PathBuf),
    /// A URL serving RDF; the response `Content-Type` selects the format.
    Url(String),
    /// An already-loaded graph.
    Graph(MetaGraph),
}

/// Where the result graph goes.
#[derive(Debug, Clone)]
pub enum ScoreOutput {
    /// Render to a string in the given format, for standard output.
    StdOut(RdfFormat),
    /// Write to a file; the extension selects the format.
    File(PathBuf),
    /// Return the result graph unserialized.
    Graph,
}

/// The result of a scoring run, matching the chosen [`ScoreOutput`].
#[derive(Debug)]
pub enum RunOutcome {
    /// The rendered document, ready to print.
    Rendered(String),
    /// The path the result was written to.
    Written(PathBuf),
    /// The result graph.
    Graph(MetaGraph),
}

/// Options for a scoring run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Validate the input against the catalogue profile before scoring.
    pub validate: bool,
    /// Aggregation of multiple access-rights themes (FAIR A).
    pub access_aggregation: AccessAggregation,
    /// Policy when a score container lacks a dimension observation.
    pub missing_dimension: MissingDimension,
}

/// Which rubric a run scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rubric {
    Fair,
    Care,
}

/// Calculates FAIR scores (raw and normalised) for every catalogued
/// resource in the input.
///
/// # Errors
///
/// Fatal conditions per the error taxonomy: unparsable or unreachable
/// input, profile non-conformance when validation is requested, and
/// invalid output targets (checked before scoring starts).
pub fn run_fair(
    input: ScoreInput,
    output: &ScoreOutput,
    options: &RunOptions,
    fetch: &dyn Fetch,
    validator: &dyn ShapeValidator,
) -> Result<RunOutcome, ScoreError> {
    run(input, output, options, fetch, validator, Rubric::Fair)
}

/// Calculates CARE scores (raw and normalised) for every catalogued
/// resource in the input.
///
/// # Errors
///
/// As [`run_fair`].
pub fn run_care(
    input: ScoreInput,
    output: &ScoreOutput,
    options: &RunOptions,
    fetch: &dyn Fetch,
    validator: &dyn ShapeValidator,
) -> Result<RunOutcome, ScoreError> {
    run(input, output, options, fetch, validator, Rubric::Care)
}

fn run(
    input: ScoreInput,
    output: &ScoreOutput,
    options: &RunOptions,
    fetch: &dyn Fetch,
    validator: &dyn ShapeValidator,
    rubric: Rubric,
) -> Result<RunOutcome, ScoreError> {
    // fail on a bad output target before doing any scoring work
    if let ScoreOutput::File(path) = output {
        check_output_file(path)?;
    }

    let mut graph = match input {
        ScoreInput::Path(path) => load_path(&path)?,
        ScoreInput::Url(url) => load_url(&url, fetch)?,
        ScoreInput::Graph(graph) => graph,
    };

    let rules = match rubric {
        Rubric::Fair => Rules::fair(),
        Rubric::Care => Rules::care(),
    };
    expand(&mut graph, &rules);

    if options.validate {
        let outcome = validator.validate(&graph);
        if !outcome.conforms() {
            return Err(ScoreError::Validation {
                report: outcome.report(),
            });
        }
    }

    let mut result = match rubric {
        Rubric::Fair => {
            let fair_options = FairOptions {
                access_aggregation: options.access_aggregation,
            };
            fair_scores_for_graph(&graph, fetch, &fair_options)
        }
        Rubric::Care => care_scores_for_graph(&graph, fetch),
    };
    let normalised = match rubric {
        Rubric::Fair => normalise_fair(&result, options.missing_dimension)?,
        Rubric::Care => normalise_care(&result, options.missing_dimension)?,
    };
    result.absorb(normalised);
    info!(triples = result.len(), "scoring pass complete");

    match output {
        ScoreOutput::StdOut(format) => Ok(RunOutcome::Rendered(serialize(&result, *format)?)),
        ScoreOutput::File(path) => {
            write_file(&result, path)?;
            Ok(RunOutcome::Written(path.clone()))
        }
        ScoreOutput::Graph => Ok(RunOutcome::Graph(result)),
    }
}
