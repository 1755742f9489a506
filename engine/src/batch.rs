//! Batch drivers: score every resource in a graph, or every file in a
//! directory.
//!
//! Resources are scored independently; each produces an immutable fragment
//! and the driver unions the fragments into one result graph. Directory
//! mode scores every `*.ttl` file against shared context data and writes
//! `<name>-fair.ttl` / `<name>-care.ttl` artifacts into a `scores`
//! subdirectory.

use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::care;
use crate::error::ScoreError;
use crate::fair::{self, FairOptions};
use crate::fetch::Fetch;
use crate::graph::MetaGraph;
use crate::io::load_path;
use crate::pipeline::{run_care, run_fair, RunOptions, ScoreInput, ScoreOutput};
use crate::validation::ShapeValidator;
use scores_vocab::namespaces::{dcat, qb, scores};

/// Binds the prefixes score graphs are serialized with.
fn bind_score_prefixes(graph: &mut MetaGraph) {
    graph.bind_prefix("scores", scores::NS);
    graph.bind_prefix("qb", qb::NS);
}

/// FAIR-scores every subject typed `dcat:Resource`, returning the union of
/// all per-resource fragments.
pub fn fair_scores_for_graph(
    metadata: &MetaGraph,
    fetch: &dyn Fetch,
    options: &FairOptions,
) -> MetaGraph {
    let mut result = MetaGraph::new();
    bind_score_prefixes(&mut result);
    for resource in metadata.subjects_of_type(dcat::RESOURCE) {
        result.absorb(fair::score_resource(metadata, resource, fetch, options));
    }
    result
}

/// CARE-scores every subject typed `dcat:Resource`, returning the union of
/// all per-resource fragments.
pub fn care_scores_for_graph(metadata: &MetaGraph, fetch: &dyn Fetch) -> MetaGraph {
    let mut result = MetaGraph::new();
    bind_score_prefixes(&mut result);
    for resource in metadata.subjects_of_type(dcat::RESOURCE) {
        result.absorb(care::score_resource(metadata, resource, fetch));
    }
    result
}

/// Options for directory processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryOptions {
    /// Validate each record graph before scoring it.
    pub validate: bool,
    /// Skip the CARE artifacts.
    pub skip_care: bool,
    /// Skip the FAIR artifacts.
    pub skip_fair: bool,
}

/// Turtle files directly inside a directory, in name order.
fn turtle_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("ttl"))
        .collect()
}

/// Scores every `*.ttl` file in `directory`, writing `<name>-care.ttl`
/// and/or `<name>-fair.ttl` into a `scores` subdirectory. Every record
/// graph is unioned with all Turtle found in `context_directory` first
/// (the catalogue itself, governance frameworks, and similar context).
/// Returns the paths written.
///
/// # Errors
///
/// Fatal conditions abort the whole run: an unreadable directory, an
/// unparsable file, or (when requested) a validation failure.
pub fn process_directory(
    directory: &Path,
    context_directory: &Path,
    fetch: &dyn Fetch,
    validator: &dyn ShapeValidator,
    options: &DirectoryOptions,
) -> Result<Vec<PathBuf>, ScoreError> {
    let scores_dir = directory.join("scores");
    std::fs::create_dir_all(&scores_dir).map_err(|e| ScoreError::Io {
        path: scores_dir.clone(),
        source: e,
    })?;

    let mut context = MetaGraph::new();
    for path in turtle_files(context_directory) {
        context.absorb(load_path(&path)?);
    }

    let run_options = RunOptions {
        validate: options.validate,
        ..RunOptions::default()
    };

    let mut written = Vec::new();
    for path in turtle_files(directory) {
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_owned(),
            None => continue,
        };
        info!(path = %path.display(), "scoring record file");

        if !options.skip_care {
            let mut graph = context.clone();
            graph.absorb(load_path(&path)?);
            let target = scores_dir.join(format!("{stem}-care.ttl"));
            run_care(
                ScoreInput::Graph(graph),
                &ScoreOutput::File(target.clone()),
                &run_options,
                fetch,
                validator,
            )?;
            written.push(target);
        }
        if !options.skip_fair {
            let mut graph = context.clone();
            graph.absorb(load_path(&path)?);
            let target = scores_dir.join(format!("{stem}-fair.ttl"));
            run_fair(
                ScoreInput::Graph(graph),
                &ScoreOutput::File(target.clone()),
                &run_options,
                fetch,
                validator,
            )?;
            written.push(target);
        }
    }

    Ok(written)
}
