//! `care` — calculates the CARE score of catalogued resources.
//!
//! Accepts the path of an RDF file or the URL of RDF data online, scores
//! every catalogued resource it describes, and returns the scores as RDF:
//! to standard output in a chosen format, or to a file whose extension
//! selects the format.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use scores_engine::fetch::HttpFetcher;
use scores_engine::io::RdfFormat;
use scores_engine::pipeline::{run_care, RunOptions, RunOutcome, ScoreInput, ScoreOutput};
use scores_engine::validation::ProfileValidator;

/// Calculate the CARE score of catalogued resources described in RDF.
#[derive(Parser)]
#[command(name = "care", about = "Calculate the CARE score of a resource")]
struct Args {
    /// The path of an RDF file or URL of RDF data online.
    input: String,

    /// A path for an output file or an output format. If set to a file
    /// path, the output will be written to the file rather than returned
    /// to standard out; the file extension determines the format and must
    /// be one of .ttl, .rdf, .json-ld, .nt. If a format is given, it must
    /// be one of text/turtle, application/rdf+xml, application/ld+json,
    /// text/nt.
    #[arg(short, long, default_value = "text/turtle")]
    output: String,

    /// Validate the input against the catalogue profile before scoring it.
    #[arg(short, long)]
    validate: bool,
}

/// Resolves the input argument: an existing file is loaded from disk,
/// anything else is treated as a URL.
fn resolve_input(input: &str) -> ScoreInput {
    if Path::new(input).is_file() {
        ScoreInput::Path(PathBuf::from(input))
    } else {
        ScoreInput::Url(input.to_owned())
    }
}

/// Resolves the output argument: a known media type renders to standard
/// out, anything else is an output file path.
fn resolve_output(output: &str) -> ScoreOutput {
    match RdfFormat::from_media_type(output) {
        Some(format) => ScoreOutput::StdOut(format),
        None => ScoreOutput::File(PathBuf::from(output)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = RunOptions {
        validate: args.validate,
        ..RunOptions::default()
    };
    let fetcher = HttpFetcher::new()?;

    let outcome = run_care(
        resolve_input(&args.input),
        &resolve_output(&args.output),
        &options,
        &fetcher,
        &ProfileValidator,
    )?;

    match outcome {
        RunOutcome::Rendered(document) => println!("{document}"),
        RunOutcome::Written(path) => eprintln!("wrote {}", path.display()),
        RunOutcome::Graph(_) => {}
    }
    Ok(())
}
