//! Error types for the scoring engine.
//!
//! The taxonomy separates fatal conditions (unparsable input, unreachable
//! input URL, profile non-conformance, bad output targets) from network
//! soft-failures, which are handled inside the individual reachability
//! checks and scored as zero rather than surfacing here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for scoring operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoreError {
    /// The input RDF could not be parsed.
    #[error("failed to parse {context}: {message}")]
    Parse {
        /// What was being parsed (a path, a URL, or a format name).
        context: String,
        /// The underlying parser message.
        message: String,
    },

    /// An RDF graph could not be serialized.
    #[error("failed to serialize graph as {format}: {message}")]
    Serialize {
        /// Target format name.
        format: String,
        /// The underlying serializer message.
        message: String,
    },

    /// An HTTP request for input data failed or returned a non-success
    /// status.
    #[error("request to {uri} failed: {message}")]
    Http {
        /// The requested URI.
        uri: String,
        /// The underlying transport or status message.
        message: String,
    },

    /// A format name or media type is not one of the supported RDF formats.
    #[error("unsupported RDF format: {0}")]
    UnsupportedFormat(String),

    /// The input graph does not conform to the catalogue profile.
    #[error("input does not conform to the catalogue profile:\n{report}")]
    Validation {
        /// The validator's full textual report.
        report: String,
    },

    /// The output path does not sit in an existing directory.
    #[error("the output path {} does not indicate a valid directory", .path.display())]
    OutputDir {
        /// The offending path.
        path: PathBuf,
    },

    /// The output path does not carry a recognised RDF file extension.
    #[error(
        "the output path {} does not specify a known file type; it must end in .ttl, .rdf, .json-ld or .nt",
        .path.display()
    )]
    OutputExtension {
        /// The offending path.
        path: PathBuf,
    },

    /// A score container is missing an observation for an expected
    /// dimension measure.
    #[error("score container {container} has no observation for {measure}")]
    MissingDimension {
        /// The score container node.
        container: String,
        /// The absent measure property.
        measure: String,
    },

    /// An observation carries a value that is not a plain integer.
    #[error("observation value {value:?} for {measure} is not an integer")]
    InvalidScoreValue {
        /// The measure property of the observation.
        measure: String,
        /// The offending lexical value.
        value: String,
    },

    /// A file system operation failed.
    #[error("I/O error at {}", .path.display())]
    Io {
        /// The path the operation targeted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
