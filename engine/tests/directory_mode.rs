//! Directory batch mode: context union, artifact naming, and skip flags.

use std::fs;

use scores_engine::batch::{process_directory, DirectoryOptions};
use scores_engine::fetch::FixedFetcher;
use scores_engine::io::{parse, RdfFormat};
use scores_engine::validation::ProfileValidator;
use scores_vocab::namespaces::scores;

const RECORD: &str = r#"
@prefix dcat: <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<https://example.com/record>
    a dcat:Dataset ;
    dcterms:title "A record" ;
    dcterms:description "A record to score in directory mode." ;
    dcterms:isPartOf <https://example.com/catalogue> .
"#;

const CONTEXT: &str = r#"
@prefix dcat: <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

<https://example.com/catalogue>
    a dcat:Catalog ;
    rdfs:label "Example catalogue" ;
    dcterms:hasPart <https://example.com/framework> .

<https://example.com/framework>
    rdfs:label "Indigenous data governance framework" .
"#;

#[test]
fn writes_care_and_fair_artifacts_into_a_scores_subdirectory() {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let context_dir = tempfile::tempdir().expect("tempdir");
    fs::write(data_dir.path().join("record.ttl"), RECORD).expect("write record");
    fs::write(context_dir.path().join("catalogue.ttl"), CONTEXT).expect("write context");

    let written = process_directory(
        data_dir.path(),
        context_dir.path(),
        &FixedFetcher::empty(),
        &ProfileValidator,
        &DirectoryOptions::default(),
    )
    .expect("directory run succeeds");

    let care_path = data_dir.path().join("scores").join("record-care.ttl");
    let fair_path = data_dir.path().join("scores").join("record-fair.ttl");
    assert_eq!(written, vec![care_path.clone(), fair_path.clone()]);

    let care = fs::read_to_string(care_path).expect("care artifact exists");
    let care_graph = parse(&care, RdfFormat::Turtle).expect("care artifact parses");
    assert!(care_graph
        .iter()
        .any(|t| t.p.as_iri() == Some(scores::CARE_E_SCORE)));

    // the governance framework came from the context directory: the sibling
    // scan finds it, so E1 reaches 3 (and gates the E2 bonus)
    let e_values: Vec<i64> = care_graph
        .iter()
        .filter(|t| t.p.as_iri() == Some(scores::CARE_E_SCORE))
        .filter_map(|t| t.o.integer_value())
        .collect();
    assert_eq!(e_values, [4]);

    let fair = fs::read_to_string(fair_path).expect("fair artifact exists");
    let fair_graph = parse(&fair, RdfFormat::Turtle).expect("fair artifact parses");
    assert!(fair_graph
        .iter()
        .any(|t| t.p.as_iri() == Some(scores::FAIR_F_SCORE_NORMALISED)));
}

#[test]
fn skip_flags_suppress_artifacts() {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let context_dir = tempfile::tempdir().expect("tempdir");
    fs::write(data_dir.path().join("record.ttl"), RECORD).expect("write record");

    let written = process_directory(
        data_dir.path(),
        context_dir.path(),
        &FixedFetcher::empty(),
        &ProfileValidator,
        &DirectoryOptions {
            skip_care: true,
            ..DirectoryOptions::default()
        },
    )
    .expect("directory run succeeds");

    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("scores/record-fair.ttl"));
    assert!(!data_dir
        .path()
        .join("scores")
        .join("record-care.ttl")
        .exists());
}

#[test]
fn validation_failures_abort_the_run() {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let context_dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        data_dir.path().join("bad.ttl"),
        "@prefix dcat: <http://www.w3.org/ns/dcat#> .\n<https://example.com/bad> a dcat:Dataset .\n",
    )
    .expect("write record");

    let result = process_directory(
        data_dir.path(),
        context_dir.path(),
        &FixedFetcher::empty(),
        &ProfileValidator,
        &DirectoryOptions {
            validate: true,
            ..DirectoryOptions::default()
        },
    );
    assert!(result.is_err());
}
