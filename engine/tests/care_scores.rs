//! End-to-end CARE scoring over the bundled fixture, exercising the full
//! sub-score chains after forward chaining.

use scores_engine::care::{
    a11_notices, a12_licence_rights, a1_score, a2_score, a32_score, a3_score, c1_score, c2_score,
    c3_score, e1_score, e2_score, e3_score, r1_score, r2_score, CareSubScores,
};
use scores_engine::fetch::FixedFetcher;
use scores_engine::graph::{MetaGraph, Term};
use scores_engine::inference::{expand, Rules};
use scores_engine::io::{parse, RdfFormat};
use scores_engine::pipeline::{run_care, RunOptions, RunOutcome, ScoreInput, ScoreOutput};
use scores_engine::validation::ProfileValidator;
use scores_vocab::namespaces::scores;

const CARE_TEST_DATA: &str = include_str!("data/care_test_data.ttl");

const RESOURCE: &str = "https://data.idnau.org/pid/AAC-SA";

fn resource() -> Term {
    Term::iri(RESOURCE)
}

fn fetcher() -> FixedFetcher {
    FixedFetcher::reachable([RESOURCE])
}

fn care_graph() -> MetaGraph {
    let mut g = parse(CARE_TEST_DATA, RdfFormat::Turtle).expect("fixture parses");
    expand(&mut g, &Rules::care());
    g
}

#[test]
fn collective_benefit_chain() {
    let g = care_graph();
    let c1 = c1_score(&g, &resource(), &fetcher());
    assert_eq!(c1, 3);
    assert_eq!(c2_score(&g, &resource(), c1), 3);
    // the equitable-outcomes criterion is pending business rules; two of
    // its three points are implemented
    assert_eq!(c3_score(&g, &resource(), 3), 2);
}

#[test]
fn authority_chain() {
    let g = care_graph();
    assert_eq!(a11_notices(&g, &resource()), 1);
    assert_eq!(a12_licence_rights(&g, &resource()), 2);
    assert_eq!(a1_score(&g, &resource()), 3);
    assert_eq!(a2_score(&g, &resource(), 1), 3);
    assert!(a32_score(&g, &resource()));
    assert_eq!(a3_score(&g, &resource(), 2), 3);
}

#[test]
fn responsibility_chain() {
    let g = care_graph();
    assert_eq!(r1_score(&g, &resource()), 3);
    assert_eq!(r2_score(), 0);
    // r3 is exercised through the composed pass below
}

#[test]
fn ethics_chain() {
    let g = care_graph();
    let e1 = e1_score(&g, &resource());
    assert_eq!(e1, 3);
    let e2 = e2_score(&g, &resource(), e1);
    assert_eq!(e2, 3);
    assert_eq!(e3_score(&g, &resource(), e2), 3);
}

#[test]
fn composed_pass_holds_every_sub_score() {
    let g = care_graph();
    let sub = CareSubScores::compute(&g, &resource(), &fetcher());
    assert_eq!((sub.c1, sub.c2, sub.c3), (3, 3, 2));
    assert_eq!((sub.a1, sub.a2, sub.a3), (3, 3, 3));
    assert_eq!((sub.r1, sub.r2, sub.r3), (3, 0, 6));
    assert_eq!((sub.e1, sub.e2, sub.e3), (3, 3, 3));
    assert_eq!(sub.c(), 8);
    assert_eq!(sub.a(), 9);
    assert_eq!(sub.r(), 9);
    assert_eq!(sub.e(), 9);
}

#[test]
fn discoverability_degrades_without_the_network() {
    let g = care_graph();
    let sub = CareSubScores::compute(&g, &resource(), &FixedFetcher::empty());
    // only the discoverability point is lost
    assert_eq!(sub.c1, 2);
}

#[test]
fn full_run_emits_dimension_and_normalised_observations() {
    let g = parse(CARE_TEST_DATA, RdfFormat::Turtle).expect("fixture parses");
    let outcome = run_care(
        ScoreInput::Graph(g),
        &ScoreOutput::Graph,
        &RunOptions::default(),
        &fetcher(),
        &ProfileValidator,
    )
    .expect("scoring succeeds");

    let RunOutcome::Graph(result) = outcome else {
        panic!("expected a result graph");
    };

    let values = |measure: &str| -> Vec<i64> {
        result
            .iter()
            .filter(|t| t.p.as_iri() == Some(measure))
            .filter_map(|t| t.o.integer_value())
            .collect()
    };
    assert_eq!(values(scores::CARE_C_SCORE), [8]);
    assert_eq!(values(scores::CARE_A_SCORE), [9]);
    assert_eq!(values(scores::CARE_R_SCORE), [9]);
    assert_eq!(values(scores::CARE_E_SCORE), [9]);
    assert_eq!(values(scores::CARE_SCORE_VALUE), [35]);

    let normalised: Vec<String> = result
        .iter()
        .filter(|t| t.p.as_iri() == Some(scores::CARE_R_SCORE_NORMALISED))
        .map(|t| t.o.text().to_owned())
        .collect();
    assert_eq!(normalised, ["0.75"]);
}

#[test]
fn sibling_scan_needs_the_inferred_membership_links() {
    // without forward chaining the catalogue has no hasPart links, so the
    // governance framework is invisible
    let g = parse(CARE_TEST_DATA, RdfFormat::Turtle).expect("fixture parses");
    assert_eq!(e1_score(&g, &resource()), 2);
}
