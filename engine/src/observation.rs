//! Construction of Score containers and their Observations.
//!
//! A Score is a `qb:ObservationGroup` holding one `qb:Observation` per
//! measured dimension, with a back-reference to the scored resource and an
//! optional validity interval. Construction is pure: these functions mint
//! fresh blank nodes into new fragments and never read the source graph.

use crate::graph::{MetaGraph, Term};
use scores_vocab::namespaces::{dcat, qb, rdf, scores, time, xsd};

/// The time interval a score was valid for, as `xsd:date` lexical values.
#[derive(Debug, Clone, Default)]
pub struct ValidityInterval {
    /// Date the score became relevant.
    pub beginning: Option<String>,
    /// Date the score stopped being relevant.
    pub end: Option<String>,
}

/// A freshly minted Score container and the fragment describing it.
#[derive(Debug, Clone)]
pub struct ScoreContainer {
    /// The container node, to hang observations off.
    pub node: Term,
    /// The fragment holding the container's own triples.
    pub graph: MetaGraph,
}

/// Mints a Score container for a resource.
///
/// The fragment types the resource as a catalogued resource, links it to
/// the new container via `scores:hasScore`, types the container with the
/// given score class and `qb:ObservationGroup`, and back-references the
/// resource. When an interval with a beginning or end is given, it is
/// attached as a `time:ProperInterval` via `scores:refTime`.
#[must_use]
pub fn observation_group(
    resource: &Term,
    score_class: &str,
    interval: Option<&ValidityInterval>,
) -> ScoreContainer {
    let mut g = MetaGraph::new();

    g.insert(resource.clone(), rdf::TYPE, Term::iri(dcat::RESOURCE));
    let score = Term::mint_bnode();
    g.insert(resource.clone(), scores::HAS_SCORE, score.clone());
    g.insert(score.clone(), rdf::TYPE, Term::iri(score_class));
    g.insert(score.clone(), rdf::TYPE, Term::iri(qb::OBSERVATION_GROUP));
    g.insert(score.clone(), scores::REF_RESOURCE, resource.clone());

    if let Some(interval) = interval {
        if interval.beginning.is_some() || interval.end.is_some() {
            let t = Term::mint_bnode();
            g.insert(t.clone(), rdf::TYPE, Term::iri(time::PROPER_INTERVAL));
            g.insert(score.clone(), scores::REF_TIME, t.clone());

            if let Some(beginning) = &interval.beginning {
                let b = Term::mint_bnode();
                g.insert(b.clone(), rdf::TYPE, Term::iri(time::INSTANT));
                g.insert(
                    b.clone(),
                    time::IN_XSD_DATE,
                    Term::typed_literal(beginning, xsd::DATE),
                );
                g.insert(t.clone(), time::HAS_BEGINNING, b);
            }
            if let Some(end) = &interval.end {
                let e = Term::mint_bnode();
                g.insert(e.clone(), rdf::TYPE, Term::iri(time::INSTANT));
                g.insert(e.clone(), time::IN_XSD_DATE, Term::typed_literal(end, xsd::DATE));
                g.insert(t.clone(), time::HAS_END, e);
            }
        }
    }

    ScoreContainer { node: score, graph: g }
}

/// Mints one Observation carrying a measured value and links it into the
/// given Score container.
#[must_use]
pub fn observation(score_container: &Term, measure: &str, value: Term) -> MetaGraph {
    let mut g = MetaGraph::new();
    let obs = Term::mint_bnode();
    g.insert(obs.clone(), rdf::TYPE, Term::iri(qb::OBSERVATION));
    g.insert(score_container.clone(), qb::OBSERVATION_PROP, obs.clone());
    g.insert(obs, measure, value);
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> Term {
        Term::iri("https://example.com/dataset")
    }

    #[test]
    fn group_links_resource_both_ways() {
        let container = observation_group(&resource(), scores::FAIR_SCORE, None);
        let g = &container.graph;
        assert!(g.contains(&resource(), scores::HAS_SCORE, &container.node));
        assert!(g.contains(&container.node, scores::REF_RESOURCE, &resource()));
        assert!(g.contains(&container.node, rdf::TYPE, &Term::iri(scores::FAIR_SCORE)));
        assert!(g.contains(&container.node, rdf::TYPE, &Term::iri(qb::OBSERVATION_GROUP)));
    }

    #[test]
    fn interval_is_attached_when_given() {
        let interval = ValidityInterval {
            beginning: Some("2023-01-01".to_owned()),
            end: None,
        };
        let container = observation_group(&resource(), scores::FAIR_SCORE, Some(&interval));
        let g = &container.graph;
        let t = g
            .value(&container.node, scores::REF_TIME)
            .cloned()
            .unwrap_or_else(|| Term::bnode("missing"));
        assert!(g.contains(&t, rdf::TYPE, &Term::iri(time::PROPER_INTERVAL)));
        assert!(g.has(&t, time::HAS_BEGINNING));
        assert!(!g.has(&t, time::HAS_END));
    }

    #[test]
    fn observation_carries_measure_and_link() {
        let container = observation_group(&resource(), scores::FAIR_SCORE, None);
        let obs = observation(&container.node, scores::FAIR_F_SCORE, Term::integer(14));
        let minted: Vec<_> = obs.objects(&container.node, qb::OBSERVATION_PROP).collect();
        assert_eq!(minted.len(), 1);
        assert_eq!(obs.value(minted[0], scores::FAIR_F_SCORE), Some(&Term::integer(14)));
    }

    #[test]
    fn reruns_mint_fresh_containers() {
        let first = observation_group(&resource(), scores::FAIR_SCORE, None);
        let second = observation_group(&resource(), scores::FAIR_SCORE, None);
        assert_ne!(first.node, second.node);
    }
}
