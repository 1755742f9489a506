//! Normalisation of raw dimension scores to `[0, 1]`.
//!
//! For every Score container of the requested class, each raw dimension
//! value is read from that container's own observations, divided by the
//! dimension's documented maximum, formatted to two decimal places, and
//! emitted into a parallel Normalised-Score container back-referencing the
//! same resource. Raw and normalised values live under distinct measure
//! properties, so normalising the output of a previous normalisation pass
//! finds nothing to do.

use crate::error::ScoreError;
use crate::graph::{MetaGraph, Term};
use crate::observation::{observation, observation_group};
use scores_vocab::namespaces::{qb, scores};
use scores_vocab::rubric::{Dimension, CARE_DIMENSIONS, FAIR_DIMENSIONS};

/// What to do when a Score container lacks an observation for an expected
/// dimension. The composers always emit every dimension, so this only
/// triggers on containers produced elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDimension {
    /// Abort with [`ScoreError::MissingDimension`].
    #[default]
    Error,
    /// Leave the container un-normalised and continue.
    Skip,
}

/// Normalises every FAIR Score in the graph.
///
/// # Errors
///
/// Returns [`ScoreError::MissingDimension`] under the [`MissingDimension::Error`]
/// policy when a container lacks a dimension observation, and
/// [`ScoreError::InvalidScoreValue`] when an observation value is not an
/// integer.
pub fn normalise_fair(
    score_graph: &MetaGraph,
    policy: MissingDimension,
) -> Result<MetaGraph, ScoreError> {
    normalise(
        score_graph,
        scores::FAIR_SCORE,
        scores::FAIR_SCORE_NORMALISED,
        &FAIR_DIMENSIONS,
        policy,
    )
}

/// Normalises every CARE Score in the graph.
///
/// # Errors
///
/// As [`normalise_fair`].
pub fn normalise_care(
    score_graph: &MetaGraph,
    policy: MissingDimension,
) -> Result<MetaGraph, ScoreError> {
    normalise(
        score_graph,
        scores::CARE_SCORE,
        scores::CARE_SCORE_NORMALISED,
        &CARE_DIMENSIONS,
        policy,
    )
}

/// Reads the raw value for one dimension out of a Score container.
fn raw_dimension_value(
    score_graph: &MetaGraph,
    container: &Term,
    dimension: &Dimension,
) -> Result<Option<i64>, ScoreError> {
    for obs in score_graph.objects(container, qb::OBSERVATION_PROP) {
        if let Some(value) = score_graph.value(obs, dimension.measure) {
            return match value.integer_value() {
                Some(raw) => Ok(Some(raw)),
                None => Err(ScoreError::InvalidScoreValue {
                    measure: dimension.measure.to_owned(),
                    value: value.text().to_owned(),
                }),
            };
        }
    }
    Ok(None)
}

fn normalise(
    score_graph: &MetaGraph,
    score_class: &str,
    normalised_class: &str,
    dimensions: &[Dimension],
    policy: MissingDimension,
) -> Result<MetaGraph, ScoreError> {
    let mut out = MetaGraph::new();

    'containers: for container in score_graph.subjects_of_type(score_class) {
        let Some(resource) = score_graph.value(container, scores::REF_RESOURCE) else {
            continue;
        };

        let mut raw_values = Vec::with_capacity(dimensions.len());
        for dimension in dimensions {
            match raw_dimension_value(score_graph, container, dimension)? {
                Some(raw) => raw_values.push(raw),
                None => match policy {
                    MissingDimension::Error => {
                        return Err(ScoreError::MissingDimension {
                            container: container.to_string(),
                            measure: dimension.measure.to_owned(),
                        })
                    }
                    MissingDimension::Skip => continue 'containers,
                },
            }
        }

        let group = observation_group(resource, normalised_class, None);
        out.extend_from(&group.graph);
        for (dimension, raw) in dimensions.iter().zip(raw_values) {
            let normalised = format!("{:.2}", raw as f64 / dimension.maximum as f64);
            out.absorb(observation(
                &group.node,
                dimension.normalised_measure,
                Term::string_literal(normalised),
            ));
        }
    }

    Ok(out)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::fair::{score_resource, FairOptions};
    use crate::fetch::FixedFetcher;

    fn resource() -> Term {
        Term::iri("https://example.com/dataset")
    }

    #[test]
    fn normalised_values_divide_by_documented_maxima() {
        let mut metadata = MetaGraph::new();
        metadata.insert(
            resource(),
            scores_vocab::namespaces::dcterms::LICENSE,
            Term::iri("https://purl.org/license/cc-by"),
        );
        let scored = score_resource(
            &metadata,
            &resource(),
            &FixedFetcher::empty(),
            &FairOptions::default(),
        );

        let normalised = normalise_fair(&scored, MissingDimension::Error)
            .unwrap_or_else(|e| panic!("normalisation failed: {e}"));

        // F = 3+1+1 = 5 -> 5/17; R = licence only = 2 -> 2/7
        let f_values: Vec<_> = normalised
            .iter()
            .filter(|t| t.p.as_iri() == Some(scores::FAIR_F_SCORE_NORMALISED))
            .map(|t| t.o.text().to_owned())
            .collect();
        assert_eq!(f_values, ["0.29"]);
        let r_values: Vec<_> = normalised
            .iter()
            .filter(|t| t.p.as_iri() == Some(scores::FAIR_R_SCORE_NORMALISED))
            .map(|t| t.o.text().to_owned())
            .collect();
        assert_eq!(r_values, ["0.29"]);
    }

    #[test]
    fn normalising_normalised_output_is_a_no_op() {
        let metadata = MetaGraph::new();
        let scored = score_resource(
            &metadata,
            &resource(),
            &FixedFetcher::empty(),
            &FairOptions::default(),
        );
        let normalised = normalise_fair(&scored, MissingDimension::Error)
            .unwrap_or_else(|e| panic!("normalisation failed: {e}"));
        let again = normalise_fair(&normalised, MissingDimension::Error)
            .unwrap_or_else(|e| panic!("re-normalisation failed: {e}"));
        assert!(again.is_empty());
    }

    #[test]
    fn missing_dimension_policy() {
        // a hand-built container with no observations at all
        let mut g = MetaGraph::new();
        let container = Term::bnode("incomplete");
        g.insert(
            container.clone(),
            scores_vocab::namespaces::rdf::TYPE,
            Term::iri(scores::FAIR_SCORE),
        );
        g.insert(container, scores::REF_RESOURCE, resource());

        assert!(normalise_fair(&g, MissingDimension::Error).is_err());
        let skipped = normalise_fair(&g, MissingDimension::Skip)
            .unwrap_or_else(|e| panic!("skip policy failed: {e}"));
        assert!(skipped.is_empty());
    }
}
