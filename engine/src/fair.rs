//! FAIR scoring: Findable, Accessible, Interoperable, Reusable.
//!
//! Rule interpretations follow the ARDC FAIR data self-assessment tool,
//! with point awards doubled where that tool doubles them. Each dimension
//! function documents its maximum; the normaliser divides by these.

use tracing::debug;

use crate::fetch::{rdf_accept_header, Fetch};
use crate::graph::{MetaGraph, Term};
use crate::measures::{
    data_source_score, licensing_score, machine_readability_score, provenance_score,
    shared_vocabs_score,
};
use crate::observation::{observation, observation_group};
use scores_vocab::namespaces::{dcat, dcterms, prov, scores};
use scores_vocab::reference::{ACCESS_RIGHTS_POINTS, PID_INDICATORS};

/// How multiple declared access-rights themes combine into the A score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessAggregation {
    /// Sum the point awards of every declared theme. A record declaring
    /// several themes can exceed the single-declaration maximum of 10.
    #[default]
    Sum,
    /// Take the highest single award, capping the score at 10.
    Max,
}

/// Options for a FAIR scoring pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FairOptions {
    /// Aggregation of multiple access-rights themes.
    pub access_aggregation: AccessAggregation,
}

/// Findability, max 17.
///
/// Points: 3 for carrying a URI identifier at all; 5 more when the URI
/// matches a persistent-identifier scheme; 1 for the identifier being part
/// of the metadata record; 1 for the title/description baseline; 1–3 tiered
/// on how many of `dcterms:created`, `dcterms:modified`, `dcterms:type` and
/// `prov:qualifiedAttribution` are present; 2 for a declared containing
/// catalogue and 2 more when that catalogue answers a request for RDF.
pub fn findability_score(metadata: &MetaGraph, resource: &Term, fetch: &dyn Fetch) -> i64 {
    // catalogued resources always carry a dereferenceable URI
    let mut value = 3;

    if let Some(iri) = resource.as_iri() {
        for indicator in PID_INDICATORS {
            if iri.contains(indicator) {
                value += 5;
                break;
            }
        }
    }

    // the identifier is the subject of the record itself
    value += 1;

    // a catalogued record always has at least a brief title and description
    value += 1;

    let richness = metadata
        .predicates_of(resource)
        .filter(|p| {
            *p == dcterms::CREATED
                || *p == dcterms::MODIFIED
                || *p == dcterms::TYPE
                || *p == prov::QUALIFIED_ATTRIBUTION
        })
        .count();
    value += match richness {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => 3,
    };

    if let Some(catalogue) = metadata.value(resource, dcterms::IS_PART_OF) {
        value += 2;
        if fetch.is_reachable(catalogue.text(), Some(&rdf_accept_header())) {
            value += 2;
        }
    }

    value
}

/// Accessibility, max 10 for a single declaration.
///
/// Scored from the access-rights themes attached via `dcat:theme`:
/// protected and restricted award 0, metadata-only 2, conditional 4,
/// embargoed 6, open 10.
pub fn accessibility_score(
    metadata: &MetaGraph,
    resource: &Term,
    aggregation: AccessAggregation,
) -> i64 {
    let mut value = 0;
    for theme in metadata.objects(resource, dcat::THEME) {
        let award = theme
            .as_iri()
            .and_then(|iri| {
                ACCESS_RIGHTS_POINTS
                    .iter()
                    .find(|(term, _)| *term == iri)
                    .map(|(_, points)| *points)
            })
            .unwrap_or(0);
        match aggregation {
            AccessAggregation::Sum => value += award,
            AccessAggregation::Max => value = value.max(award),
        }
    }
    value
}

/// Interoperability, max 8.
///
/// Machine readability of the data (0–2) plus a fixed 2 for the metadata
/// itself being machine readable, plus shared-vocabulary use (0–2), plus a
/// bonus 2 when the data-level subtotal reaches at least 1 (data that is
/// machine readable or vocabulary-aligned should also be parseable).
pub fn interoperability_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    let readability = machine_readability_score(metadata, resource);
    let vocabularies = shared_vocabs_score(metadata, resource);
    let mut value = readability + 2 + vocabularies;
    if readability + vocabularies >= 1 {
        value += 2;
    }
    value
}

/// Reusability, documented max 7.
///
/// Licensing (0/2) plus declared provenance (0/2) plus data-source quality
/// (0–2). The documented maximum carries a point the current provenance
/// rule cannot award; the normaliser divides by 7 regardless.
pub fn reusability_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    licensing_score(metadata, resource)
        + provenance_score(metadata)
        + data_source_score(metadata, resource)
}

/// The four FAIR dimension values for one resource, computed once per
/// scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FairSubScores {
    /// Findability.
    pub f: i64,
    /// Accessibility.
    pub a: i64,
    /// Interoperability.
    pub i: i64,
    /// Reusability.
    pub r: i64,
}

impl FairSubScores {
    /// Computes all four dimensions for a resource.
    pub fn compute(
        metadata: &MetaGraph,
        resource: &Term,
        fetch: &dyn Fetch,
        options: &FairOptions,
    ) -> Self {
        let sub = FairSubScores {
            f: findability_score(metadata, resource, fetch),
            a: accessibility_score(metadata, resource, options.access_aggregation),
            i: interoperability_score(metadata, resource),
            r: reusability_score(metadata, resource),
        };
        debug!(resource = %resource, f = sub.f, a = sub.a, i = sub.i, r = sub.r, "FAIR sub-scores");
        sub
    }

    /// The resource-level total.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.f + self.a + self.i + self.r
    }
}

/// Scores one resource, returning the fragment holding its FAIR Score
/// container, the four dimension observations, and the resource-level
/// total observation.
pub fn score_resource(
    metadata: &MetaGraph,
    resource: &Term,
    fetch: &dyn Fetch,
    options: &FairOptions,
) -> MetaGraph {
    let sub = FairSubScores::compute(metadata, resource, fetch, options);

    let container = observation_group(resource, scores::FAIR_SCORE, None);
    let mut g = container.graph;
    g.absorb(observation(&container.node, scores::FAIR_F_SCORE, Term::integer(sub.f)));
    g.absorb(observation(&container.node, scores::FAIR_A_SCORE, Term::integer(sub.a)));
    g.absorb(observation(&container.node, scores::FAIR_I_SCORE, Term::integer(sub.i)));
    g.absorb(observation(&container.node, scores::FAIR_R_SCORE, Term::integer(sub.r)));
    g.absorb(observation(
        &container.node,
        scores::FAIR_SCORE_VALUE,
        Term::integer(sub.total()),
    ));
    g
}
