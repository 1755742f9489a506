//! CARE scoring: Collective benefit, Authority to control, Responsibility,
//! Ethics.
//!
//! Unlike FAIR, every CARE dimension is a chain of three sub-scores where
//! the second and third are gated on the value of the one before, and the
//! Responsibility chain additionally reads the completed Collective-benefit
//! and Authority chains. Dependency values always arrive as parameters;
//! [`CareSubScores::compute`] evaluates the twelve sub-scores exactly once,
//! in dependency order, and is the only place that wires them together.
//!
//! Two criteria are not measurable from catalogue metadata and are kept as
//! explicit stubs scoring 0 (the third Collective-benefit check and the
//! whole of R2); their documented maxima stay in the rubric table so
//! normalisation divisors are stable.

use tracing::debug;

use crate::fetch::{rdf_accept_header, Fetch};
use crate::graph::{MetaGraph, Term};
use crate::measures::{licensing_score, provenance_score, searchable_score};
use crate::observation::{observation, observation_group};
use scores_vocab::namespaces::{dar, dcat, dcterms, prov, rdfs, scores};
use scores_vocab::reference::{
    CONTROL_ROLE_CODES, INDIVIDUAL_ROLE_CODES, ORGANISATION_ROLE_CODES,
};

/// Objects of the resource's `prov:qualifiedAttribution` statements.
fn attribution_nodes<'a>(metadata: &'a MetaGraph, resource: &'a Term) -> Vec<&'a Term> {
    metadata
        .objects(resource, prov::QUALIFIED_ATTRIBUTION)
        .collect()
}

/// Role IRIs attached to the resource's attributions via `dcat:hadRole` or
/// `prov:hadRole`.
fn attribution_roles<'a>(metadata: &'a MetaGraph, resource: &'a Term) -> Vec<&'a str> {
    let mut roles = Vec::new();
    for attribution in attribution_nodes(metadata, resource) {
        for property in [dcat::HAD_ROLE, prov::HAD_ROLE] {
            roles.extend(
                metadata
                    .objects(attribution, property)
                    .filter_map(Term::as_iri),
            );
        }
    }
    roles
}

/// Whether any attributed role is in the given code list.
fn has_role_in(metadata: &MetaGraph, resource: &Term, codes: &[&str]) -> bool {
    attribution_roles(metadata, resource)
        .iter()
        .any(|role| codes.contains(role))
}

/// Whether a sibling record in a containing catalogue describes a
/// governance framework: its label, title or description mentions both
/// "governance" and "indigenous", case-insensitive.
fn governance_framework_nearby(metadata: &MetaGraph, resource: &Term) -> bool {
    for catalogue in metadata.objects(resource, dcterms::IS_PART_OF) {
        for member in metadata.objects(catalogue, dcterms::HAS_PART) {
            if member == resource {
                continue;
            }
            for property in [rdfs::LABEL, dcterms::TITLE, dcterms::DESCRIPTION] {
                for text in metadata.objects(member, property) {
                    let lowered = text.text().to_lowercase();
                    if lowered.contains("governance") && lowered.contains("indigenous") {
                        return true;
                    }
                }
            }
        }
    }
    false
}

// --- Collective benefit -------------------------------------------------

/// C1 — inclusive development and innovation, max 3: the record is
/// discoverable (its URI answers a request for RDF), searchable, and the
/// data is accessible (access rights exist, restrictions may apply).
pub fn c1_score(metadata: &MetaGraph, resource: &Term, fetch: &dyn Fetch) -> i64 {
    let mut value = 0;
    if fetch.is_reachable(resource.text(), Some(&rdf_accept_header())) {
        value += 1;
    }
    value += searchable_score(metadata);
    if metadata.has(resource, dcterms::ACCESS_RIGHTS) {
        value += 1;
    }
    value
}

/// C2 — improved governance and citizen engagement, max 3: a full C1
/// (passed in, never recomputed), plus documented use through a title and
/// a description.
#[must_use]
pub fn c2_score(metadata: &MetaGraph, resource: &Term, c1: i64) -> i64 {
    let mut value = 0;
    if c1 > 2 {
        value += 1;
    }
    if metadata.has(resource, dcterms::TITLE) {
        value += 1;
    }
    if metadata.has(resource, dcterms::DESCRIPTION) {
        value += 1;
    }
    value
}

/// C3 — equitable outcomes, documented max 3: a full C2 (passed in), plus
/// documented attribution. The third criterion, equitable outcomes being
/// discoverable from the data, is not measurable from catalogue metadata
/// and scores 0.
#[must_use]
pub fn c3_score(metadata: &MetaGraph, resource: &Term, c2: i64) -> i64 {
    let mut value = 0;
    if c2 > 2 {
        value += 1;
    }
    if metadata.has(resource, prov::QUALIFIED_ATTRIBUTION) {
        value += 1;
    }
    value
}

// --- Authority to control -----------------------------------------------

/// A1.1 — a rights notice is attached to the record, max 1.
#[must_use]
pub fn a11_notices(metadata: &MetaGraph, resource: &Term) -> i64 {
    if metadata.has(resource, dcterms::RIGHTS) {
        1
    } else {
        0
    }
}

/// A1.2 — licence and access-rights declarations, max 2.
#[must_use]
pub fn a12_licence_rights(metadata: &MetaGraph, resource: &Term) -> i64 {
    let mut value = 0;
    if metadata.has(resource, dcterms::LICENSE) {
        value += 1;
    }
    if metadata.has(resource, dcterms::ACCESS_RIGHTS) {
        value += 1;
    }
    value
}

/// A1 — recognition of rights and interests, max 3.
#[must_use]
pub fn a1_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    a11_notices(metadata, resource) + a12_licence_rights(metadata, resource)
}

/// A2 — data for governance, max 3: any A1 signal (passed in), plus
/// attributions whose roles fall in the organisational and individual
/// indigeneity code lists.
#[must_use]
pub fn a2_score(metadata: &MetaGraph, resource: &Term, a1: i64) -> i64 {
    let mut value = 0;
    if a1 > 0 {
        value += 1;
    }
    if has_role_in(metadata, resource, &ORGANISATION_ROLE_CODES) {
        value += 1;
    }
    if has_role_in(metadata, resource, &INDIVIDUAL_ROLE_CODES) {
        value += 1;
    }
    value
}

/// A3.2 — the declared access rights come from the controlled
/// access-rights vocabulary.
#[must_use]
pub fn a32_score(metadata: &MetaGraph, resource: &Term) -> bool {
    metadata
        .objects(resource, dcterms::ACCESS_RIGHTS)
        .any(|o| o.as_iri().is_some_and(|iri| iri.starts_with(dar::NS)))
}

/// A3 — governance of data, max 3: a substantial A2 (passed in), access
/// rights from the controlled vocabulary, and a custodian or owner role
/// among the attributions.
#[must_use]
pub fn a3_score(metadata: &MetaGraph, resource: &Term, a2: i64) -> i64 {
    let mut value = 0;
    if a2 > 1 {
        value += 1;
    }
    if a32_score(metadata, resource) {
        value += 1;
    }
    if has_role_in(metadata, resource, &CONTROL_ROLE_CODES) {
        value += 1;
    }
    value
}

// --- Responsibility -----------------------------------------------------

/// R1 — positive relationships, max 3: a licence, declared provenance, and
/// an attribution naming an agent.
#[must_use]
pub fn r1_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    let mut value = 0;
    if licensing_score(metadata, resource) > 0 {
        value += 1;
    }
    if provenance_score(metadata) > 0 {
        value += 1;
    }
    let attributed_agent = attribution_nodes(metadata, resource)
        .into_iter()
        .any(|attribution| metadata.has(attribution, prov::AGENT));
    if attributed_agent {
        value += 1;
    }
    value
}

/// R2 — expanding capability and capacity, documented max 3. Relationship
/// building cannot be measured from catalogue metadata; scores 0.
#[must_use]
pub fn r2_score() -> i64 {
    0
}

/// R3 — indigenous languages and worldviews, max 6: awarded when the
/// completed Collective-benefit chain and the completed Authority chain
/// each clear their threshold. Both totals are passed in from values
/// computed earlier in the pass.
#[must_use]
pub fn r3_score(collective_total: i64, authority_total: i64) -> i64 {
    let mut value = 0;
    if collective_total > 6 {
        value += 3;
    }
    if authority_total > 6 {
        value += 3;
    }
    value
}

// --- Ethics -------------------------------------------------------------

/// E1 — minimising harm, maximising benefit, max 3: the record carries a
/// label and a description (possibly inherited from its catalogue), and a
/// governance framework is discoverable among its catalogue siblings.
#[must_use]
pub fn e1_score(metadata: &MetaGraph, resource: &Term) -> i64 {
    let mut value = 0;
    if metadata.has(resource, rdfs::LABEL) || metadata.has(resource, dcterms::TITLE) {
        value += 1;
    }
    if metadata.has(resource, dcterms::DESCRIPTION) {
        value += 1;
    }
    if governance_framework_nearby(metadata, resource) {
        value += 1;
    }
    value
}

/// E2 — justice, max 3: a full E1 (passed in), declared provenance, and an
/// attribution qualified with a role.
#[must_use]
pub fn e2_score(metadata: &MetaGraph, resource: &Term, e1: i64) -> i64 {
    let mut value = 0;
    if e1 > 2 {
        value += 1;
    }
    if provenance_score(metadata) > 0 {
        value += 1;
    }
    if !attribution_roles(metadata, resource).is_empty() {
        value += 1;
    }
    value
}

/// E3 — future use, max 3: a full E2 (passed in), an indigeneity role among
/// the attributions, and declared access rights or a licence.
#[must_use]
pub fn e3_score(metadata: &MetaGraph, resource: &Term, e2: i64) -> i64 {
    let mut value = 0;
    if e2 > 2 {
        value += 1;
    }
    if has_role_in(metadata, resource, &ORGANISATION_ROLE_CODES)
        || has_role_in(metadata, resource, &INDIVIDUAL_ROLE_CODES)
    {
        value += 1;
    }
    if metadata.has(resource, dcterms::ACCESS_RIGHTS) || metadata.has(resource, dcterms::LICENSE)
    {
        value += 1;
    }
    value
}

// --- Composition --------------------------------------------------------

/// The twelve CARE sub-scores for one resource, computed once per scoring
/// pass in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareSubScores {
    /// Collective benefit 1: discoverable, searchable, accessible.
    pub c1: i64,
    /// Collective benefit 2: governance and engagement.
    pub c2: i64,
    /// Collective benefit 3: equitable outcomes.
    pub c3: i64,
    /// Authority 1: rights and interests.
    pub a1: i64,
    /// Authority 2: data for governance.
    pub a2: i64,
    /// Authority 3: governance of data.
    pub a3: i64,
    /// Responsibility 1: positive relationships.
    pub r1: i64,
    /// Responsibility 2: capability and capacity.
    pub r2: i64,
    /// Responsibility 3: languages and worldviews.
    pub r3: i64,
    /// Ethics 1: minimising harm.
    pub e1: i64,
    /// Ethics 2: justice.
    pub e2: i64,
    /// Ethics 3: future use.
    pub e3: i64,
}

impl CareSubScores {
    /// Computes all twelve sub-scores. The chains run first, and R3 reads
    /// the held chain values rather than recomputing them.
    pub fn compute(metadata: &MetaGraph, resource: &Term, fetch: &dyn Fetch) -> Self {
        let c1 = c1_score(metadata, resource, fetch);
        let c2 = c2_score(metadata, resource, c1);
        let c3 = c3_score(metadata, resource, c2);

        let a1 = a1_score(metadata, resource);
        let a2 = a2_score(metadata, resource, a1);
        let a3 = a3_score(metadata, resource, a2);

        let e1 = e1_score(metadata, resource);
        let e2 = e2_score(metadata, resource, e1);
        let e3 = e3_score(metadata, resource, e2);

        let r1 = r1_score(metadata, resource);
        let r2 = r2_score();
        let r3 = r3_score(c1 + c2 + c3, a1 + a2 + a3);

        let sub = CareSubScores {
            c1,
            c2,
            c3,
            a1,
            a2,
            a3,
            r1,
            r2,
            r3,
            e1,
            e2,
            e3,
        };
        debug!(
            resource = %resource,
            c = sub.c(),
            a = sub.a(),
            r = sub.r(),
            e = sub.e(),
            "CARE sub-scores"
        );
        sub
    }

    /// Collective-benefit dimension total, max 9.
    #[must_use]
    pub fn c(&self) -> i64 {
        self.c1 + self.c2 + self.c3
    }

    /// Authority-to-control dimension total, max 9.
    #[must_use]
    pub fn a(&self) -> i64 {
        self.a1 + self.a2 + self.a3
    }

    /// Responsibility dimension total, documented max 12.
    #[must_use]
    pub fn r(&self) -> i64 {
        self.r1 + self.r2 + self.r3
    }

    /// Ethics dimension total, max 9.
    #[must_use]
    pub fn e(&self) -> i64 {
        self.e1 + self.e2 + self.e3
    }

    /// The resource-level total.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.c() + self.a() + self.r() + self.e()
    }
}

/// Scores one resource, returning the fragment holding its CARE Score
/// container, the four dimension observations, and the resource-level
/// total observation.
pub fn score_resource(metadata: &MetaGraph, resource: &Term, fetch: &dyn Fetch) -> MetaGraph {
    let sub = CareSubScores::compute(metadata, resource, fetch);

    let container = observation_group(resource, scores::CARE_SCORE, None);
    let mut g = container.graph;
    g.absorb(observation(&container.node, scores::CARE_C_SCORE, Term::integer(sub.c())));
    g.absorb(observation(&container.node, scores::CARE_A_SCORE, Term::integer(sub.a())));
    g.absorb(observation(&container.node, scores::CARE_R_SCORE, Term::integer(sub.r())));
    g.absorb(observation(&container.node, scores::CARE_E_SCORE, Term::integer(sub.e())));
    g.absorb(observation(
        &container.node,
        scores::CARE_SCORE_VALUE,
        Term::integer(sub.total()),
    ));
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FixedFetcher;
    use scores_vocab::namespaces::roles;

    fn resource() -> Term {
        Term::iri("https://example.com/dataset")
    }

    #[test]
    fn c2_gate_uses_the_passed_value_only() {
        let mut g = MetaGraph::new();
        g.insert(resource(), dcterms::TITLE, Term::string_literal("T"));
        g.insert(resource(), dcterms::DESCRIPTION, Term::string_literal("D"));
        // same graph, different upstream values: only the parameter decides
        assert_eq!(c2_score(&g, &resource(), 3), 3);
        assert_eq!(c2_score(&g, &resource(), 2), 2);
    }

    #[test]
    fn r3_reads_chain_totals() {
        assert_eq!(r3_score(8, 9), 6);
        assert_eq!(r3_score(8, 6), 3);
        assert_eq!(r3_score(6, 6), 0);
    }

    #[test]
    fn roles_drive_a2() {
        let mut g = MetaGraph::new();
        let attribution = Term::bnode("attr");
        g.insert(resource(), prov::QUALIFIED_ATTRIBUTION, attribution.clone());
        g.insert(attribution, dcat::HAD_ROLE, Term::iri(roles::OWNER));
        // no a1 signal: only the organisational role scores
        assert_eq!(a2_score(&g, &resource(), 0), 1);
        assert_eq!(a2_score(&g, &resource(), 3), 2);
    }

    #[test]
    fn governance_framework_detection_is_case_insensitive() {
        let mut g = MetaGraph::new();
        let catalogue = Term::iri("https://example.com/catalogue");
        let framework = Term::iri("https://example.com/framework");
        g.insert(resource(), dcterms::IS_PART_OF, catalogue.clone());
        g.insert(catalogue, dcterms::HAS_PART, framework.clone());
        g.insert(
            framework,
            rdfs::LABEL,
            Term::string_literal("Indigenous Data GOVERNANCE Framework"),
        );
        assert_eq!(e1_score(&g, &resource()), 1);
    }

    #[test]
    fn unreachable_resource_scores_zero_discoverability() {
        let g = MetaGraph::new();
        assert_eq!(c1_score(&g, &resource(), &FixedFetcher::empty()), 0);
    }
}
