//! Structural validation of input graphs against the catalogue profile.
//!
//! Full shape validation is the job of an external validator service; the
//! engine only needs a conforms/report answer before scoring. The
//! [`ShapeValidator`] trait models that collaborator, and
//! [`ProfileValidator`] implements the structural subset of the profile the
//! scoring rules depend on, without a full SHACL engine:
//!
//! - every catalogued resource carries a title and a description;
//! - `dcterms:isPartOf` points at IRIs, not literals;
//! - `dcat:theme` values are IRIs.

use serde::Serialize;

use crate::graph::{MetaGraph, Term};
use scores_vocab::namespaces::{dcat, dcterms};

/// Severity of a single validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check failed; the graph does not conform.
    Failure,
}

/// One validation check outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Short identifier of the check.
    pub check: String,
    /// Human-readable message.
    pub message: String,
    /// Outcome severity.
    pub severity: Severity,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Pass,
        }
    }

    /// Creates a failing result.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Failure,
        }
    }
}

/// Aggregated validation outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationOutcome {
    /// All individual check results.
    pub results: Vec<CheckResult>,
}

impl ValidationOutcome {
    /// True when no check failed.
    #[must_use]
    pub fn conforms(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.severity != Severity::Failure)
    }

    /// The full textual report, one line per result.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let status = match result.severity {
                Severity::Pass => "PASS",
                Severity::Failure => "FAIL",
            };
            out.push_str(&format!("[{}] {}: {}\n", status, result.check, result.message));
        }
        out
    }
}

/// A collaborator that judges whether a graph conforms to the catalogue
/// profile.
pub trait ShapeValidator {
    /// Validates the graph and returns the aggregated outcome.
    fn validate(&self, graph: &MetaGraph) -> ValidationOutcome;
}

/// Structural validator for the catalogue profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileValidator;

impl ShapeValidator for ProfileValidator {
    fn validate(&self, graph: &MetaGraph) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();
        for resource in graph.subjects_of_type(dcat::RESOURCE) {
            check_required_property(graph, resource, dcterms::TITLE, "title", &mut outcome);
            check_required_property(
                graph,
                resource,
                dcterms::DESCRIPTION,
                "description",
                &mut outcome,
            );
            check_iri_objects(graph, resource, dcterms::IS_PART_OF, "isPartOf", &mut outcome);
            check_iri_objects(graph, resource, dcat::THEME, "theme", &mut outcome);
        }
        outcome
    }
}

fn check_required_property(
    graph: &MetaGraph,
    resource: &Term,
    property: &str,
    name: &str,
    outcome: &mut ValidationOutcome,
) {
    if graph.has(resource, property) {
        outcome.results.push(CheckResult::pass(
            format!("profile/{name}"),
            format!("{resource} has a {name}"),
        ));
    } else {
        outcome.results.push(CheckResult::fail(
            format!("profile/{name}"),
            format!("{resource} has no {name}"),
        ));
    }
}

fn check_iri_objects(
    graph: &MetaGraph,
    resource: &Term,
    property: &str,
    name: &str,
    outcome: &mut ValidationOutcome,
) {
    for object in graph.objects(resource, property) {
        if !object.is_iri() {
            outcome.results.push(CheckResult::fail(
                format!("profile/{name}"),
                format!("{resource} has a non-IRI {name} value {object}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scores_vocab::namespaces::rdf;

    #[test]
    fn complete_resources_conform() {
        let mut g = MetaGraph::new();
        let r = Term::iri("https://example.com/dataset");
        g.insert(r.clone(), rdf::TYPE, Term::iri(dcat::RESOURCE));
        g.insert(r.clone(), dcterms::TITLE, Term::string_literal("T"));
        g.insert(r, dcterms::DESCRIPTION, Term::string_literal("D"));
        let outcome = ProfileValidator.validate(&g);
        assert!(outcome.conforms(), "{}", outcome.report());
    }

    #[test]
    fn missing_title_fails_with_report() {
        let mut g = MetaGraph::new();
        let r = Term::iri("https://example.com/dataset");
        g.insert(r.clone(), rdf::TYPE, Term::iri(dcat::RESOURCE));
        g.insert(r, dcterms::DESCRIPTION, Term::string_literal("D"));
        let outcome = ProfileValidator.validate(&g);
        assert!(!outcome.conforms());
        assert!(outcome.report().contains("has no title"));
    }

    #[test]
    fn literal_part_of_values_fail() {
        let mut g = MetaGraph::new();
        let r = Term::iri("https://example.com/dataset");
        g.insert(r.clone(), rdf::TYPE, Term::iri(dcat::RESOURCE));
        g.insert(r.clone(), dcterms::TITLE, Term::string_literal("T"));
        g.insert(r.clone(), dcterms::DESCRIPTION, Term::string_literal("D"));
        g.insert(r, dcterms::IS_PART_OF, Term::string_literal("not an IRI"));
        assert!(!ProfileValidator.validate(&g).conforms());
    }
}
