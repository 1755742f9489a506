//! Forward-chaining inference over catalogue graphs.
//!
//! Materializes only the entailments the scoring rules read, well short of
//! full RDFS/OWL inference:
//!
//! 1. everything typed `dcat:Dataset` is also a `dcat:Resource`;
//! 2. `dcterms:isPartOf` and `dcterms:hasPart` are mutual inverses;
//! 3. (when enabled) members of a container inherit its `rdfs:label` and
//!    `dcterms:description` when they have none of their own.
//!
//! Expansion runs to a fixpoint and only ever adds triples, so running it a
//! second time adds nothing.

use tracing::debug;

use crate::graph::{MetaGraph, Term};
use scores_vocab::namespaces::{dcat, dcterms, rdf, rdfs};

/// Which inference rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Type every `dcat:Dataset` as a `dcat:Resource`.
    pub type_closure: bool,
    /// Assert the inverse of every `dcterms:isPartOf` / `dcterms:hasPart`.
    pub part_whole_symmetry: bool,
    /// Propagate container labels and descriptions to bare members.
    pub label_inheritance: bool,
}

impl Rules {
    /// The rule set FAIR scoring needs.
    #[must_use]
    pub fn fair() -> Self {
        Rules {
            type_closure: true,
            part_whole_symmetry: true,
            label_inheritance: false,
        }
    }

    /// The rule set CARE scoring needs: the FAIR rules plus label and
    /// description inheritance across container membership.
    #[must_use]
    pub fn care() -> Self {
        Rules {
            label_inheritance: true,
            ..Rules::fair()
        }
    }
}

/// Applies the selected rules until no new triple can be derived. Returns
/// the number of triples added.
pub fn expand(graph: &mut MetaGraph, rules: &Rules) -> usize {
    let before = graph.len();
    loop {
        let mut additions: Vec<(Term, &str, Term)> = Vec::new();

        if rules.type_closure {
            for dataset in graph.subjects_of_type(dcat::DATASET) {
                additions.push((dataset.clone(), rdf::TYPE, Term::iri(dcat::RESOURCE)));
            }
        }

        if rules.part_whole_symmetry {
            for (part, whole) in graph.subject_object_pairs(dcterms::IS_PART_OF) {
                additions.push((whole.clone(), dcterms::HAS_PART, part.clone()));
            }
            for (whole, part) in graph.subject_object_pairs(dcterms::HAS_PART) {
                additions.push((part.clone(), dcterms::IS_PART_OF, whole.clone()));
            }
        }

        if rules.label_inheritance {
            for property in [rdfs::LABEL, dcterms::DESCRIPTION] {
                for (container, member) in graph.subject_object_pairs(dcterms::HAS_PART) {
                    if graph.has(member, property) {
                        continue;
                    }
                    for inherited in graph.objects(container, property) {
                        additions.push((member.clone(), property, inherited.clone()));
                    }
                }
            }
        }

        let mut added_this_pass = false;
        for (s, p, o) in additions {
            added_this_pass |= graph.insert(s, p, o);
        }
        if !added_this_pass {
            break;
        }
    }

    let added = graph.len() - before;
    debug!(added, "forward chaining complete");
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Term {
        Term::iri("https://example.com/dataset")
    }

    fn catalogue() -> Term {
        Term::iri("https://example.com/catalogue")
    }

    #[test]
    fn datasets_become_resources() {
        let mut g = MetaGraph::new();
        g.insert(dataset(), rdf::TYPE, Term::iri(dcat::DATASET));
        expand(&mut g, &Rules::fair());
        assert!(g.contains(&dataset(), rdf::TYPE, &Term::iri(dcat::RESOURCE)));
    }

    #[test]
    fn part_whole_links_become_symmetric() {
        let mut g = MetaGraph::new();
        g.insert(dataset(), dcterms::IS_PART_OF, catalogue());
        expand(&mut g, &Rules::fair());
        assert!(g.contains(&catalogue(), dcterms::HAS_PART, &dataset()));
    }

    #[test]
    fn members_inherit_missing_labels() {
        let mut g = MetaGraph::new();
        g.insert(catalogue(), dcterms::HAS_PART, dataset());
        g.insert(catalogue(), rdfs::LABEL, Term::string_literal("Catalogue"));
        g.insert(
            catalogue(),
            dcterms::DESCRIPTION,
            Term::string_literal("About the catalogue"),
        );
        expand(&mut g, &Rules::care());
        assert!(g.contains(&dataset(), rdfs::LABEL, &Term::string_literal("Catalogue")));
        assert!(g.has(&dataset(), dcterms::DESCRIPTION));
    }

    #[test]
    fn members_keep_their_own_labels() {
        let mut g = MetaGraph::new();
        g.insert(catalogue(), dcterms::HAS_PART, dataset());
        g.insert(catalogue(), rdfs::LABEL, Term::string_literal("Catalogue"));
        g.insert(dataset(), rdfs::LABEL, Term::string_literal("Dataset"));
        expand(&mut g, &Rules::care());
        assert!(!g.contains(&dataset(), rdfs::LABEL, &Term::string_literal("Catalogue")));
    }

    #[test]
    fn expansion_is_idempotent() {
        let mut g = MetaGraph::new();
        g.insert(dataset(), rdf::TYPE, Term::iri(dcat::DATASET));
        g.insert(dataset(), dcterms::IS_PART_OF, catalogue());
        g.insert(catalogue(), rdfs::LABEL, Term::string_literal("Catalogue"));

        let first = expand(&mut g, &Rules::care());
        assert!(first > 0);
        let second = expand(&mut g, &Rules::care());
        assert_eq!(second, 0);
    }
}
