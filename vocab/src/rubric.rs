//! Rubric dimension tables.
//!
//! Each score type has four dimensions; a dimension pairs its raw measure
//! property with its normalised measure property and the documented maximum
//! the raw value is divided by when normalising. The maxima are part of the
//! rubric, not derived from the rules: a rule that cannot currently reach
//! its documented maximum (FAIR R, CARE C3, CARE R2) still normalises
//! against it so that scores stay comparable across calculator revisions.

use crate::namespaces::scores;

/// One scored dimension of a rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    /// Short human-readable name, e.g. `"F"`.
    pub label: &'static str,
    /// Measure property carrying the raw integer value.
    pub measure: &'static str,
    /// Measure property carrying the normalised value.
    pub normalised_measure: &'static str,
    /// Documented maximum of the raw value; the normalisation divisor.
    pub maximum: i64,
}

/// FAIR dimensions in rubric order.
pub const FAIR_DIMENSIONS: [Dimension; 4] = [
    Dimension {
        label: "F",
        measure: scores::FAIR_F_SCORE,
        normalised_measure: scores::FAIR_F_SCORE_NORMALISED,
        maximum: 17,
    },
    Dimension {
        label: "A",
        measure: scores::FAIR_A_SCORE,
        normalised_measure: scores::FAIR_A_SCORE_NORMALISED,
        maximum: 10,
    },
    Dimension {
        label: "I",
        measure: scores::FAIR_I_SCORE,
        normalised_measure: scores::FAIR_I_SCORE_NORMALISED,
        maximum: 8,
    },
    Dimension {
        label: "R",
        measure: scores::FAIR_R_SCORE,
        normalised_measure: scores::FAIR_R_SCORE_NORMALISED,
        maximum: 7,
    },
];

/// CARE dimensions in rubric order. Each maximum is the sum of the
/// documented maxima of the dimension's three chained sub-scores.
pub const CARE_DIMENSIONS: [Dimension; 4] = [
    Dimension {
        label: "C",
        measure: scores::CARE_C_SCORE,
        normalised_measure: scores::CARE_C_SCORE_NORMALISED,
        maximum: 9,
    },
    Dimension {
        label: "A",
        measure: scores::CARE_A_SCORE,
        normalised_measure: scores::CARE_A_SCORE_NORMALISED,
        maximum: 9,
    },
    Dimension {
        label: "R",
        measure: scores::CARE_R_SCORE,
        normalised_measure: scores::CARE_R_SCORE_NORMALISED,
        maximum: 12,
    },
    Dimension {
        label: "E",
        measure: scores::CARE_E_SCORE,
        normalised_measure: scores::CARE_E_SCORE_NORMALISED,
        maximum: 9,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_are_distinct_from_normalised_measures() {
        for dim in FAIR_DIMENSIONS.iter().chain(CARE_DIMENSIONS.iter()) {
            assert_ne!(dim.measure, dim.normalised_measure);
            assert!(dim.maximum > 0);
        }
    }
}
