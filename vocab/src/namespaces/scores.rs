//! The Scores ontology — `https://linked.data.gov.au/def/scores/`.
//!
//! Classes model a Score as an observation group attached to a catalogued
//! resource; properties carry the per-dimension measured values, raw and
//! normalised. Normalised measures hold values rescaled to `[0, 1]` against
//! the documented dimension maxima in [`crate::rubric`].

/// Namespace IRI.
pub const NS: &str = "https://linked.data.gov.au/def/scores/";

// Classes

/// Root class of all scores.
pub const SCORE: &str = "https://linked.data.gov.au/def/scores/Score";
/// A CARE score container.
pub const CARE_SCORE: &str = "https://linked.data.gov.au/def/scores/CareScore";
/// A FAIR score container.
pub const FAIR_SCORE: &str = "https://linked.data.gov.au/def/scores/FairScore";
/// A CARE score rescaled to `[0, 1]` per dimension.
pub const CARE_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/CareScoreNormalised";
/// A FAIR score rescaled to `[0, 1]` per dimension.
pub const FAIR_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/FairScoreNormalised";
/// A labelling-quality score container.
pub const LC_LABELS_SCORE: &str = "https://linked.data.gov.au/def/scores/LcLabelsScore";
/// A score qualified by the time interval it was valid for.
pub const SCORE_FOR_TIME: &str = "https://linked.data.gov.au/def/scores/ScoreForTime";

// Object properties

/// Links a catalogued resource to one of its scores.
pub const HAS_SCORE: &str = "https://linked.data.gov.au/def/scores/hasScore";
/// Links a catalogued resource to a time-qualified score.
pub const HAS_SCORE_FOR_TIME: &str =
    "https://linked.data.gov.au/def/scores/hasScoreForTime";
/// Back-reference from a score container to the resource it scores.
pub const REF_RESOURCE: &str = "https://linked.data.gov.au/def/scores/refResource";
/// Reference from a score container to its validity interval.
pub const REF_TIME: &str = "https://linked.data.gov.au/def/scores/refTime";

// Measure properties

/// Generic measured value of a score observation.
pub const SCORE_VALUE: &str = "https://linked.data.gov.au/def/scores/scoreValue";

/// Resource-level FAIR total.
pub const FAIR_SCORE_VALUE: &str =
    "https://linked.data.gov.au/def/scores/fairScoreValue";
/// FAIR Findable dimension.
pub const FAIR_F_SCORE: &str = "https://linked.data.gov.au/def/scores/fairFScore";
/// FAIR Accessible dimension.
pub const FAIR_A_SCORE: &str = "https://linked.data.gov.au/def/scores/fairAScore";
/// FAIR Interoperable dimension.
pub const FAIR_I_SCORE: &str = "https://linked.data.gov.au/def/scores/fairIScore";
/// FAIR Reusable dimension.
pub const FAIR_R_SCORE: &str = "https://linked.data.gov.au/def/scores/fairRScore";

/// Resource-level CARE total.
pub const CARE_SCORE_VALUE: &str =
    "https://linked.data.gov.au/def/scores/careScoreValue";
/// CARE Collective-benefit dimension.
pub const CARE_C_SCORE: &str = "https://linked.data.gov.au/def/scores/careCScore";
/// CARE Authority-to-control dimension.
pub const CARE_A_SCORE: &str = "https://linked.data.gov.au/def/scores/careAScore";
/// CARE Responsibility dimension.
pub const CARE_R_SCORE: &str = "https://linked.data.gov.au/def/scores/careRScore";
/// CARE Ethics dimension.
pub const CARE_E_SCORE: &str = "https://linked.data.gov.au/def/scores/careEScore";

/// FAIR Findable, rescaled to `[0, 1]`.
pub const FAIR_F_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/fairFScoreNormalised";
/// FAIR Accessible, rescaled to `[0, 1]`.
pub const FAIR_A_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/fairAScoreNormalised";
/// FAIR Interoperable, rescaled to `[0, 1]`.
pub const FAIR_I_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/fairIScoreNormalised";
/// FAIR Reusable, rescaled to `[0, 1]`.
pub const FAIR_R_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/fairRScoreNormalised";

/// CARE Collective-benefit, rescaled to `[0, 1]`.
pub const CARE_C_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/careCScoreNormalised";
/// CARE Authority-to-control, rescaled to `[0, 1]`.
pub const CARE_A_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/careAScoreNormalised";
/// CARE Responsibility, rescaled to `[0, 1]`.
pub const CARE_R_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/careRScoreNormalised";
/// CARE Ethics, rescaled to `[0, 1]`.
pub const CARE_E_SCORE_NORMALISED: &str =
    "https://linked.data.gov.au/def/scores/careEScoreNormalised";
