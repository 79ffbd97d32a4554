//! Coaching score aggregation.
//!
//! Read-side math applied when a coach reviews completed evaluations:
//! per-evaluation mean scores, the self/referent delta, the over/under
//! self-assessment classification, and the talking-point suggestion it
//! selects. Nothing here is persisted; the aggregator recomputes on every
//! query.

use serde::Serialize;

use crate::evaluation::{ReferentEntry, SelfEntry};

/// A self-assessment deviates when the mean scores differ by more than this.
pub const ALIGNMENT_THRESHOLD: f64 = 1.0;

/// How the employee's self-assessment compares to the referent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    /// Self score exceeds the referent score by more than the threshold.
    OverEvaluation,
    /// Referent score exceeds the self score by more than the threshold.
    UnderEvaluation,
    Aligned,
}

impl Alignment {
    /// Fixed coaching-talking-point template for this classification.
    pub fn talking_point(&self) -> &'static str {
        match self {
            Alignment::OverEvaluation => {
                "The employee rates their attainment noticeably higher than the referent. \
                 Explore where expectations diverged and agree on concrete evidence of progress."
            }
            Alignment::UnderEvaluation => {
                "The referent rates the employee's attainment noticeably higher than they rate \
                 themselves. Highlight the recognized strengths and work on self-confidence."
            }
            Alignment::Aligned => {
                "Self- and referent evaluation are aligned. Confirm the shared view and pick \
                 the next development focus together."
            }
        }
    }
}

/// Derived scores for one evaluation.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Mean of the employee's scores, one decimal.
    pub self_score: f64,
    /// Mean of the referent's scores, one decimal.
    pub referent_score: f64,
    /// The referent score verbatim. The referent evaluation is
    /// authoritative; the self score is informational only.
    pub final_score: f64,
    /// `referent_score - self_score`.
    pub score_delta: f64,
    pub alignment: Alignment,
}

/// Round to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Arithmetic mean of scores, rounded to one decimal. Empty input yields 0.0.
pub fn mean_score(scores: &[i16]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: i64 = scores.iter().map(|&s| s as i64).sum();
    round1(sum as f64 / scores.len() as f64)
}

/// Classify the self/referent relation against [`ALIGNMENT_THRESHOLD`].
pub fn classify(self_score: f64, referent_score: f64) -> Alignment {
    if self_score - referent_score > ALIGNMENT_THRESHOLD {
        Alignment::OverEvaluation
    } else if referent_score - self_score > ALIGNMENT_THRESHOLD {
        Alignment::UnderEvaluation
    } else {
        Alignment::Aligned
    }
}

/// Compute the full derived-score summary for one evaluation.
pub fn summarize(self_entries: &[SelfEntry], referent_entries: &[ReferentEntry]) -> ScoreSummary {
    let self_scores: Vec<i16> = self_entries.iter().map(|e| e.score).collect();
    let referent_scores: Vec<i16> = referent_entries.iter().map(|e| e.score).collect();

    let self_score = mean_score(&self_scores);
    let referent_score = mean_score(&referent_scores);

    ScoreSummary {
        self_score,
        referent_score,
        final_score: referent_score,
        score_delta: round1(referent_score - self_score),
        alignment: classify(self_score, referent_score),
    }
}

/// Employee-level average of final scores across evaluations, one decimal.
pub fn rollup_average(final_scores: &[f64]) -> f64 {
    if final_scores.is_empty() {
        return 0.0;
    }
    round1(final_scores.iter().sum::<f64>() / final_scores.len() as f64)
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
