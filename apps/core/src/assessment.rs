//! Questionnaire scoring for PHQ-9 and GAD-7.
//!
//! Each item is answered 0 ("not at all") to 3 ("nearly every day") and the
//! total is the plain sum.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::brain::AssessmentContext;
use crate::education::{Instrument, MentalHealthEducator, ScoreBand};
use crate::error::{AppError, Result};

/// Highest answer value for a single item.
pub const MAX_ITEM_SCORE: u8 = 3;

/// Index of the PHQ-9 item about thoughts of self-harm.
const PHQ9_SELF_HARM_ITEM: usize = 8;

/// Scored questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScore {
    pub instrument: Instrument,
    pub total: u32,
    pub band: ScoreBand,
    /// PHQ-9 item 9 answered above zero; always false for GAD-7
    pub self_harm_flag: bool,
}

/// Validate and score a set of answers.
pub fn score_responses(instrument: Instrument, answers: &[u8]) -> Result<AssessmentScore> {
    if answers.len() != instrument.item_count() {
        return Err(AppError::Validation(format!(
            "{} expects {} answers, got {}",
            instrument,
            instrument.item_count(),
            answers.len()
        )));
    }

    if let Some((index, value)) = answers
        .iter()
        .enumerate()
        .find(|(_, value)| **value > MAX_ITEM_SCORE)
    {
        return Err(AppError::Validation(format!(
            "{} item {} must be between 0 and {}, got {}",
            instrument,
            index + 1,
            MAX_ITEM_SCORE,
            value
        )));
    }

    let total: u32 = answers.iter().map(|a| u32::from(*a)).sum();
    let self_harm_flag =
        instrument == Instrument::Phq9 && answers[PHQ9_SELF_HARM_ITEM] > 0;

    if self_harm_flag {
        warn!("{} self-harm item answered above zero", instrument);
    }

    let band = MentalHealthEducator::new().explain_score(instrument, total);
    info!("Scored {}: {} ({})", instrument, total, band.level);

    Ok(AssessmentScore {
        instrument,
        total,
        band,
        self_harm_flag,
    })
}

/// Wellness percentage: the mean of `1 - total / max` over the instruments
/// supplied, scaled to 0-100.
///
/// With no scores at all the result is 100. Totals above the instrument
/// maximum are capped.
pub fn wellness_percentage(phq9_score: Option<u32>, gad7_score: Option<u32>) -> f32 {
    let parts: Vec<f32> = [
        (Instrument::Phq9, phq9_score),
        (Instrument::Gad7, gad7_score),
    ]
    .into_iter()
    .filter_map(|(instrument, score)| {
        let max = instrument.max_score();
        score.map(|s| 1.0 - s.min(max) as f32 / max as f32)
    })
    .collect();

    if parts.is_empty() {
        return 100.0;
    }
    100.0 * parts.iter().sum::<f32>() / parts.len() as f32
}

impl AssessmentContext {
    /// Build a responder context from scored questionnaires.
    pub fn from_assessments(phq9: Option<&AssessmentScore>, gad7: Option<&AssessmentScore>) -> Self {
        Self::from_scores(phq9.map(|s| s.total), gad7.map(|s| s.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phq9_scoring() {
        let score = score_responses(Instrument::Phq9, &[1, 2, 1, 2, 1, 1, 2, 1, 0]).unwrap();
        assert_eq!(score.total, 11);
        assert_eq!(score.band.level, "Moderate");
        assert!(!score.self_harm_flag);
    }

    #[test]
    fn test_self_harm_item_flags() {
        let score = score_responses(Instrument::Phq9, &[0, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap();
        assert_eq!(score.total, 1);
        assert!(score.self_harm_flag);
    }

    #[test]
    fn test_gad7_never_flags() {
        let score = score_responses(Instrument::Gad7, &[3; 7]).unwrap();
        assert_eq!(score.total, 21);
        assert_eq!(score.band.level, "Severe");
        assert!(!score.self_harm_flag);
    }

    #[test]
    fn test_wrong_item_count() {
        let err = score_responses(Instrument::Gad7, &[1, 1]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_item_out_of_range() {
        let err = score_responses(Instrument::Gad7, &[0, 0, 4, 0, 0, 0, 0]).unwrap_err();
        assert!(err.to_string().contains("item 3"));
    }

    #[test]
    fn test_wellness_percentage() {
        assert_eq!(wellness_percentage(None, None), 100.0);
        assert_eq!(wellness_percentage(Some(0), None), 100.0);
        assert_eq!(wellness_percentage(Some(27), Some(21)), 0.0);
        assert_eq!(wellness_percentage(Some(100), Some(21)), 0.0);

        // PHQ-9 at 100%, GAD-7 at 0%
        let mixed = wellness_percentage(Some(0), Some(21));
        assert!((mixed - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_context_from_assessments() {
        let phq9 = score_responses(Instrument::Phq9, &[2; 9]).unwrap();
        let ctx = AssessmentContext::from_assessments(Some(&phq9), None);
        assert_eq!(ctx.phq9_score, Some(18));
        assert!(ctx.exceeds(10));
    }
}
