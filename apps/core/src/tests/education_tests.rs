//! Education Module Tests
//!
//! Band tables must be contiguous and cover every valid score exactly once.

use crate::education::{Instrument, MentalHealthEducator};

#[cfg(test)]
mod band_tests {
    use super::*;

    #[test]
    fn test_bands_are_contiguous_and_cover_range() {
        for instrument in [Instrument::Phq9, Instrument::Gad7] {
            let bands = instrument.bands();

            assert_eq!(bands[0].min, 0, "{} must start at 0", instrument);
            assert_eq!(
                bands[bands.len() - 1].max,
                instrument.max_score() + 1,
                "{} must end at max",
                instrument
            );
            for pair in bands.windows(2) {
                assert_eq!(pair[0].max, pair[1].min, "{} has a gap or overlap", instrument);
            }
        }
    }

    #[test]
    fn test_every_phq9_score_has_exactly_one_band() {
        let educator = MentalHealthEducator::new();
        let levels = [
            "Minimal",
            "Mild",
            "Moderate",
            "Moderately Severe",
            "Severe",
        ];

        for score in 0..=27 {
            let containing = Instrument::Phq9
                .bands()
                .iter()
                .filter(|band| band.contains(score))
                .count();
            assert_eq!(containing, 1, "score {} is in {} bands", score, containing);

            let band = educator.explain_score(Instrument::Phq9, score);
            assert!(levels.contains(&band.level.as_str()));
        }
    }

    #[test]
    fn test_every_gad7_score_has_exactly_one_band() {
        for score in 0..=21 {
            let containing = Instrument::Gad7
                .bands()
                .iter()
                .filter(|band| band.contains(score))
                .count();
            assert_eq!(containing, 1, "score {} is in {} bands", score, containing);
        }
    }

    #[test]
    fn test_gad7_boundaries() {
        let educator = MentalHealthEducator::new();

        assert_eq!(educator.explain_score(Instrument::Gad7, 4).level, "Minimal");
        assert_eq!(educator.explain_score(Instrument::Gad7, 9).level, "Mild");
        assert_eq!(educator.explain_score(Instrument::Gad7, 10).level, "Moderate");
        assert_eq!(educator.explain_score(Instrument::Gad7, 15).level, "Severe");
    }

    #[test]
    fn test_wellness_is_total() {
        let educator = MentalHealthEducator::new();

        for pct in 0..=100 {
            let band = educator.band_wellness(pct as f32);
            assert!(!band.level.is_empty());
            assert_eq!(band.recommendations.len(), 3);
        }
        assert_eq!(educator.band_wellness(f32::INFINITY).level, "Excellent");
    }
}

#[cfg(test)]
mod condition_tests {
    use super::*;

    #[test]
    fn test_all_conditions_have_content() {
        let educator = MentalHealthEducator::new();

        for name in educator.condition_names() {
            let info = educator.condition(name).unwrap();
            assert!(!info.description.is_empty(), "{}", name);
            assert!(!info.symptoms.is_empty(), "{}", name);
            assert!(!info.causes.is_empty(), "{}", name);
            assert!(!info.coping.is_empty(), "{}", name);
            assert!(!info.myths.is_empty(), "{}", name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let educator = MentalHealthEducator::new();

        assert!(educator.condition("DEPRESSION").is_some());
        assert!(educator.condition(" stress ").is_some());
        assert!(educator.condition("").is_none());
        assert!(educator.condition("bipolar").is_none());
    }
}
