//! Brain Module Tests
//!
//! Properties of the classifier, the risk scan and the responder that must
//! hold for every input.

use crate::brain::templates;
use crate::brain::{Emotion, MoodClassifier, Responder, RiskLevel, RiskScanner, Topic};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_no_keywords_is_neutral_general() {
        let classifier = MoodClassifier::default();

        let messages = vec![
            "",
            "   ",
            "The weather is nice today",
            "12345 !!! ???",
            "ok",
        ];

        for message in messages {
            let result = classifier.classify(message);
            assert_eq!(result.emotion, Emotion::Neutral, "Expected neutral for '{}'", message);
            assert_eq!(result.confidence, 0.5);
            assert_eq!(result.topics, vec![Topic::General], "Expected general for '{}'", message);
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = MoodClassifier::default();

        let messages = vec![
            "I have an exam tomorrow and I'm really anxious and can't sleep",
            "so frustrated with my boss",
            "",
        ];

        for message in messages {
            assert_eq!(classifier.classify(message), classifier.classify(message));
        }
    }

    #[test]
    fn test_each_emotion_detected() {
        let classifier = MoodClassifier::default();

        let cases = vec![
            ("I feel anxious and overwhelmed", Emotion::Anxious),
            ("I've been so sad and lonely", Emotion::Depressed),
            ("I'm furious and annoyed", Emotion::Angry),
            ("I'm so excited and thrilled!", Emotion::Excited),
            ("I'm confused and unsure", Emotion::Confused),
            ("The deadline pressure is on", Emotion::Stressed),
            ("Completely exhausted", Emotion::Tired),
        ];

        for (message, expected) in cases {
            let result = classifier.classify(message);
            assert_eq!(result.emotion, expected, "Expected {} for '{}'", expected, message);
            assert!(result.confidence > 0.0 && result.confidence <= 1.0);
        }
    }

    #[test]
    fn test_scores_are_normalized() {
        let classifier = MoodClassifier::default();

        let result = classifier.classify(
            "anxious anxiety worried worry nervous panic scared afraid overwhelmed fear",
        );
        assert_eq!(result.emotion, Emotion::Anxious);
        assert_eq!(result.confidence, 1.0);
        assert!(result.emotion_scores.values().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_very_long_message() {
        let classifier = MoodClassifier::default();

        let message = "nothing to see here ".repeat(10_000);
        let result = classifier.classify(&message);
        assert_eq!(result.emotion, Emotion::Neutral);
    }
}

#[cfg(test)]
mod risk_tests {
    use super::*;

    #[test]
    fn test_high_risk_regardless_of_emotion() {
        let scanner = RiskScanner::default();

        let messages = vec![
            "I want to end it all",
            "I'm so happy, but sometimes I think about suicide",
            "exam tomorrow, I want to die",
            "I KEEP THINKING I'D BE BETTER OFF DEAD",
        ];

        for message in messages {
            assert_eq!(scanner.assess(message).level, RiskLevel::High, "'{}'", message);
        }
    }

    #[test]
    fn test_risk_is_deterministic() {
        let scanner = RiskScanner::default();
        let message = "I feel trapped";

        assert_eq!(scanner.assess(message), scanner.assess(message));
        assert_eq!(scanner.assess(message).level, RiskLevel::Moderate);
    }
}

#[cfg(test)]
mod responder_tests {
    use super::*;

    #[test]
    fn test_anxious_strategies_are_subset_without_duplicates() {
        let responder = Responder::default();
        let anxious: HashSet<&str> = templates::coping_strategies(Emotion::Anxious)
            .iter()
            .copied()
            .collect();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let payload = responder.respond_with("I feel anxious and overwhelmed", None, &mut rng);

            assert_eq!(payload.mood_analysis.emotion, Emotion::Anxious);
            assert!(payload.coping_strategies.len() <= 3);

            let picked: HashSet<&str> =
                payload.coping_strategies.iter().map(String::as_str).collect();
            assert_eq!(picked.len(), payload.coping_strategies.len());
            assert!(picked.is_subset(&anxious));
        }
    }

    #[test]
    fn test_randomness_never_changes_classification() {
        let responder = Responder::default();
        let message = "My roommate and I fought and I feel hopeless";

        let baseline = responder.respond_with(message, None, &mut StdRng::seed_from_u64(0));
        for seed in 1..30 {
            let payload = responder.respond_with(message, None, &mut StdRng::seed_from_u64(seed));
            assert_eq!(payload.mood_analysis, baseline.mood_analysis);
            assert_eq!(payload.topics, baseline.topics);
            assert_eq!(payload.risk_assessment, baseline.risk_assessment);
        }
    }

    #[test]
    fn test_response_contains_template_and_question() {
        let responder = Responder::default();

        for seed in 0..20 {
            let payload = responder.respond_with("ok", None, &mut StdRng::seed_from_u64(seed));
            let openers = templates::response_templates(Emotion::Neutral);
            assert!(openers.iter().any(|t| payload.response.starts_with(t)));
            assert!(templates::FOLLOW_UP_QUESTIONS
                .iter()
                .any(|q| payload.response.ends_with(q)));
        }
    }

    #[test]
    fn test_different_seeds_vary_presentation() {
        let responder = Responder::default();

        let responses: HashSet<String> = (0..40)
            .map(|seed| {
                responder
                    .respond_with("I'm stressed", None, &mut StdRng::seed_from_u64(seed))
                    .response
            })
            .collect();
        assert!(responses.len() > 1);
    }
}
