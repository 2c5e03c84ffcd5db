//! Mood classification using keyword containment.
//!
//! Each emotion scores `matched triggers / total triggers`. Matching is plain
//! substring containment on the lowercased message: no tokenization, word
//! boundaries or stemming. Topics match independently.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use super::lexicon::{Emotion, Lexicon, Topic};
use super::payload::AnalysisResult;

/// Emotion/topic classifier over a shared lexicon
#[derive(Debug, Clone)]
pub struct MoodClassifier {
    lexicon: Arc<Lexicon>,
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl MoodClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify a message. Never fails.
    pub fn classify(&self, message: &str) -> AnalysisResult {
        let text = message.to_lowercase();

        let mut emotion_scores = BTreeMap::new();
        let mut best: Option<(Emotion, f32)> = None;

        for (emotion, triggers) in self.lexicon.emotions() {
            let score = score_triggers(&text, triggers);
            emotion_scores.insert(emotion, score);

            // Strict comparison keeps the earliest emotion on ties.
            if score > 0.0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((emotion, score));
            }
        }

        let topics = self.match_topics(&text);

        let result = match best {
            Some((emotion, confidence)) => AnalysisResult {
                emotion,
                confidence,
                emotion_scores,
                topics,
            },
            None => AnalysisResult {
                topics,
                ..AnalysisResult::neutral(emotion_scores)
            },
        };

        debug!(
            emotion = %result.emotion,
            confidence = result.confidence,
            topics = result.topics.len(),
            "Classified message"
        );

        result
    }

    /// Topics whose triggers occur in `text` (already lowercased).
    fn match_topics(&self, text: &str) -> Vec<Topic> {
        let topics: Vec<Topic> = self
            .lexicon
            .topics()
            .filter(|(_, triggers)| triggers.iter().any(|t| text.contains(t.as_str())))
            .map(|(topic, _)| topic)
            .collect();

        if topics.is_empty() {
            vec![Topic::General]
        } else {
            topics
        }
    }
}

fn score_triggers(text: &str, triggers: &[String]) -> f32 {
    if triggers.is_empty() {
        return 0.0;
    }
    let hits = triggers
        .iter()
        .filter(|t| text.contains(t.as_str()))
        .count();
    hits as f32 / triggers.len() as f32
}
