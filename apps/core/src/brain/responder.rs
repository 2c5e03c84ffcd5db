//! Responder - Main orchestrator for the counselor pipeline.
//!
//! classify → pick template → topic context → assessment sentence →
//! follow-up question → coping strategies → risk scan.
//!
//! Randomness only touches presentation text. Emotion, topics and risk level
//! are a pure function of the message. The payload is a pure function of the
//! message, the context and the RNG; timestamps are left to the caller.

use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

use super::classifier::MoodClassifier;
use super::lexicon::{Emotion, Lexicon};
use super::payload::{AssessmentContext, MoodAnalysis, ResponsePayload};
use super::risk::RiskScanner;
use super::templates;
use crate::config::{CounselorConfig, MAX_COPING_STRATEGIES};

/// Rule-based counselor
#[derive(Debug, Clone)]
pub struct Responder {
    classifier: MoodClassifier,
    risk_scanner: RiskScanner,
    assessment_threshold: u32,
    coping_strategy_count: usize,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(&CounselorConfig::default())
    }
}

impl Responder {
    /// Create a responder over the built-in lexicon
    pub fn new(config: &CounselorConfig) -> Self {
        Self::with_lexicon(Lexicon::shared(), config)
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: &CounselorConfig) -> Self {
        Self {
            classifier: MoodClassifier::new(lexicon),
            risk_scanner: RiskScanner::default(),
            assessment_threshold: config.assessment_threshold,
            coping_strategy_count: config.coping_strategy_count.min(MAX_COPING_STRATEGIES),
        }
    }

    pub fn classifier(&self) -> &MoodClassifier {
        &self.classifier
    }

    /// Respond using the thread-local RNG
    pub fn respond(&self, message: &str, context: Option<AssessmentContext>) -> ResponsePayload {
        self.respond_with(message, context, &mut rand::thread_rng())
    }

    /// Respond using a caller-supplied RNG
    pub fn respond_with<R: Rng + ?Sized>(
        &self,
        message: &str,
        context: Option<AssessmentContext>,
        rng: &mut R,
    ) -> ResponsePayload {
        let analysis = self.classifier.classify(message);

        let mut parts: Vec<&str> = Vec::with_capacity(4);

        if let Some(template) = templates::response_templates(analysis.emotion).choose(rng) {
            parts.push(template);
        }

        if let Some(sentence) = analysis
            .topics
            .iter()
            .find_map(|topic| templates::topic_context(*topic))
        {
            parts.push(sentence);
        }

        if context.is_some_and(|ctx| ctx.exceeds(self.assessment_threshold)) {
            parts.push(templates::ASSESSMENT_SUPPORT);
        }

        if let Some(question) = templates::FOLLOW_UP_QUESTIONS.choose(rng) {
            parts.push(question);
        }

        let coping_strategies = self.pick_strategies(analysis.emotion, rng);
        let risk_assessment = self.risk_scanner.assess(message);

        let payload = ResponsePayload {
            success: true,
            response: parts.join(" "),
            mood_analysis: MoodAnalysis::from(&analysis),
            topics: analysis.topics,
            coping_strategies,
            risk_assessment,
            generated_at: None,
        };

        info!("Counselor response: {}", payload.summary());

        payload
    }

    /// Fisher-Yates shuffle of the emotion's list, then take the first N.
    fn pick_strategies<R: Rng + ?Sized>(&self, emotion: Emotion, rng: &mut R) -> Vec<String> {
        let mut pool: Vec<&str> = templates::coping_strategies(emotion).to_vec();
        pool.shuffle(rng);
        pool.into_iter()
            .take(self.coping_strategy_count)
            .map(str::to_string)
            .collect()
    }
}
