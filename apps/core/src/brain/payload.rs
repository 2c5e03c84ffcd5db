//! Response Payload - Output structures for the counselor pipeline.
//!
//! Field names serialize in camelCase to match what the chat front-ends read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::lexicon::{Emotion, Topic};

/// Result of emotion/topic classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Winning emotion (`neutral` if nothing matched)
    pub emotion: Emotion,
    /// Winning score, or 0.5 for the neutral fallback
    pub confidence: f32,
    /// Normalized score for every emotion that has triggers
    pub emotion_scores: BTreeMap<Emotion, f32>,
    /// Matched topics in enumeration order; never empty
    pub topics: Vec<Topic>,
}

impl AnalysisResult {
    /// Neutral/general result for input with no recognizable keywords.
    pub fn neutral(emotion_scores: BTreeMap<Emotion, f32>) -> Self {
        Self {
            emotion: Emotion::Neutral,
            confidence: 0.5,
            emotion_scores,
            topics: vec![Topic::General],
        }
    }
}

/// Subset of the analysis echoed back inside a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub emotion: Emotion,
    pub confidence: f32,
    pub emotion_scores: BTreeMap<Emotion, f32>,
}

impl From<&AnalysisResult> for MoodAnalysis {
    fn from(analysis: &AnalysisResult) -> Self {
        Self {
            emotion: analysis.emotion,
            confidence: analysis.confidence,
            emotion_scores: analysis.emotion_scores.clone(),
        }
    }
}

/// Coarse self-harm risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of the risk keyword scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub recommendation: String,
    pub resources: Vec<String>,
    /// Triggers that fired; empty for `low`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched: Vec<String>,
}

/// Optional screening scores supplied alongside a chat message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentContext {
    pub phq9_score: Option<u32>,
    pub gad7_score: Option<u32>,
}

impl AssessmentContext {
    pub fn from_scores(phq9_score: Option<u32>, gad7_score: Option<u32>) -> Self {
        Self {
            phq9_score,
            gad7_score,
        }
    }

    /// True when either score is strictly above `threshold`.
    pub fn exceeds(&self, threshold: u32) -> bool {
        self.phq9_score.is_some_and(|s| s > threshold)
            || self.gad7_score.is_some_and(|s| s > threshold)
    }
}

/// Complete counselor reply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    /// Always true; the pipeline has no failure path
    pub success: bool,
    pub response: String,
    pub mood_analysis: MoodAnalysis,
    pub topics: Vec<Topic>,
    pub coping_strategies: Vec<String>,
    pub risk_assessment: RiskAssessment,
    /// Set by the caller with [`ResponsePayload::stamped`]; absent otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl ResponsePayload {
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let topics: Vec<&str> = self.topics.iter().map(|t| t.label()).collect();
        format!(
            "Emotion: {} ({:.0}%), Topics: {}, Strategies: {}, Risk: {}",
            self.mood_analysis.emotion,
            self.mood_analysis.confidence * 100.0,
            topics.join(","),
            self.coping_strategies.len(),
            self.risk_assessment.level
        )
    }
}
