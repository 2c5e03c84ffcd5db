//! Risk keyword scan.
//!
//! Independent of emotion/topic classification. High-risk phrases are
//! checked first and short-circuit the scan.

use tracing::warn;

use super::payload::{RiskAssessment, RiskLevel};

const HIGH_RISK_TRIGGERS: &[&str] = &[
    "kill myself",
    "suicide",
    "suicidal",
    "end it all",
    "end my life",
    "want to die",
    "better off dead",
    "self harm",
    "self-harm",
    "hurt myself",
    "no reason to live",
];

const MODERATE_RISK_TRIGGERS: &[&str] = &[
    "hopeless",
    "worthless",
    "give up",
    "can't go on",
    "no point",
    "trapped",
    "a burden",
    "can't take it",
];

const HIGH_RISK_RECOMMENDATION: &str = "I'm really concerned about what you've shared. \
     Please reach out to a crisis counselor right now. You don't have to go through this alone.";

const HIGH_RISK_RESOURCES: &[&str] = &[
    "988 Suicide & Crisis Lifeline: call or text 988",
    "Crisis Text Line: text HOME to 741741",
];

const MODERATE_RISK_RECOMMENDATION: &str = "It sounds like you're carrying a lot right now. \
     Talking with a counselor could really help. Consider booking a session soon.";

const MODERATE_RISK_RESOURCES: &[&str] = &[
    "Campus counseling center",
    "Mental health support line",
];

const LOW_RISK_RECOMMENDATION: &str =
    "Keep taking care of yourself: rest, stay connected, and check in with how you feel.";

const LOW_RISK_RESOURCES: &[&str] = &["Self-care resources", "Wellness activities"];

/// Substring scanner for self-harm risk language
#[derive(Debug, Clone)]
pub struct RiskScanner {
    high: Vec<String>,
    moderate: Vec<String>,
}

impl Default for RiskScanner {
    fn default() -> Self {
        Self::new(HIGH_RISK_TRIGGERS, MODERATE_RISK_TRIGGERS)
    }
}

impl RiskScanner {
    pub fn new<S: AsRef<str>>(high: &[S], moderate: &[S]) -> Self {
        let lower = |list: &[S]| -> Vec<String> {
            list.iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };
        Self {
            high: lower(high),
            moderate: lower(moderate),
        }
    }

    /// Scan a message. Never fails; anything unmatched is `low`.
    pub fn assess(&self, message: &str) -> RiskAssessment {
        let text = message.to_lowercase();

        let matched = matches(&text, &self.high);
        if !matched.is_empty() {
            // The message itself is not logged.
            warn!(triggers = matched.len(), "High-risk language detected");
            return RiskAssessment {
                level: RiskLevel::High,
                recommendation: HIGH_RISK_RECOMMENDATION.to_string(),
                resources: to_owned(HIGH_RISK_RESOURCES),
                matched,
            };
        }

        let matched = matches(&text, &self.moderate);
        if !matched.is_empty() {
            return RiskAssessment {
                level: RiskLevel::Moderate,
                recommendation: MODERATE_RISK_RECOMMENDATION.to_string(),
                resources: to_owned(MODERATE_RISK_RESOURCES),
                matched,
            };
        }

        RiskAssessment {
            level: RiskLevel::Low,
            recommendation: LOW_RISK_RECOMMENDATION.to_string(),
            resources: to_owned(LOW_RISK_RESOURCES),
            matched: Vec::new(),
        }
    }
}

fn matches(text: &str, triggers: &[String]) -> Vec<String> {
    triggers
        .iter()
        .filter(|t| text.contains(t.as_str()))
        .cloned()
        .collect()
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
