//! Mental health education content.
//!
//! Static descriptions of common conditions plus score interpretation for the
//! PHQ-9 and GAD-7 screening instruments and the overall wellness percentage.
//! Everything here is a table lookup; nothing is computed beyond banding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{AppError, Result};

/// Screening instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    /// 9-item depression scale, total 0-27
    #[serde(rename = "PHQ-9")]
    Phq9,
    /// 7-item anxiety scale, total 0-21
    #[serde(rename = "GAD-7")]
    Gad7,
}

impl Instrument {
    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Phq9 => "PHQ-9",
            Instrument::Gad7 => "GAD-7",
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            Instrument::Phq9 => 9,
            Instrument::Gad7 => 7,
        }
    }

    /// Highest attainable total (each item scores 0-3).
    pub fn max_score(&self) -> u32 {
        self.item_count() as u32 * 3
    }

    /// Contiguous half-open bands covering `0..=max_score`.
    pub fn bands(&self) -> &'static [Band] {
        match self {
            Instrument::Phq9 => PHQ9_BANDS,
            Instrument::Gad7 => GAD7_BANDS,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Instrument {
    type Err = AppError;

    /// Accepts "PHQ-9", "phq9", "Phq_9", "GAD-7", "gad7", ...
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "phq9" => Ok(Instrument::Phq9),
            "gad7" => Ok(Instrument::Gad7),
            _ => Err(AppError::Validation(format!("Unknown instrument: {}", s))),
        }
    }
}

/// Score band `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min: u32,
    pub max: u32,
    pub level: &'static str,
    pub description: &'static str,
}

impl Band {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score < self.max
    }
}

const PHQ9_BANDS: &[Band] = &[
    Band {
        min: 0,
        max: 5,
        level: "Minimal",
        description: "Minimal or no depression symptoms. Keep up your healthy habits.",
    },
    Band {
        min: 5,
        max: 10,
        level: "Mild",
        description: "Mild depression symptoms. Self-care and monitoring are recommended.",
    },
    Band {
        min: 10,
        max: 15,
        level: "Moderate",
        description: "Moderate depression symptoms. Consider talking with a counselor.",
    },
    Band {
        min: 15,
        max: 20,
        level: "Moderately Severe",
        description: "Moderately severe depression symptoms. Professional support is strongly recommended.",
    },
    Band {
        min: 20,
        max: 28,
        level: "Severe",
        description: "Severe depression symptoms. Please reach out to a mental health professional promptly.",
    },
];

const GAD7_BANDS: &[Band] = &[
    Band {
        min: 0,
        max: 5,
        level: "Minimal",
        description: "Minimal anxiety. Continue practicing healthy coping strategies.",
    },
    Band {
        min: 5,
        max: 10,
        level: "Mild",
        description: "Mild anxiety. Relaxation techniques and self-care may help.",
    },
    Band {
        min: 10,
        max: 15,
        level: "Moderate",
        description: "Moderate anxiety. Consider speaking with a counselor.",
    },
    Band {
        min: 15,
        max: 22,
        level: "Severe",
        description: "Severe anxiety. Professional support is strongly recommended.",
    },
];

/// Interpretation of a single score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub level: String,
    pub description: String,
}

impl From<&Band> for ScoreBand {
    fn from(band: &Band) -> Self {
        Self {
            level: band.level.to_string(),
            description: band.description.to_string(),
        }
    }
}

/// Interpretation of the overall wellness percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessBand {
    pub level: String,
    pub description: String,
    pub recommendations: Vec<String>,
}

struct WellnessTier {
    min: f32,
    level: &'static str,
    description: &'static str,
    recommendations: &'static [&'static str],
}

// Descending by `min`; the first tier whose min is <= the value wins.
const WELLNESS_TIERS: &[WellnessTier] = &[
    WellnessTier {
        min: 80.0,
        level: "Excellent",
        description: "Your overall wellness looks strong.",
        recommendations: &[
            "Keep up your current routines",
            "Share what works for you with friends",
            "Check in with yourself regularly",
        ],
    },
    WellnessTier {
        min: 60.0,
        level: "Good",
        description: "You're doing well, with a few areas to keep an eye on.",
        recommendations: &[
            "Maintain regular sleep and exercise",
            "Make time for activities you enjoy",
            "Reach out if things start to feel heavier",
        ],
    },
    WellnessTier {
        min: 40.0,
        level: "Fair",
        description: "Some areas of your wellbeing could use attention.",
        recommendations: &[
            "Try a daily relaxation or mindfulness practice",
            "Talk to someone you trust about how you feel",
            "Consider a check-in with a counselor",
        ],
    },
    WellnessTier {
        min: 0.0,
        level: "Needs Attention",
        description: "Your responses suggest you're going through a difficult time.",
        recommendations: &[
            "Book a session with a counselor",
            "Lean on your support network",
            "If you feel unsafe, contact a crisis line right away",
        ],
    },
];

/// Descriptive content for one condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionInfo {
    pub title: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub coping: Vec<String>,
    pub myths: Vec<MythFact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MythFact {
    pub myth: String,
    pub fact: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn myths(pairs: &[(&str, &str)]) -> Vec<MythFact> {
    pairs
        .iter()
        .map(|(myth, fact)| MythFact {
            myth: myth.to_string(),
            fact: fact.to_string(),
        })
        .collect()
}

static CONDITIONS: LazyLock<Vec<(&'static str, ConditionInfo)>> = LazyLock::new(|| {
    vec![
        (
            "depression",
            ConditionInfo {
                title: "Depression".to_string(),
                description: "Depression is a common mood disorder that affects how you feel, \
                              think and handle daily activities."
                    .to_string(),
                symptoms: strings(&[
                    "Persistent sad, anxious or empty mood",
                    "Loss of interest in activities you used to enjoy",
                    "Changes in sleep or appetite",
                    "Fatigue or low energy",
                    "Difficulty concentrating",
                    "Feelings of worthlessness or guilt",
                ]),
                causes: strings(&[
                    "Genetic and family history",
                    "Stressful life events",
                    "Medical conditions and medications",
                    "Changes in brain chemistry",
                ]),
                coping: strings(&[
                    "Stay connected with people you trust",
                    "Keep a regular routine",
                    "Get some physical activity each day",
                    "Talk to a counselor or doctor",
                ]),
                myths: myths(&[
                    (
                        "Depression is just sadness.",
                        "Depression is a medical condition that affects mood, thinking and the body.",
                    ),
                    (
                        "You can just snap out of it.",
                        "Recovery usually takes time, support and sometimes treatment.",
                    ),
                ]),
            },
        ),
        (
            "anxiety",
            ConditionInfo {
                title: "Anxiety".to_string(),
                description: "Anxiety disorders involve persistent, excessive worry that \
                              interferes with daily life."
                    .to_string(),
                symptoms: strings(&[
                    "Feeling restless or on edge",
                    "Racing thoughts or constant worry",
                    "Rapid heartbeat or shortness of breath",
                    "Trouble sleeping",
                    "Avoiding situations that trigger worry",
                ]),
                causes: strings(&[
                    "Genetics and temperament",
                    "Ongoing stress or trauma",
                    "Health conditions",
                    "Substance use including caffeine",
                ]),
                coping: strings(&[
                    "Practice slow, deep breathing",
                    "Use grounding exercises",
                    "Limit caffeine",
                    "Challenge anxious thoughts with evidence",
                ]),
                myths: myths(&[
                    (
                        "Anxiety is not a real illness.",
                        "Anxiety disorders are among the most common mental health conditions.",
                    ),
                    (
                        "Avoiding triggers is the best way to cope.",
                        "Avoidance often makes anxiety stronger over time.",
                    ),
                ]),
            },
        ),
        (
            "stress",
            ConditionInfo {
                title: "Stress".to_string(),
                description: "Stress is the body's response to pressure. Short bursts can help, \
                              but long-term stress can affect health."
                    .to_string(),
                symptoms: strings(&[
                    "Irritability or feeling overwhelmed",
                    "Headaches or muscle tension",
                    "Trouble sleeping",
                    "Difficulty focusing",
                ]),
                causes: strings(&[
                    "Academic or work pressure",
                    "Financial worries",
                    "Relationship problems",
                    "Major life changes",
                ]),
                coping: strings(&[
                    "Break tasks into smaller steps",
                    "Schedule regular breaks",
                    "Exercise and sleep well",
                    "Talk about what's on your mind",
                ]),
                myths: myths(&[
                    (
                        "Stress is always bad.",
                        "Some stress can motivate you; chronic stress is what causes harm.",
                    ),
                    (
                        "Only major problems cause stress.",
                        "Small daily hassles can add up just as much.",
                    ),
                ]),
            },
        ),
    ]
});

/// Static educational lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct MentalHealthEducator;

impl MentalHealthEducator {
    pub fn new() -> Self {
        Self
    }

    /// Look up a condition by name (case-insensitive). `None` if unknown.
    pub fn condition(&self, name: &str) -> Option<&'static ConditionInfo> {
        let key = name.trim().to_lowercase();
        CONDITIONS
            .iter()
            .find(|(id, _)| *id == key)
            .map(|(_, info)| info)
    }

    pub fn condition_names(&self) -> Vec<&'static str> {
        CONDITIONS.iter().map(|(id, _)| *id).collect()
    }

    /// Interpret a screening total. Scores above the instrument's maximum
    /// fall into the top band.
    pub fn explain_score(&self, instrument: Instrument, score: u32) -> ScoreBand {
        let bands = instrument.bands();
        let band = bands
            .iter()
            .find(|band| band.contains(score))
            .or_else(|| bands.last())
            .unwrap_or(&bands[0]);
        ScoreBand::from(band)
    }

    /// Interpret a wellness percentage. Values are clamped to 0-100; NaN reads as 0.
    pub fn band_wellness(&self, percentage: f32) -> WellnessBand {
        let value = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 100.0)
        };

        let tier = WELLNESS_TIERS
            .iter()
            .find(|tier| value >= tier.min)
            .unwrap_or(&WELLNESS_TIERS[WELLNESS_TIERS.len() - 1]);

        WellnessBand {
            level: tier.level.to_string(),
            description: tier.description.to_string(),
            recommendations: strings(tier.recommendations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phq9_boundaries() {
        let educator = MentalHealthEducator::new();

        assert_eq!(educator.explain_score(Instrument::Phq9, 0).level, "Minimal");
        assert_eq!(educator.explain_score(Instrument::Phq9, 4).level, "Minimal");
        assert_eq!(educator.explain_score(Instrument::Phq9, 5).level, "Mild");
        assert_eq!(educator.explain_score(Instrument::Phq9, 14).level, "Moderate");
        assert_eq!(educator.explain_score(Instrument::Phq9, 15).level, "Moderately Severe");
        assert_eq!(educator.explain_score(Instrument::Phq9, 27).level, "Severe");
    }

    #[test]
    fn test_out_of_range_saturates() {
        let educator = MentalHealthEducator::new();

        assert_eq!(educator.explain_score(Instrument::Phq9, 99).level, "Severe");
        assert_eq!(educator.explain_score(Instrument::Gad7, 22).level, "Severe");
    }

    #[test]
    fn test_instrument_parse() {
        assert_eq!("PHQ-9".parse::<Instrument>().unwrap(), Instrument::Phq9);
        assert_eq!("phq9".parse::<Instrument>().unwrap(), Instrument::Phq9);
        assert_eq!("gad_7".parse::<Instrument>().unwrap(), Instrument::Gad7);
        assert!(matches!(
            "BDI".parse::<Instrument>(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_wellness_bands() {
        let educator = MentalHealthEducator::new();

        assert_eq!(educator.band_wellness(85.0).level, "Excellent");
        assert_eq!(educator.band_wellness(80.0).level, "Excellent");
        assert_eq!(educator.band_wellness(79.9).level, "Good");
        assert_eq!(educator.band_wellness(40.0).level, "Fair");
        assert_eq!(educator.band_wellness(12.0).level, "Needs Attention");
        assert_eq!(educator.band_wellness(150.0).level, "Excellent");
        assert_eq!(educator.band_wellness(-3.0).level, "Needs Attention");
        assert_eq!(educator.band_wellness(f32::NAN).level, "Needs Attention");
        assert_eq!(educator.band_wellness(50.0).recommendations.len(), 3);
    }

    #[test]
    fn test_condition_lookup() {
        let educator = MentalHealthEducator::new();

        let info = educator.condition("Anxiety").unwrap();
        assert_eq!(info.title, "Anxiety");
        assert!(!info.symptoms.is_empty());
        assert!(!info.myths.is_empty());
        assert!(educator.condition("unknown").is_none());
    }
}
