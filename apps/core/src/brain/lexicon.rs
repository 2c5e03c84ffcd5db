//! Emotion and topic lexicons.
//!
//! Static trigger tables used by the mood classifier. Built once on first use
//! and shared behind an `Arc`; nothing mutates them afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Emotion label.
///
/// Declaration order is the enumeration order used for tie-breaking: when two
/// emotions score the same, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxious,
    Depressed,
    Angry,
    Excited,
    Confused,
    Stressed,
    Tired,
    Neutral,
}

impl Emotion {
    /// All emotions in enumeration order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Anxious,
        Emotion::Depressed,
        Emotion::Angry,
        Emotion::Excited,
        Emotion::Confused,
        Emotion::Stressed,
        Emotion::Tired,
        Emotion::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anxious => "anxious",
            Emotion::Depressed => "depressed",
            Emotion::Angry => "angry",
            Emotion::Excited => "excited",
            Emotion::Confused => "confused",
            Emotion::Stressed => "stressed",
            Emotion::Tired => "tired",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Conversation topic label. Same ordering rule as [`Emotion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Academic,
    Social,
    Career,
    Health,
    General,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Academic,
        Topic::Social,
        Topic::Career,
        Topic::Health,
        Topic::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Academic => "academic",
            Topic::Social => "social",
            Topic::Career => "career",
            Topic::Health => "health",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

const ANXIOUS_TRIGGERS: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "worry",
    "nervous",
    "panic",
    "scared",
    "afraid",
    "overwhelmed",
    "fear",
];

const DEPRESSED_TRIGGERS: &[&str] = &[
    "sad",
    "depressed",
    "depression",
    "unhappy",
    "empty",
    "hopeless",
    "lonely",
    "miserable",
    "crying",
    "worthless",
];

const ANGRY_TRIGGERS: &[&str] = &[
    "angry",
    "furious",
    "annoyed",
    "frustrated",
    "irritated",
    "hate",
    "rage",
    "pissed",
];

const EXCITED_TRIGGERS: &[&str] = &[
    "excited",
    "happy",
    "thrilled",
    "amazing",
    "awesome",
    "can't wait",
    "pumped",
    "glad",
];

const CONFUSED_TRIGGERS: &[&str] = &[
    "confused",
    "unsure",
    "don't know",
    "uncertain",
    "unclear",
    "not sure",
    "puzzled",
    "lost",
];

const STRESSED_TRIGGERS: &[&str] = &[
    "stress",
    "stressed",
    "pressure",
    "deadline",
    "too much",
    "overloaded",
    "tense",
    "swamped",
];

const TIRED_TRIGGERS: &[&str] = &[
    "tired",
    "exhausted",
    "sleepy",
    "drained",
    "fatigued",
    "burned out",
    "burnt out",
    "worn out",
    "no energy",
];

const ACADEMIC_TRIGGERS: &[&str] = &[
    "exam",
    "test",
    "study",
    "class",
    "grade",
    "homework",
    "assignment",
    "professor",
    "school",
    "college",
    "university",
    "semester",
    "lecture",
    "gpa",
];

const SOCIAL_TRIGGERS: &[&str] = &[
    "friend",
    "family",
    "relationship",
    "partner",
    "roommate",
    "parents",
    "breakup",
    "lonely",
    "people",
];

const CAREER_TRIGGERS: &[&str] = &[
    "job",
    "career",
    "internship",
    "interview",
    "work",
    "resume",
    "boss",
    "salary",
];

const HEALTH_TRIGGERS: &[&str] = &[
    "sleep",
    "insomnia",
    "health",
    "sick",
    "eating",
    "appetite",
    "headache",
    "doctor",
    "pain",
];

/// Trigger tables for emotions and topics.
#[derive(Debug, Clone)]
pub struct Lexicon {
    emotions: Vec<(Emotion, Vec<String>)>,
    topics: Vec<(Topic, Vec<String>)>,
}

static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    let emotions = vec![
        (Emotion::Anxious, ANXIOUS_TRIGGERS),
        (Emotion::Depressed, DEPRESSED_TRIGGERS),
        (Emotion::Angry, ANGRY_TRIGGERS),
        (Emotion::Excited, EXCITED_TRIGGERS),
        (Emotion::Confused, CONFUSED_TRIGGERS),
        (Emotion::Stressed, STRESSED_TRIGGERS),
        (Emotion::Tired, TIRED_TRIGGERS),
    ];
    let topics = vec![
        (Topic::Academic, ACADEMIC_TRIGGERS),
        (Topic::Social, SOCIAL_TRIGGERS),
        (Topic::Career, CAREER_TRIGGERS),
        (Topic::Health, HEALTH_TRIGGERS),
    ];
    Arc::new(Lexicon::new(emotions, topics))
});

impl Lexicon {
    /// Build a lexicon from trigger lists.
    ///
    /// Entries are re-ordered into enumeration order and triggers are
    /// lowercased, so callers may pass them in any order or casing.
    /// Repeated entries for one label are merged into a single trigger list,
    /// keeping first-seen order. Entries for `Neutral` / `General` are
    /// dropped: those labels are fallbacks and never match directly.
    pub fn new<E, T>(emotions: Vec<(Emotion, E)>, topics: Vec<(Topic, T)>) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        Self {
            emotions: merge(emotions, Emotion::Neutral),
            topics: merge(topics, Topic::General),
        }
    }

    /// The built-in lexicon, shared process-wide.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Emotion trigger lists in enumeration order.
    pub fn emotions(&self) -> impl Iterator<Item = (Emotion, &[String])> {
        self.emotions.iter().map(|(e, t)| (*e, t.as_slice()))
    }

    /// Topic trigger lists in enumeration order.
    pub fn topics(&self) -> impl Iterator<Item = (Topic, &[String])> {
        self.topics.iter().map(|(t, triggers)| (*t, triggers.as_slice()))
    }

    pub fn emotion_triggers(&self, emotion: Emotion) -> &[String] {
        self.emotions
            .iter()
            .find(|(e, _)| *e == emotion)
            .map(|(_, t)| t.as_slice())
            .unwrap_or(&[])
    }
}

/// Group trigger lists by label in enumeration order, skipping `fallback`.
fn merge<L, I>(entries: Vec<(L, I)>, fallback: L) -> Vec<(L, Vec<String>)>
where
    L: Ord + Copy,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut merged: BTreeMap<L, Vec<String>> = BTreeMap::new();
    for (label, triggers) in entries {
        if label == fallback {
            continue;
        }
        let list = merged.entry(label).or_default();
        for trigger in triggers {
            let trigger = trigger.as_ref().trim().to_lowercase();
            // An empty trigger is contained in every message.
            if !trigger.is_empty() && !list.contains(&trigger) {
                list.push(trigger);
            }
        }
    }
    merged.into_iter().collect()
}
