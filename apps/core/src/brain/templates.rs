//! Canned counselor text.
//!
//! Response templates and coping strategies keyed by emotion, topic context
//! sentences, follow-up questions and the elevated-assessment sentence.

use super::lexicon::{Emotion, Topic};

const ANXIOUS_TEMPLATES: &[&str] = &[
    "It sounds like you're feeling anxious right now, and that's completely understandable.",
    "Anxiety can feel overwhelming, but you're not alone in this. Let's take it one step at a time.",
    "I hear that you're worried. Those feelings are valid, and there are ways to ease them.",
];

const DEPRESSED_TEMPLATES: &[&str] = &[
    "I'm sorry you're feeling this way. It takes courage to talk about feeling low.",
    "It sounds like things have been really heavy lately. Your feelings matter.",
    "Thank you for sharing this with me. Feeling down can be exhausting, and you deserve support.",
];

const ANGRY_TEMPLATES: &[&str] = &[
    "It sounds like you're really frustrated, and that's a natural reaction.",
    "Anger often tells us something important. Let's try to understand what's behind it.",
    "I can hear how upset you are. It's okay to feel angry.",
];

const EXCITED_TEMPLATES: &[&str] = &[
    "That's wonderful to hear! It sounds like something good is happening.",
    "I love hearing this energy! What's making you feel so positive?",
    "It's great that you're feeling excited. Moments like this are worth savoring.",
];

const CONFUSED_TEMPLATES: &[&str] = &[
    "It's okay to feel unsure. Let's try to untangle this together.",
    "Feeling confused is a normal part of working through something new.",
    "Uncertainty can be uncomfortable. Let's break things down into smaller pieces.",
];

const STRESSED_TEMPLATES: &[&str] = &[
    "It sounds like you're under a lot of pressure right now.",
    "Stress can build up quickly. Let's look at what might lighten the load.",
    "You're dealing with a lot. It's important to give yourself some breathing room.",
];

const TIRED_TEMPLATES: &[&str] = &[
    "It sounds like you're running on empty. Rest is not a luxury, it's a need.",
    "Feeling drained is your body and mind asking for a break.",
    "Being this tired makes everything harder. Let's think about how you can recharge.",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "Thank you for sharing that with me. I'm here to listen.",
    "I appreciate you reaching out. Tell me more about what's on your mind.",
    "I'm here for you. How have things been going lately?",
];

const ANXIOUS_STRATEGIES: &[&str] = &[
    "Try the 4-7-8 breathing technique: inhale for 4, hold for 7, exhale for 8",
    "Ground yourself with the 5-4-3-2-1 senses exercise",
    "Write down your worries and note which ones you can control",
    "Take a short walk to release nervous energy",
    "Limit caffeine and check in with your body",
];

const DEPRESSED_STRATEGIES: &[&str] = &[
    "Reach out to someone you trust, even with a short message",
    "Set one small, achievable goal for today",
    "Spend a few minutes outside in natural light",
    "Write down three things, however small, that went okay today",
    "Keep a gentle routine for meals and sleep",
];

const ANGRY_STRATEGIES: &[&str] = &[
    "Pause and take ten slow breaths before responding",
    "Channel the energy into physical activity",
    "Write out what you're feeling without sending it",
    "Step away from the situation for a few minutes",
    "Name the need underneath the anger",
];

const EXCITED_STRATEGIES: &[&str] = &[
    "Share your good news with someone you care about",
    "Write down what's going well so you can revisit it",
    "Use this energy to make progress on a goal",
    "Take a moment to savor how this feels",
];

const CONFUSED_STRATEGIES: &[&str] = &[
    "Break the problem into smaller questions",
    "Talk it through with a friend, mentor or counselor",
    "Write down what you know and what you still need to find out",
    "Give yourself permission not to have every answer yet",
];

const STRESSED_STRATEGIES: &[&str] = &[
    "Make a list and tackle the most important task first",
    "Use the Pomodoro technique: 25 minutes of focus, then a 5 minute break",
    "Practice progressive muscle relaxation",
    "Say no to one non-essential commitment this week",
    "Schedule short breaks throughout your day",
];

const TIRED_STRATEGIES: &[&str] = &[
    "Aim for a consistent sleep and wake time",
    "Take a 20 minute power nap if you can",
    "Drink some water and have a nourishing snack",
    "Reduce screen time for an hour before bed",
    "Do some light stretching to re-energize",
];

const GENERAL_STRATEGIES: &[&str] = &[
    "Practice deep breathing for a few minutes",
    "Go for a short walk outside",
    "Connect with a friend or family member",
    "Write in a journal about your day",
    "Do something small that you enjoy",
];

const ACADEMIC_CONTEXT: &str =
    "Academic pressure is something many students face, and it doesn't define your worth.";
const SOCIAL_CONTEXT: &str =
    "Relationships can be complicated, and it's natural for them to affect how we feel.";
const CAREER_CONTEXT: &str =
    "Thinking about your career path can bring a lot of uncertainty, and that's okay.";
const HEALTH_CONTEXT: &str =
    "Your physical health and your mental health are closely connected.";

/// Appended when a screening score is above the configured threshold.
pub const ASSESSMENT_SUPPORT: &str =
    "Based on your recent assessment, it might help to talk with a counselor who can offer more support.";

pub const FOLLOW_UP_QUESTIONS: [&str; 5] = [
    "Would you like to talk more about what's been going on?",
    "How long have you been feeling this way?",
    "What usually helps you when you feel like this?",
    "Is there someone in your life you feel comfortable talking to?",
    "What would make today a little bit easier for you?",
];

pub fn response_templates(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Anxious => ANXIOUS_TEMPLATES,
        Emotion::Depressed => DEPRESSED_TEMPLATES,
        Emotion::Angry => ANGRY_TEMPLATES,
        Emotion::Excited => EXCITED_TEMPLATES,
        Emotion::Confused => CONFUSED_TEMPLATES,
        Emotion::Stressed => STRESSED_TEMPLATES,
        Emotion::Tired => TIRED_TEMPLATES,
        Emotion::Neutral => NEUTRAL_TEMPLATES,
    }
}

/// Neutral falls back to the general list.
pub fn coping_strategies(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Anxious => ANXIOUS_STRATEGIES,
        Emotion::Depressed => DEPRESSED_STRATEGIES,
        Emotion::Angry => ANGRY_STRATEGIES,
        Emotion::Excited => EXCITED_STRATEGIES,
        Emotion::Confused => CONFUSED_STRATEGIES,
        Emotion::Stressed => STRESSED_STRATEGIES,
        Emotion::Tired => TIRED_STRATEGIES,
        Emotion::Neutral => GENERAL_STRATEGIES,
    }
}

pub fn topic_context(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::Academic => Some(ACADEMIC_CONTEXT),
        Topic::Social => Some(SOCIAL_CONTEXT),
        Topic::Career => Some(CAREER_CONTEXT),
        Topic::Health => Some(HEALTH_CONTEXT),
        Topic::General => None,
    }
}
