//! # Brain Module
//!
//! Rule-based counselor for MindCare. No model, no I/O: keyword lexicons,
//! canned templates and an injected RNG.
//!
//! ## Components
//! - `lexicon`: Emotion/topic labels and their trigger tables
//! - `classifier`: Emotion/topic scoring by substring containment
//! - `risk`: Self-harm risk keyword scan
//! - `templates`: Response templates, coping strategies, follow-ups
//! - `payload`: Output data structures
//! - `responder`: Main orchestrator

pub mod classifier;
pub mod lexicon;
pub mod payload;
pub mod responder;
pub mod risk;
pub mod templates;

pub use classifier::MoodClassifier;
pub use lexicon::{Emotion, Lexicon, Topic};
pub use payload::{
    AnalysisResult, AssessmentContext, MoodAnalysis, ResponsePayload, RiskAssessment, RiskLevel,
};
pub use responder::Responder;
pub use risk::RiskScanner;
