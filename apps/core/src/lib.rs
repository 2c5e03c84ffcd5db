//! MindCare Core
//!
//! Rule-based counselor and screening toolkit: emotion/topic classification,
//! risk keyword scanning, canned response selection and PHQ-9 / GAD-7 score
//! interpretation. Synchronous and stateless; the only non-determinism is an
//! injectable RNG used for presentation text.

pub mod assessment;
pub mod brain;
pub mod config;
pub mod education;
pub mod error;
pub mod logging;

pub use assessment::{score_responses, wellness_percentage, AssessmentScore};
pub use brain::{
    AnalysisResult, AssessmentContext, Emotion, Lexicon, MoodClassifier, Responder,
    ResponsePayload, RiskAssessment, RiskLevel, Topic,
};
pub use config::{CounselorConfig, LogFormat};
pub use education::{Instrument, MentalHealthEducator, ScoreBand, WellnessBand};
pub use error::AppError;

#[cfg(test)]
mod tests;
