//! # mg-core
//!
//! Core types for MindGuard.
//!
//! This crate provides the foundational types shared across all MindGuard crates:
//! - The user [`Category`] chosen on the welcome screen
//! - Typed form answers and the [`AssessmentRequest`] sent for analysis
//! - The fixed question descriptors and the [`Questionnaire`] wizard
//! - The [`AnalysisResponse`] contract returned by the external model
//! - The top-level [`Session`] state machine
//! - Cross-cutting error types

pub mod assessment;
pub mod category;
pub mod errors;
pub mod question;
pub mod response;
pub mod session;
pub mod wizard;

#[cfg(test)]
pub(crate) mod test_support;

pub use assessment::{
    AssessmentRequest, DailyCheckinAnswers, FormAnswers, OnboardingAnswers, StressRating,
};
pub use category::Category;
pub use errors::CoreError;
pub use question::{Answer, Phase, QUESTIONS, Question, QuestionKey, QuestionKind};
pub use response::{
    AnalysisResponse, CopingReadiness, CopingSuggestion, DailyCheckinSummary, HistoryPoint,
    Recommendations, StressAnalysis, StressGraph, StressLevel, Trend, UserProfile,
};
pub use session::{ANALYSIS_FAILED_NOTICE, Advance, Screen, Session};
pub use wizard::{Questionnaire, WizardStep};
