//! Typed form answers and the assessment request sent for analysis.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::CoreError;
use crate::question::{QUESTIONS, QuestionKind};

// ---------------------------------------------------------------------------
// StressRating
// ---------------------------------------------------------------------------

/// Self-reported stress on a 1–10 scale. Cannot hold an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StressRating(u8);

impl StressRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 5;

    /// Build a rating, rejecting values outside `1..=10`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `value` is out of range.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::Validation(format!(
                "stress rating must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Build a rating, clamping into `1..=10`.
    #[must_use]
    pub fn clamped(value: i16) -> Self {
        let clamped = value.clamp(i16::from(Self::MIN), i16::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::DEFAULT))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Move the rating by `delta`, saturating at the bounds.
    #[must_use]
    pub fn offset(self, delta: i16) -> Self {
        Self::clamped(i16::from(self.0) + delta)
    }
}

impl Default for StressRating {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for StressRating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StressRating> for u8 {
    fn from(rating: StressRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StressRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl JsonSchema for StressRating {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("StressRating")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1,
            "maximum": 10
        })
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// One-time broad self-assessment collected before the daily check-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OnboardingAnswers {
    pub life_pressure: String,
    pub sleep_quality: String,
    pub mood: String,
    pub motivation: String,
    pub biggest_worry: String,
    pub energy_level: String,
    pub work_life_balance: String,
}

/// Short, repeatable subset of questions assumed to vary day-to-day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DailyCheckinAnswers {
    pub self_reported_stress: StressRating,
    pub mood_trigger: String,
    pub sleep_last_night: String,
    pub day_word: String,
}

/// Everything the questionnaire collects, before the category is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAnswers {
    pub onboarding: OnboardingAnswers,
    pub daily_checkin: DailyCheckinAnswers,
}

impl FormAnswers {
    /// Question labels whose answer is still blank.
    #[must_use]
    pub fn unanswered(&self) -> Vec<&'static str> {
        QUESTIONS
            .iter()
            .filter(|question| !matches!(question.kind, QuestionKind::NumericRange { .. }))
            .filter(|question| question.key.answer(self).is_empty())
            .map(|question| question.label)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// AssessmentRequest
// ---------------------------------------------------------------------------

/// The sole input to the analysis gateway. Built once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentRequest {
    pub category: Category,
    pub onboarding: OnboardingAnswers,
    pub daily_checkin: DailyCheckinAnswers,
}

impl AssessmentRequest {
    #[must_use]
    pub fn new(category: Category, answers: FormAnswers) -> Self {
        Self {
            category,
            onboarding: answers.onboarding,
            daily_checkin: answers.daily_checkin,
        }
    }

    /// Check that every free-text and choice answer is filled in.
    ///
    /// Requests built by the wizard always pass; this guards requests read
    /// from outside (e.g. `mindguard analyze --input`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] listing the blank questions.
    pub fn validate(&self) -> Result<(), CoreError> {
        let answers = FormAnswers {
            onboarding: self.onboarding.clone(),
            daily_checkin: self.daily_checkin.clone(),
        };
        let missing = answers.unanswered();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "unanswered questions: {}",
                missing.join("; ")
            )))
        }
    }
}
