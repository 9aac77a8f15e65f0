//! Fixed question descriptors for the questionnaire.
//!
//! Each [`Question`] pairs a [`QuestionKey`] (which form field it fills) with
//! a [`QuestionKind`] (how it is answered). The key resolves to typed
//! accessors on [`FormAnswers`], so the wizard never looks fields up by name.
//!
//! ```text
//! index: 0 ........ 6 | 7 ........ 10
//!        onboarding   | daily check-in
//! ```

use crate::assessment::{FormAnswers, StressRating};

/// Which half of the questionnaire a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Onboarding,
    DailyCheckin,
}

impl Phase {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Onboarding => "Onboarding",
            Self::DailyCheckin => "Daily Check-in",
        }
    }
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    FreeText { placeholder: &'static str },
    SingleChoice { options: &'static [&'static str] },
    NumericRange { min: u8, max: u8 },
}

/// The form field a question fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKey {
    LifePressure,
    SleepQuality,
    Mood,
    Motivation,
    BiggestWorry,
    EnergyLevel,
    WorkLifeBalance,
    SelfReportedStress,
    MoodTrigger,
    SleepLastNight,
    DayWord,
}

/// Read-only view of one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Text(&'a str),
    Rating(StressRating),
}

impl Answer<'_> {
    /// Blank text counts as empty; a rating never does.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Rating(_) => false,
        }
    }
}

impl QuestionKey {
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::LifePressure
            | Self::SleepQuality
            | Self::Mood
            | Self::Motivation
            | Self::BiggestWorry
            | Self::EnergyLevel
            | Self::WorkLifeBalance => Phase::Onboarding,
            Self::SelfReportedStress | Self::MoodTrigger | Self::SleepLastNight | Self::DayWord => {
                Phase::DailyCheckin
            }
        }
    }

    /// Read this field from the form.
    #[must_use]
    pub fn answer(self, answers: &FormAnswers) -> Answer<'_> {
        let onboarding = &answers.onboarding;
        let daily = &answers.daily_checkin;
        match self {
            Self::LifePressure => Answer::Text(&onboarding.life_pressure),
            Self::SleepQuality => Answer::Text(&onboarding.sleep_quality),
            Self::Mood => Answer::Text(&onboarding.mood),
            Self::Motivation => Answer::Text(&onboarding.motivation),
            Self::BiggestWorry => Answer::Text(&onboarding.biggest_worry),
            Self::EnergyLevel => Answer::Text(&onboarding.energy_level),
            Self::WorkLifeBalance => Answer::Text(&onboarding.work_life_balance),
            Self::SelfReportedStress => Answer::Rating(daily.self_reported_stress),
            Self::MoodTrigger => Answer::Text(&daily.mood_trigger),
            Self::SleepLastNight => Answer::Text(&daily.sleep_last_night),
            Self::DayWord => Answer::Text(&daily.day_word),
        }
    }

    /// Mutable access to a text field. `None` for the rating.
    pub fn text_mut(self, answers: &mut FormAnswers) -> Option<&mut String> {
        let onboarding = &mut answers.onboarding;
        let daily = &mut answers.daily_checkin;
        match self {
            Self::LifePressure => Some(&mut onboarding.life_pressure),
            Self::SleepQuality => Some(&mut onboarding.sleep_quality),
            Self::Mood => Some(&mut onboarding.mood),
            Self::Motivation => Some(&mut onboarding.motivation),
            Self::BiggestWorry => Some(&mut onboarding.biggest_worry),
            Self::EnergyLevel => Some(&mut onboarding.energy_level),
            Self::WorkLifeBalance => Some(&mut onboarding.work_life_balance),
            Self::SelfReportedStress => None,
            Self::MoodTrigger => Some(&mut daily.mood_trigger),
            Self::SleepLastNight => Some(&mut daily.sleep_last_night),
            Self::DayWord => Some(&mut daily.day_word),
        }
    }

    /// Mutable access to the rating field. `None` for text fields.
    pub fn rating_mut(self, answers: &mut FormAnswers) -> Option<&mut StressRating> {
        match self {
            Self::SelfReportedStress => Some(&mut answers.daily_checkin.self_reported_stress),
            _ => None,
        }
    }
}

/// A single question descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: QuestionKey,
    pub label: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.key.phase()
    }

    /// Options for a single-choice question, empty otherwise.
    #[must_use]
    pub const fn options(&self) -> &'static [&'static str] {
        match self.kind {
            QuestionKind::SingleChoice { options } => options,
            _ => &[],
        }
    }
}

/// Number of onboarding questions; the daily check-in starts at this index.
pub const ONBOARDING_COUNT: usize = 7;

const SLEEP_QUALITY_OPTIONS: &[&str] = &[
    "Deep and restful",
    "Decent, around 7-8 hours",
    "Light or restless",
    "Short, under 6 hours",
    "Irregular or interrupted",
];

const ENERGY_LEVEL_OPTIONS: &[&str] = &[
    "Steady all day",
    "Sluggish in the morning",
    "Crash in the afternoon",
    "Peak at night",
    "Drained most of the day",
];

const MOOD_TRIGGER_OPTIONS: &[&str] = &[
    "Work or studies",
    "A conversation",
    "Family",
    "Relationship",
    "Money",
    "Health",
    "Traffic or commute",
    "A task finished",
    "Social media",
    "Nothing in particular",
];

const SLEEP_LAST_NIGHT_OPTIONS: &[&str] = &[
    "Better than usual",
    "Same as usual",
    "Interrupted",
    "Poor",
    "Barely slept",
];

/// The questionnaire, in order.
pub const QUESTIONS: [Question; 11] = [
    Question {
        key: QuestionKey::LifePressure,
        label: "How would you describe your current life pressure?",
        kind: QuestionKind::FreeText {
            placeholder: "e.g., Heavy work deadlines, exams approaching, family issues...",
        },
    },
    Question {
        key: QuestionKey::SleepQuality,
        label: "Generally, how has your sleep quality been lately?",
        kind: QuestionKind::SingleChoice {
            options: SLEEP_QUALITY_OPTIONS,
        },
    },
    Question {
        key: QuestionKey::Mood,
        label: "What is your primary mood most days?",
        kind: QuestionKind::FreeText {
            placeholder: "e.g., Anxious, content, irritable, optimistic...",
        },
    },
    Question {
        key: QuestionKey::Motivation,
        label: "How motivated do you feel right now?",
        kind: QuestionKind::FreeText {
            placeholder: "e.g., Hard to get out of bed, high energy, focused on goals...",
        },
    },
    Question {
        key: QuestionKey::BiggestWorry,
        label: "What is your biggest worry at the moment?",
        kind: QuestionKind::FreeText {
            placeholder: "Be as honest as you feel comfortable...",
        },
    },
    Question {
        key: QuestionKey::EnergyLevel,
        label: "Describe your physical energy levels throughout the day.",
        kind: QuestionKind::SingleChoice {
            options: ENERGY_LEVEL_OPTIONS,
        },
    },
    Question {
        key: QuestionKey::WorkLifeBalance,
        label: "How is your work-life (or study-life) balance?",
        kind: QuestionKind::FreeText {
            placeholder: "e.g., Non-existent, decent, working on it...",
        },
    },
    Question {
        key: QuestionKey::SelfReportedStress,
        label: "How stressed do you feel right now? (1-10)",
        kind: QuestionKind::NumericRange {
            min: StressRating::MIN,
            max: StressRating::MAX,
        },
    },
    Question {
        key: QuestionKey::MoodTrigger,
        label: "What affected your mood the most today?",
        kind: QuestionKind::SingleChoice {
            options: MOOD_TRIGGER_OPTIONS,
        },
    },
    Question {
        key: QuestionKey::SleepLastNight,
        label: "How was your sleep last night?",
        kind: QuestionKind::SingleChoice {
            options: SLEEP_LAST_NIGHT_OPTIONS,
        },
    },
    Question {
        key: QuestionKey::DayWord,
        label: "One word to describe your today?",
        kind: QuestionKind::FreeText {
            placeholder: "e.g., Productive, exhausting, peaceful...",
        },
    },
];
