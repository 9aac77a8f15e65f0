//! Shared fixtures for unit tests in this crate.

use crate::assessment::{DailyCheckinAnswers, FormAnswers, OnboardingAnswers, StressRating};
use crate::question::QuestionKind;
use crate::response::{
    AnalysisResponse, CopingReadiness, CopingSuggestion, DailyCheckinSummary, HistoryPoint,
    Recommendations, StressAnalysis, StressGraph, StressLevel, Trend, UserProfile,
};
use crate::wizard::Questionnaire;

pub fn filled_answers() -> FormAnswers {
    FormAnswers {
        onboarding: OnboardingAnswers {
            life_pressure: "Exams approaching".into(),
            sleep_quality: "Light or restless".into(),
            mood: "Anxious".into(),
            motivation: "Focused on goals".into(),
            biggest_worry: "Failing finals".into(),
            energy_level: "Sluggish in the morning".into(),
            work_life_balance: "Working on it".into(),
        },
        daily_checkin: DailyCheckinAnswers {
            self_reported_stress: StressRating::default(),
            mood_trigger: "Work or studies".into(),
            sleep_last_night: "Interrupted".into(),
            day_word: "Exhausting".into(),
        },
    }
}

/// Fill the current question with something valid.
pub fn answer_current(wizard: &mut Questionnaire) {
    match wizard.question().kind {
        QuestionKind::FreeText { .. } => {
            wizard.set_text("Something honest");
        }
        QuestionKind::SingleChoice { .. } => {
            wizard.select_option(0);
        }
        QuestionKind::NumericRange { .. } => {}
    }
}

pub fn sample_response(level: StressLevel) -> AnalysisResponse {
    AnalysisResponse {
        app_name: "MindGuard".into(),
        category: "Student".into(),
        daily_checkin: DailyCheckinSummary {
            date: "2026-10-16".into(),
            self_reported_stress: 5.0,
            mood_word: "Exhausting".into(),
            sleep_quality: "Interrupted".into(),
            main_trigger: "Work or studies".into(),
        },
        stress_analysis: StressAnalysis {
            current_score: 55.0,
            stress_level: level,
            trend: Trend::Stable,
            primary_triggers: vec!["Exams".into(), "Sleep debt".into()],
        },
        stress_graph: StressGraph {
            history: vec![
                HistoryPoint {
                    date: "Mon".into(),
                    stress_score: 40.0,
                },
                HistoryPoint {
                    date: "Tue".into(),
                    stress_score: 60.0,
                },
            ],
            seven_day_average: 50.4,
        },
        user_profile: UserProfile {
            emotional_state: "Overwhelmed but hopeful".into(),
            primary_intent: "Regain focus".into(),
            coping_readiness: CopingReadiness::Medium,
        },
        coping_suggestions: vec![CopingSuggestion {
            title: "Box breathing".into(),
            description: "Inhale 4, hold 4, exhale 4, hold 4.".into(),
            duration_minutes: 5.0,
        }],
        calming_message: "You are doing better than you think.".into(),
        recommendations: Recommendations {
            videos: vec!["https://www.youtube.com/watch?v=inpok4MKVLM".into()],
            shorts_reels: vec![],
            shayari: vec!["Raat kitni bhi lambi ho, subah zaroor hoti hai.".into()],
            quotes: vec!["This too shall pass.".into()],
            standup: vec![],
        },
    }
}
