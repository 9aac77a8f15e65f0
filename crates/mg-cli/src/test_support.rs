//! Fixtures shared by the binary's unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use mg_core::{
    AnalysisResponse, AssessmentRequest, Category, CopingReadiness, CopingSuggestion,
    DailyCheckinAnswers, DailyCheckinSummary, HistoryPoint, OnboardingAnswers, Recommendations,
    StressAnalysis, StressGraph, StressLevel, StressRating, Trend, UserProfile,
};
use mg_gateway::{AnalysisGateway, GatewayError};

pub fn sample_request() -> AssessmentRequest {
    AssessmentRequest {
        category: Category::Student,
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
            videos: vec!["Guided breathing for exam nights".into()],
            shorts_reels: vec![],
            shayari: vec!["Raat kitni bhi lambi ho, subah zaroor hoti hai.".into()],
            quotes: vec!["This too shall pass.".into()],
            standup: vec![],
        },
    }
}

/// A report with long, multi-sentence entries everywhere the model writes
/// prose, so the dashboard wraps well past one screen.
pub fn verbose_response(level: StressLevel) -> AnalysisResponse {
    let long = |topic: &str| {
        format!(
            "{topic}: take a slow moment for yourself, notice what your body is telling you, \
             and let the next small step be enough for today without judging how far you got."
        )
    };
    let three = |kind: &str| (1..=3).map(|n| long(&format!("{kind} {n}"))).collect();

    let mut report = sample_response(level);
    report.coping_suggestions = (1..=4)
        .map(|n| CopingSuggestion {
            title: format!("Practice {n}"),
            description: long("Why it helps"),
            duration_minutes: 10.0,
        })
        .collect();
    report.calming_message = long("Breathe");
    report.recommendations = Recommendations {
        videos: three("Video"),
        shorts_reels: three("Reel"),
        shayari: three("Shayari"),
        quotes: three("Quote"),
        standup: three("Bit"),
    };
    report
}

/// Gateway double: answers with a fixed report or a fixed failure and
/// records every request it sees.
pub struct StubGateway {
    reply: Result<AnalysisResponse, u16>,
    pub seen: Mutex<Vec<AssessmentRequest>>,
}

impl StubGateway {
    pub fn ok(level: StressLevel) -> Self {
        Self {
            reply: Ok(sample_response(level)),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(report: AnalysisResponse) -> Self {
        Self {
            reply: Ok(report),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisGateway for StubGateway {
    fn name(&self) -> &str {
        "stub"
    }

    async fn analyze(
        &self,
        request: &AssessmentRequest,
    ) -> Result<AnalysisResponse, GatewayError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(report) => Ok(report.clone()),
            Err(status) => Err(GatewayError::Api {
                status: *status,
                message: "stubbed failure".into(),
            }),
        }
    }
}
