//! The structured report returned by the analysis model.
//!
//! Every field is mandatory. A reply missing one, or carrying an enum value
//! outside the listed variants, fails to decode and is treated as a failed
//! analysis; there is no partial report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Categorical stress level. Drives the dashboard tone and the safety notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the stress history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

impl Trend {
    pub const ALL: [Self; 3] = [Self::Increasing, Self::Stable, Self::Decreasing];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Stable => "Stable",
            Self::Decreasing => "Decreasing",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CopingReadiness {
    Low,
    Medium,
    High,
}

impl CopingReadiness {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for CopingReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Report sections
// ---------------------------------------------------------------------------

/// The model's echo of today's check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyCheckinSummary {
    pub date: String,
    pub self_reported_stress: f64,
    pub mood_word: String,
    pub sleep_quality: String,
    pub main_trigger: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StressAnalysis {
    pub current_score: f64,
    pub stress_level: StressLevel,
    pub trend: Trend,
    pub primary_triggers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryPoint {
    pub date: String,
    pub stress_score: f64,
}

/// Stress history in the order the model produced it. Never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StressGraph {
    pub history: Vec<HistoryPoint>,
    pub seven_day_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserProfile {
    pub emotional_state: String,
    pub primary_intent: String,
    pub coping_readiness: CopingReadiness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CopingSuggestion {
    pub title: String,
    pub description: String,
    pub duration_minutes: f64,
}

/// Curated content. `videos` are expected to be YouTube URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendations {
    pub videos: Vec<String>,
    pub shorts_reels: Vec<String>,
    pub shayari: Vec<String>,
    pub quotes: Vec<String>,
    pub standup: Vec<String>,
}

// ---------------------------------------------------------------------------
// AnalysisResponse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResponse {
    pub app_name: String,
    pub category: String,
    pub daily_checkin: DailyCheckinSummary,
    pub stress_analysis: StressAnalysis,
    pub stress_graph: StressGraph,
    pub user_profile: UserProfile,
    pub coping_suggestions: Vec<CopingSuggestion>,
    pub calming_message: String,
    pub recommendations: Recommendations,
}

impl AnalysisResponse {
    /// Whether the dashboard must point the user to professional support.
    #[must_use]
    pub fn requires_safety_notice(&self) -> bool {
        self.stress_analysis.stress_level == StressLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_response;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(StressLevel::Low, false)]
    #[case(StressLevel::Moderate, false)]
    #[case(StressLevel::High, true)]
    fn safety_notice_only_for_high(#[case] level: StressLevel, #[case] expected: bool) {
        assert_eq!(sample_response(level).requires_safety_notice(), expected);
    }

    #[test]
    fn enum_serde_names_match_as_str() {
        for level in StressLevel::ALL {
            assert_eq!(serde_json::to_value(level).unwrap(), level.as_str());
        }
        for trend in Trend::ALL {
            assert_eq!(serde_json::to_value(trend).unwrap(), trend.as_str());
        }
        for readiness in CopingReadiness::ALL {
            assert_eq!(serde_json::to_value(readiness).unwrap(), readiness.as_str());
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(serde_json::from_str::<StressLevel>("\"Severe\"").is_err());
        assert!(serde_json::from_str::<Trend>("\"Sideways\"").is_err());
    }

    #[test]
    fn missing_section_is_rejected() {
        let mut json = serde_json::to_value(sample_response(StressLevel::Low)).unwrap();
        json.as_object_mut().unwrap().remove("recommendations");
        assert!(serde_json::from_value::<AnalysisResponse>(json).is_err());
    }

    #[test]
    fn history_keeps_received_order() {
        let json = serde_json::json!([
            { "date": "Wed", "stress_score": 70 },
            { "date": "Mon", "stress_score": 40 },
        ]);
        let history: Vec<HistoryPoint> = serde_json::from_value(json).unwrap();
        let dates: Vec<&str> = history.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["Wed", "Mon"]);
    }

    #[test]
    fn integer_scores_decode_as_numbers() {
        let json = serde_json::json!({ "date": "Mon", "stress_score": 40 });
        let point: HistoryPoint = serde_json::from_value(json).unwrap();
        assert!((point.stress_score - 40.0).abs() < f64::EPSILON);
    }
}
