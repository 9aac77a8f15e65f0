//! Results dashboard view model.
//!
//! [`DashboardView::from_report`] is a pure projection of an
//! [`AnalysisResponse`]; the ratatui screen and the plain-text report both
//! render from it, so they always agree on what is shown.

pub mod text;

use mg_core::{AnalysisResponse, CopingReadiness, HistoryPoint, StressLevel, Trend};

pub const GREETING: &str = "Hi there, friend.";

pub const SAFETY_TITLE: &str = "Please remember...";
pub const SAFETY_BODY: &str = "Since your stress is currently high, it might be helpful to reach out to a trusted professional or counselor. MindGuard is a companion, but professional support is invaluable when things get heavy.";

/// Width of a history bar at a score of 100.
pub const BAR_WIDTH: usize = 20;

/// Semantic colour class, mapped to concrete styles by each renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Calm,
    Caution,
    Alert,
    Muted,
}

impl Tone {
    #[must_use]
    pub const fn for_level(level: StressLevel) -> Self {
        match level {
            StressLevel::Low => Self::Calm,
            StressLevel::Moderate => Self::Caution,
            StressLevel::High => Self::Alert,
        }
    }

    #[must_use]
    pub const fn for_trend(trend: Trend) -> Self {
        match trend {
            Trend::Increasing => Self::Alert,
            Trend::Decreasing => Self::Calm,
            Trend::Stable => Self::Muted,
        }
    }
}

#[must_use]
pub const fn trend_glyph(trend: Trend) -> &'static str {
    match trend {
        Trend::Increasing => "↗",
        Trend::Stable => "→",
        Trend::Decreasing => "↘",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionView {
    pub title: String,
    pub description: String,
    pub minutes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentGroup {
    pub title: &'static str,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub app_name: String,
    pub category: String,
    pub date: String,
    pub calming_message: String,
    pub score: String,
    pub level: StressLevel,
    pub level_tone: Tone,
    pub trend: Trend,
    pub trend_tone: Tone,
    /// In the order received.
    pub history: Vec<HistoryPoint>,
    /// Seven-day average rounded to a whole number.
    pub average: String,
    pub emotional_state: String,
    pub primary_intent: String,
    pub coping_readiness: CopingReadiness,
    /// `(label, value)` rows summarizing today's check-in.
    pub checkin: Vec<(&'static str, String)>,
    pub triggers: Vec<String>,
    pub suggestions: Vec<SuggestionView>,
    pub content: Vec<ContentGroup>,
    pub safety_notice: bool,
}

impl DashboardView {
    #[must_use]
    pub fn from_report(report: &AnalysisResponse) -> Self {
        let analysis = &report.stress_analysis;
        let checkin = &report.daily_checkin;
        let recommendations = &report.recommendations;

        Self {
            app_name: report.app_name.clone(),
            category: report.category.clone(),
            date: checkin.date.clone(),
            calming_message: report.calming_message.clone(),
            score: number(analysis.current_score),
            level: analysis.stress_level,
            level_tone: Tone::for_level(analysis.stress_level),
            trend: analysis.trend,
            trend_tone: Tone::for_trend(analysis.trend),
            history: report.stress_graph.history.clone(),
            average: whole(report.stress_graph.seven_day_average),
            emotional_state: report.user_profile.emotional_state.clone(),
            primary_intent: report.user_profile.primary_intent.clone(),
            coping_readiness: report.user_profile.coping_readiness,
            checkin: vec![
                ("Self-reported stress", number(checkin.self_reported_stress)),
                ("Today in a word", checkin.mood_word.clone()),
                ("Sleep", checkin.sleep_quality.clone()),
                ("Main trigger", checkin.main_trigger.clone()),
            ],
            triggers: analysis.primary_triggers.clone(),
            suggestions: report
                .coping_suggestions
                .iter()
                .map(|suggestion| SuggestionView {
                    title: suggestion.title.clone(),
                    description: suggestion.description.clone(),
                    minutes: format!("{} MINS", number(suggestion.duration_minutes)),
                })
                .collect(),
            content: vec![
                group("Curated Videos", &recommendations.videos),
                group("Quick Reels", &recommendations.shorts_reels),
                group("Words of Wisdom", &recommendations.shayari),
                group("Quotes", &recommendations.quotes),
                group("Humor & Light Relief", &recommendations.standup),
            ],
            safety_notice: report.requires_safety_notice(),
        }
    }

    #[must_use]
    pub fn level_label(&self) -> String {
        format!("{} Stress", self.level)
    }

    #[must_use]
    pub fn trend_label(&self) -> String {
        format!("{} Trend is {}", trend_glyph(self.trend), self.trend)
    }
}

fn group(title: &'static str, items: &[String]) -> ContentGroup {
    ContentGroup {
        title,
        items: items.to_vec(),
    }
}

/// Shortest form: `55` for 55.0, `55.5` otherwise.
fn number(value: f64) -> String {
    format!("{value}")
}

fn whole(value: f64) -> String {
    format!("{}", value.round())
}

/// A fixed-width bar for a 0-100 score. Out-of-range scores are clamped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round();
    let filled = (0..width).take_while(|cell| (*cell as f64) < filled).count();
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
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
    fn safety_notice_only_when_high(#[case] level: StressLevel, #[case] expected: bool) {
        let view = DashboardView::from_report(&sample_response(level));
        assert_eq!(view.safety_notice, expected);
    }

    #[test]
    fn history_keeps_received_order() {
        let mut report = sample_response(StressLevel::Moderate);
        report.stress_graph.history.reverse();
        let view = DashboardView::from_report(&report);
        let scores: Vec<f64> = view.history.iter().map(|point| point.stress_score).collect();
        assert_eq!(scores, vec![60.0, 40.0]);
    }

    #[rstest]
    #[case(50.4, "50")]
    #[case(50.5, "51")]
    #[case(49.0, "49")]
    fn average_is_rounded(#[case] average: f64, #[case] expected: &str) {
        let mut report = sample_response(StressLevel::Low);
        report.stress_graph.seven_day_average = average;
        assert_eq!(DashboardView::from_report(&report).average, expected);
    }

    #[rstest]
    #[case(StressLevel::Low, Tone::Calm)]
    #[case(StressLevel::Moderate, Tone::Caution)]
    #[case(StressLevel::High, Tone::Alert)]
    fn level_tone(#[case] level: StressLevel, #[case] tone: Tone) {
        assert_eq!(Tone::for_level(level), tone);
    }

    #[rstest]
    #[case(Trend::Increasing, Tone::Alert, "↗")]
    #[case(Trend::Stable, Tone::Muted, "→")]
    #[case(Trend::Decreasing, Tone::Calm, "↘")]
    fn trend_tone_and_glyph(#[case] trend: Trend, #[case] tone: Tone, #[case] glyph: &str) {
        assert_eq!(Tone::for_trend(trend), tone);
        assert_eq!(trend_glyph(trend), glyph);
    }

    #[test]
    fn content_groups_are_fixed_and_may_be_empty() {
        let view = DashboardView::from_report(&sample_response(StressLevel::Moderate));
        let titles: Vec<&str> = view.content.iter().map(|g| g.title).collect();
        assert_eq!(
            titles,
            vec![
                "Curated Videos",
                "Quick Reels",
                "Words of Wisdom",
                "Quotes",
                "Humor & Light Relief"
            ]
        );
        assert!(view.content[1].items.is_empty());
        assert_eq!(view.content[3].items, vec!["This too shall pass.".to_string()]);
    }

    #[test]
    fn labels_and_numbers() {
        let view = DashboardView::from_report(&sample_response(StressLevel::Moderate));
        assert_eq!(view.score, "55");
        assert_eq!(view.level_label(), "Moderate Stress");
        assert_eq!(view.trend_label(), "→ Trend is Stable");
        assert_eq!(view.suggestions[0].minutes, "5 MINS");
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(40.0, 8)]
    #[case(100.0, 20)]
    #[case(140.0, 20)]
    #[case(-3.0, 0)]
    fn bar_fills_proportionally(#[case] score: f64, #[case] filled: usize) {
        let rendered = bar(score, BAR_WIDTH);
        assert_eq!(rendered.chars().count(), BAR_WIDTH);
        assert_eq!(rendered.chars().filter(|c| *c == '█').count(), filled);
    }
}
