//! Plain-text dashboard for `mindguard analyze --format text`.

use std::fmt::Write;

use super::{BAR_WIDTH, DashboardView, GREETING, SAFETY_BODY, SAFETY_TITLE, bar};

const RULE: &str = "────────────────────────────────────────";

#[must_use]
pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, view);
    out
}

fn write_report(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    writeln!(out, "{} · {} · {}", view.app_name, view.category, view.date)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{GREETING}")?;
    writeln!(out, "\"{}\"", view.calming_message)?;

    section(out, "Current Score")?;
    writeln!(out, "{}  [{}]", view.score, view.level_label())?;
    writeln!(out, "{}", view.trend_label())?;

    section(out, "Stress Trends")?;
    for point in &view.history {
        writeln!(
            out,
            "{:<10} {} {}",
            point.date,
            bar(point.stress_score, BAR_WIDTH),
            point.stress_score
        )?;
    }
    writeln!(out, "AVG SCORE  {}", view.average)?;

    section(out, "Today's Check-in")?;
    for (label, value) in &view.checkin {
        writeln!(out, "{label}: {value}")?;
    }

    section(out, "Analysis Profile")?;
    writeln!(out, "Emotional State: {}", view.emotional_state)?;
    writeln!(out, "Primary Intent: {}", view.primary_intent)?;
    writeln!(out, "Coping Readiness: {}", view.coping_readiness)?;
    let tags: Vec<String> = view.triggers.iter().map(|t| format!("[{t}]")).collect();
    writeln!(out, "Triggers Detected: {}", tags.join(" "))?;

    section(out, "Your Coping Strategies")?;
    for suggestion in &view.suggestions {
        writeln!(out, "* {} ({})", suggestion.title, suggestion.minutes)?;
        writeln!(out, "  {}", suggestion.description)?;
    }

    section(out, "Stress-Aware Content")?;
    for group in &view.content {
        writeln!(out, "{}:", group.title)?;
        for item in &group.items {
            writeln!(out, "  - {item}")?;
        }
    }

    if view.safety_notice {
        section(out, SAFETY_TITLE)?;
        writeln!(out, "{SAFETY_BODY}")?;
    }

    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use mg_core::StressLevel;

    use super::*;
    use crate::test_support::sample_response;

    #[test]
    fn moderate_report_has_no_safety_notice() {
        let out = render(&DashboardView::from_report(&sample_response(StressLevel::Moderate)));
        assert!(out.contains("55  [Moderate Stress]"));
        assert!(out.contains("AVG SCORE  50"));
        assert!(!out.contains(SAFETY_TITLE));
    }

    #[test]
    fn high_report_ends_with_safety_notice() {
        let out = render(&DashboardView::from_report(&sample_response(StressLevel::High)));
        assert!(out.contains(SAFETY_TITLE));
        assert!(out.trim_end().ends_with(SAFETY_BODY));
    }

    #[test]
    fn history_lines_follow_received_order() {
        let out = render(&DashboardView::from_report(&sample_response(StressLevel::Low)));
        let mon = out.find("Mon").expect("Mon line");
        let tue = out.find("Tue").expect("Tue line");
        assert!(mon < tue);
    }

    #[test]
    fn empty_groups_still_render_their_heading() {
        let out = render(&DashboardView::from_report(&sample_response(StressLevel::Low)));
        assert!(out.contains("Quick Reels:\n"));
        assert!(out.contains("[Exams] [Sleep debt]"));
    }
}
