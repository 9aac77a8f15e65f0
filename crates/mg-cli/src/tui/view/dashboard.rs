//! The scrollable results report.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::dashboard::{BAR_WIDTH, DashboardView, GREETING, SAFETY_BODY, SAFETY_TITLE, bar};
use crate::tui::app::App;
use crate::tui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(view) = app.dashboard() else {
        return;
    };

    frame.render_widget(
        report(view)
            .scroll((app.scroll(), 0))
            .block(frame_block(view)),
        area,
    );
}

/// Largest scroll offset that still fills `body`, counted in wrapped rows.
///
/// At this offset the last line of the report sits on the bottom row.
pub fn max_scroll(view: &DashboardView, body: Rect) -> u16 {
    let inner = frame_block(view).inner(body);
    if inner.width == 0 {
        return 0;
    }
    let rows = report(view).line_count(inner.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

fn report(view: &DashboardView) -> Paragraph<'static> {
    Paragraph::new(lines(view)).wrap(Wrap { trim: false })
}

fn frame_block(view: &DashboardView) -> Block<'static> {
    Block::default()
        .title(format!(" {} · {} · {} ", view.app_name, view.category, view.date))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
}

fn heading(title: &str) -> [Line<'static>; 2] {
    [
        Line::default(),
        Line::from(Span::styled(title.to_string(), theme::title())),
    ]
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::muted()),
        Span::styled(value.to_string(), theme::text().add_modifier(Modifier::BOLD)),
    ])
}

pub fn lines(view: &DashboardView) -> Vec<Line<'static>> {
    let level_style = theme::tone(view.level_tone);
    let mut lines = vec![
        Line::from(Span::styled(
            GREETING,
            theme::text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", view.calming_message),
            theme::text().add_modifier(Modifier::ITALIC),
        )),
    ];

    lines.extend(heading("Current Score"));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", view.score), level_style.add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", view.level_label().to_uppercase()),
            level_style.add_modifier(Modifier::REVERSED),
        ),
        Span::raw("  "),
        Span::styled(view.trend_label(), theme::tone(view.trend_tone)),
    ]));

    lines.extend(heading("Stress Trends"));
    for point in &view.history {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10} ", point.date), theme::muted()),
            Span::styled(bar(point.stress_score, BAR_WIDTH), theme::title()),
            Span::styled(format!(" {}", point.stress_score), theme::text()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("AVG SCORE  ", theme::muted()),
        Span::styled(view.average.clone(), theme::text().add_modifier(Modifier::BOLD)),
    ]));

    lines.extend(heading("Today's Check-in"));
    for (label, value) in &view.checkin {
        lines.push(field(label, value));
    }

    lines.extend(heading("Analysis Profile"));
    lines.push(field("Emotional State", &view.emotional_state));
    lines.push(field("Primary Intent", &view.primary_intent));
    lines.push(field("Coping Readiness", view.coping_readiness.as_str()));
    let mut tags = vec![Span::styled("Triggers Detected: ", theme::muted())];
    for trigger in &view.triggers {
        tags.push(Span::styled(
            format!(" {} ", trigger.to_uppercase()),
            theme::muted().add_modifier(Modifier::REVERSED),
        ));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));

    lines.extend(heading("Your Coping Strategies"));
    for suggestion in &view.suggestions {
        lines.push(Line::from(vec![
            Span::styled("♥ ", theme::title()),
            Span::styled(
                suggestion.title.clone(),
                theme::text().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", suggestion.minutes), theme::muted()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", suggestion.description),
            theme::text(),
        )));
    }

    lines.extend(heading("Stress-Aware Content"));
    for group in &view.content {
        lines.push(Line::from(Span::styled(
            group.title,
            theme::text().add_modifier(Modifier::BOLD),
        )));
        for item in &group.items {
            lines.push(Line::from(Span::styled(format!("  • {item}"), theme::text())));
        }
    }

    if view.safety_notice {
        let alert = Style::default().fg(theme::ALERT);
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            SAFETY_TITLE,
            alert.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(SAFETY_BODY, alert)));
    }

    lines
}
