//! Header and footer shared by every screen.

use mg_core::{QuestionKind, Screen};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::App;
use crate::tui::theme;

pub const DISCLAIMER: &str = "Not a substitute for professional medical advice.";

pub fn header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).areas(inner);

    let brand = Line::from(vec![
        Span::styled(" ✚ ", theme::selected()),
        Span::styled(" Mind", theme::title()),
        Span::styled("Guard", theme::title().fg(theme::ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(brand), left);

    if app.session().screen() == Screen::Dashboard {
        let restart = Line::from(Span::styled("n: New Check-in ", theme::muted()));
        frame.render_widget(Paragraph::new(restart).alignment(Alignment::Right), right);
    }
}

pub fn footer(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(key_hints(app), theme::muted())),
        Line::from(Span::styled(DISCLAIMER, theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn key_hints(app: &App) -> &'static str {
    match app.session().screen() {
        Screen::Welcome => "←↑↓→ move · Enter or 1-9 select · Esc quit",
        Screen::Questionnaire => match app.session().wizard().map(|w| w.question().kind) {
            Some(QuestionKind::SingleChoice { .. }) => {
                "↑↓ or 1-9 choose · Enter next · Shift+Tab back · Esc start over"
            }
            Some(QuestionKind::NumericRange { .. }) => {
                "←→ or 1-0 rate · Enter next · Shift+Tab back · Esc start over"
            }
            _ => "type to answer · Enter next · Shift+Tab back · Esc start over",
        },
        Screen::Pending => "Esc start over · Ctrl+C quit",
        Screen::Dashboard => "↑↓ PgUp PgDn scroll · n new check-in · q quit",
    }
}
