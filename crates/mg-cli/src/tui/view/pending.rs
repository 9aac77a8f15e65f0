use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::status::{PENDING_TITLE, STATUS_MESSAGES};
use crate::tui::app::App;
use crate::tui::theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let frame_glyph = SPINNER[app.spinner_frame() % SPINNER.len()];
    let status = app.status_message().unwrap_or(STATUS_MESSAGES[0]);

    let lines = vec![
        Line::from(Span::styled(frame_glyph, theme::title())),
        Line::default(),
        Line::from(Span::styled(
            PENDING_TITLE,
            theme::text().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(status, theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}
