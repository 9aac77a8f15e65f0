use mg_core::Category;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::app::{App, GRID_COLUMNS};
use crate::tui::theme;

const INTRO: &str = "MindGuard is your private space to reflect, analyze your stress, and find personalized ways to feel better. Let's start by understanding who you are.";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Category::ALL.len().div_ceil(GRID_COLUMNS);
    let grid_height = u16::try_from(rows * 3).unwrap_or(u16::MAX);
    let [intro, grid, badges] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(grid_height),
        Constraint::Min(1),
    ])
    .areas(area);

    let greeting = vec![
        Line::from(vec![
            Span::styled("Hello. How are you ", theme::text()),
            Span::styled("truly", theme::title()),
            Span::styled(" doing?", theme::text()),
        ]),
        Line::default(),
        Line::from(Span::styled(INTRO, theme::muted())),
    ];
    frame.render_widget(
        Paragraph::new(greeting)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        intro,
    );

    let row_areas = Layout::vertical(vec![Constraint::Length(3); rows]).split(grid);
    for (row, chunk) in Category::ALL.chunks(GRID_COLUMNS).enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, 3); GRID_COLUMNS]).split(row_areas[row]);
        for (column, category) in chunk.iter().enumerate() {
            let index = row * GRID_COLUMNS + column;
            let style = if index == app.cursor() {
                theme::selected()
            } else {
                theme::text()
            };
            let tile = Paragraph::new(Line::from(Span::styled(
                format!(" {}. {category}", index + 1),
                style,
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(if index == app.cursor() {
                        theme::title()
                    } else {
                        theme::border()
                    }),
            );
            frame.render_widget(tile, cells[column]);
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Private & Secure · AI-Powered Insights",
            theme::muted(),
        )))
        .alignment(Alignment::Center),
        badges,
    );
}
