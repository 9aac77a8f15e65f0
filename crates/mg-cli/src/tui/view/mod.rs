//! Screen rendering. Pure functions of [`App`]; nothing here mutates state.

mod chrome;
pub mod dashboard;
mod pending;
mod questionnaire;
mod welcome;

use mg_core::Screen;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::app::App;

/// Header, body and footer areas for a terminal of the given size.
pub fn regions(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(2),
    ])
    .areas(area)
}

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, footer] = regions(frame.area());

    chrome::header(frame, app, header);
    match app.session().screen() {
        Screen::Welcome => welcome::render(frame, app, body),
        Screen::Questionnaire => questionnaire::render(frame, app, body),
        Screen::Pending => pending::render(frame, app, body),
        Screen::Dashboard => dashboard::render(frame, app, body),
    }
    chrome::footer(frame, app, footer);
}
