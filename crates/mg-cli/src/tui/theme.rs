//! Colours and styles for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

use crate::dashboard::Tone;

pub const PRIMARY: Color = Color::Rgb(79, 70, 229);
pub const ACCENT: Color = Color::Rgb(147, 51, 234);
pub const TEXT: Color = Color::Rgb(226, 232, 240);
pub const MUTED: Color = Color::Rgb(148, 163, 184);
pub const BORDER: Color = Color::Rgb(71, 85, 105);
pub const CALM: Color = Color::Rgb(5, 150, 105);
pub const CAUTION: Color = Color::Rgb(217, 119, 6);
pub const ALERT: Color = Color::Rgb(225, 29, 72);

#[must_use]
pub fn text() -> Style {
    Style::default().fg(TEXT)
}

#[must_use]
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

#[must_use]
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn disabled() -> Style {
    Style::default().fg(BORDER).add_modifier(Modifier::DIM)
}

#[must_use]
pub fn notice() -> Style {
    Style::default().fg(ALERT).add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn tone(tone: Tone) -> Style {
    let color = match tone {
        Tone::Calm => CALM,
        Tone::Caution => CAUTION,
        Tone::Alert => ALERT,
        Tone::Muted => MUTED,
    };
    Style::default().fg(color)
}
