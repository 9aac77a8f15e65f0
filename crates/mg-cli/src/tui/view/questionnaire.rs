use mg_core::{Answer, Questionnaire, QuestionKind, StressRating};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::theme;

pub const NEXT: &str = "Next ▶";
pub const SUBMIT: &str = "Analyze My State ▶";
pub const BACK: &str = "◀ Back";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(wizard) = app.session().wizard() else {
        return;
    };
    let notice = app.session().notice();

    let [banner, heading, gauge, label, input, nav] = Layout::vertical([
        Constraint::Length(if notice.is_some() { 3 } else { 0 }),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice, theme::notice()))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(theme::notice()),
                ),
            banner,
        );
    }

    let (position, total) = wizard.position();
    let [phase, counter] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).areas(heading);
    frame.render_widget(
        Paragraph::new(Span::styled(wizard.phase().label().to_uppercase(), theme::title())),
        phase,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Question {position} of {total}"),
            theme::muted(),
        ))
        .alignment(Alignment::Right),
        counter,
    );

    frame.render_widget(
        Gauge::default()
            .gauge_style(theme::title())
            .ratio(wizard.progress())
            .label(""),
        gauge,
    );

    let question = wizard.question();
    frame.render_widget(
        Paragraph::new(Span::styled(
            question.label,
            theme::text().add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true }),
        label,
    );

    match question.kind {
        QuestionKind::FreeText { placeholder } => render_text(frame, wizard, placeholder, input),
        QuestionKind::SingleChoice { options } => render_choice(frame, wizard, options, input),
        QuestionKind::NumericRange { min, max } => render_range(frame, wizard, min, max, input),
    }

    render_nav(frame, wizard, nav);
}

fn input_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
}

fn render_text(frame: &mut Frame, wizard: &Questionnaire, placeholder: &str, area: Rect) {
    let line = match wizard.current_answer() {
        Answer::Text(text) if !text.is_empty() => Line::from(vec![
            Span::styled(text.to_string(), theme::text()),
            Span::styled("▏", theme::title()),
        ]),
        _ => Line::from(vec![
            Span::styled("▏", theme::title()),
            Span::styled(placeholder.to_string(), theme::muted()),
        ]),
    };
    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .block(input_block(" Your answer ")),
        area,
    );
}

fn render_choice(frame: &mut Frame, wizard: &Questionnaire, options: &[&str], area: Rect) {
    let selected = wizard.selected_option();
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let chosen = selected == Some(index);
            let marker = if chosen { "(•)" } else { "( )" };
            let key = (index + 1) % 10;
            let style = if chosen { theme::selected() } else { theme::text() };
            Line::from(vec![
                Span::styled(format!(" {key} "), theme::muted()),
                Span::styled(format!("{marker} {option}"), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(input_block(" Choose one ")), area);
}

fn render_range(frame: &mut Frame, wizard: &Questionnaire, min: u8, max: u8, area: Rect) {
    let current = match wizard.current_answer() {
        Answer::Rating(rating) => rating,
        Answer::Text(_) => StressRating::default(),
    };

    let mut scale = vec![Span::styled("Calm  ", theme::muted())];
    for value in min..=max {
        let style = if value == current.get() {
            theme::selected()
        } else if value < current.get() {
            theme::title()
        } else {
            theme::muted()
        };
        scale.push(Span::styled(format!(" {value} "), style));
    }
    scale.push(Span::styled("  Extreme", theme::muted()));

    let lines = vec![
        Line::from(Span::styled(
            format!("{current} / {max}"),
            theme::title(),
        )),
        Line::default(),
        Line::from(scale),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(input_block(" Stress level ")),
        area,
    );
}

fn render_nav(frame: &mut Frame, wizard: &Questionnaire, area: Rect) {
    let [back, next_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(area);
    let back_style = if wizard.index() == 0 {
        theme::disabled()
    } else {
        theme::muted()
    };
    frame.render_widget(Paragraph::new(Span::styled(BACK, back_style)), back);

    let next = if wizard.is_last() { SUBMIT } else { NEXT };
    let next_style = if wizard.can_advance() {
        theme::selected()
    } else {
        theme::disabled()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {next} "), next_style)).alignment(Alignment::Right),
        next_area,
    );
}
