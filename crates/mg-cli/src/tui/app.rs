//! Interactive application state.
//!
//! [`App`] wraps the core [`Session`] with what only the terminal needs:
//! the welcome-grid cursor, the spinner frame, the dashboard scroll offset
//! and the channel that brings analysis results back from the spawned task.
//!
//! Every analysis is tagged with a generation number. Restarting bumps the
//! generation, so a reply that arrives after the user walked away is dropped
//! instead of being applied to a newer session.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mg_core::{
    ANALYSIS_FAILED_NOTICE, Advance, AnalysisResponse, AssessmentRequest, Category, CoreError,
    Questionnaire, QuestionKind, Screen, Session, StressRating,
};
use mg_gateway::{AnalysisGateway, GatewayError};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::dashboard::DashboardView;
use crate::status::StatusTicker;
use crate::tui::view;

/// Columns in the welcome grid.
pub const GRID_COLUMNS: usize = 3;

const PAGE: u16 = 10;

#[derive(Debug)]
pub struct AnalysisOutcome {
    generation: u64,
    result: Result<AnalysisResponse, GatewayError>,
}

pub struct App {
    session: Session,
    gateway: Arc<dyn AnalysisGateway>,
    status_interval: Duration,
    outcome_tx: mpsc::UnboundedSender<AnalysisOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<AnalysisOutcome>,
    generation: u64,
    ticker: Option<StatusTicker>,
    spinner_frame: usize,
    cursor: usize,
    dashboard: Option<DashboardView>,
    viewport: Rect,
    max_scroll: u16,
    scroll: u16,
    should_quit: bool,
}

impl App {
    pub fn new(gateway: Arc<dyn AnalysisGateway>, status_interval: Duration) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            gateway,
            status_interval,
            outcome_tx,
            outcome_rx,
            generation: 0,
            ticker: None,
            spinner_frame: 0,
            cursor: 0,
            dashboard: None,
            viewport: Rect::default(),
            max_scroll: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Highlighted index into [`Category::ALL`].
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.ticker.as_ref().map(StatusTicker::message)
    }

    pub const fn dashboard(&self) -> Option<&DashboardView> {
        self.dashboard.as_ref()
    }

    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    pub const fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    /// Record the terminal size the next frame is drawn at.
    ///
    /// The dashboard wraps to the terminal width, so its scroll range
    /// changes with every resize.
    pub fn fit(&mut self, area: Rect) {
        if area != self.viewport {
            self.viewport = area;
            self.refresh_scroll_range();
        }
    }

    fn refresh_scroll_range(&mut self) {
        let [_, body, _] = view::regions(self.viewport);
        self.max_scroll = self
            .dashboard
            .as_ref()
            .map_or(0, |dashboard| view::dashboard::max_scroll(dashboard, body));
        self.scroll = self.scroll.min(self.max_scroll);
    }

    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_tick(&mut self) {
        if self.session.screen() == Screen::Pending {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        self.drain_outcomes();
    }

    /// Apply any analysis results that have arrived.
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return self.should_quit;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        match self.session.screen() {
            Screen::Welcome => self.on_welcome_key(key),
            Screen::Questionnaire => self.on_questionnaire_key(key),
            Screen::Pending => {
                if key.code == KeyCode::Esc {
                    self.restart();
                }
            }
            Screen::Dashboard => self.on_dashboard_key(key),
        }

        self.drain_outcomes();
        self.should_quit
    }

    fn on_welcome_key(&mut self, key: KeyEvent) {
        let last = Category::ALL.len() - 1;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(last),
            KeyCode::Up => self.cursor = self.cursor.checked_sub(GRID_COLUMNS).unwrap_or(self.cursor),
            KeyCode::Down if self.cursor + GRID_COLUMNS <= last => self.cursor += GRID_COLUMNS,
            KeyCode::Enter => self.select_category(self.cursor),
            KeyCode::Char(digit @ '1'..='9') => {
                if let Some(index) = digit.to_digit(10).and_then(|d| usize::try_from(d - 1).ok()) {
                    self.cursor = index;
                    self.select_category(index);
                }
            }
            _ => {}
        }
    }

    fn select_category(&mut self, index: usize) {
        let Some(&category) = Category::ALL.get(index) else {
            return;
        };
        match self.session.select_category(category) {
            Ok(()) => tracing::debug!(%category, "category selected"),
            Err(error) => ignore(&error),
        }
    }

    fn on_questionnaire_key(&mut self, key: KeyEvent) {
        let Some(kind) = self.session.wizard().map(|w| w.question().kind) else {
            return;
        };
        let typing = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match (kind, key.code) {
            (_, KeyCode::Esc) => self.restart(),
            (_, KeyCode::Enter | KeyCode::Tab) => self.advance(),
            (_, KeyCode::BackTab) => {
                if let Err(error) = self.session.retreat() {
                    ignore(&error);
                }
            }
            (QuestionKind::FreeText { .. }, KeyCode::Char(c)) if typing => {
                self.edit(|wizard| wizard.push_char(c));
            }
            (QuestionKind::FreeText { .. }, KeyCode::Backspace) => {
                self.edit(Questionnaire::pop_char);
            }
            (QuestionKind::SingleChoice { .. }, KeyCode::Up) => {
                self.edit(|wizard| wizard.cycle_option(-1));
            }
            (QuestionKind::SingleChoice { .. }, KeyCode::Down) => {
                self.edit(|wizard| wizard.cycle_option(1));
            }
            (QuestionKind::SingleChoice { .. }, KeyCode::Char(c)) => {
                if let Some(value) = digit_value(c) {
                    self.edit(|wizard| wizard.select_option(usize::from(value) - 1));
                }
            }
            (QuestionKind::NumericRange { .. }, KeyCode::Left | KeyCode::Down) => {
                self.edit(|wizard| wizard.adjust_rating(-1));
            }
            (QuestionKind::NumericRange { .. }, KeyCode::Right | KeyCode::Up) => {
                self.edit(|wizard| wizard.adjust_rating(1));
            }
            (QuestionKind::NumericRange { .. }, KeyCode::Char(c)) => {
                if let Some(value) = digit_value(c) {
                    self.edit(|wizard| wizard.set_rating(StressRating::clamped(i16::from(value))));
                }
            }
            _ => {}
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut Questionnaire) -> bool) {
        if let Some(wizard) = self.session.wizard_mut() {
            change(wizard);
        }
    }

    fn advance(&mut self) {
        match self.session.advance() {
            Ok(Advance::Submitted(request)) => self.submit(request),
            Ok(Advance::Moved) => {}
            Ok(Advance::Blocked) => tracing::trace!("current question is unanswered"),
            Err(error) => ignore(&error),
        }
    }

    fn submit(&mut self, request: AssessmentRequest) {
        self.generation += 1;
        let generation = self.generation;
        self.ticker = Some(StatusTicker::start(self.status_interval));
        self.spinner_frame = 0;

        tracing::info!(
            generation,
            category = %request.category,
            gateway = self.gateway.name(),
            "submitting assessment"
        );

        let gateway = Arc::clone(&self.gateway);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = gateway.analyze(&request).await;
            // Fails only once the app itself is gone.
            let _ = tx.send(AnalysisOutcome { generation, result });
        });
    }

    fn apply_outcome(&mut self, outcome: AnalysisOutcome) {
        if outcome.generation != self.generation || self.session.screen() != Screen::Pending {
            tracing::debug!(
                generation = outcome.generation,
                current = self.generation,
                "discarding stale analysis result"
            );
            return;
        }
        self.ticker = None;

        match outcome.result {
            Ok(report) => {
                let view = DashboardView::from_report(&report);
                match self.session.on_analysis_success(report) {
                    Ok(()) => {
                        tracing::info!(level = %view.level, "analysis complete");
                        self.dashboard = Some(view);
                        self.scroll = 0;
                        self.refresh_scroll_range();
                    }
                    Err(error) => ignore(&error),
                }
            }
            Err(error) => {
                tracing::warn!(
                    gateway = self.gateway.name(),
                    transient = error.is_transient(),
                    %error,
                    "analysis failed"
                );
                if let Err(error) = self.session.on_analysis_failure(ANALYSIS_FAILED_NOTICE) {
                    ignore(&error);
                }
            }
        }
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) {
        let max = self.max_scroll;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Esc => self.restart(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = (self.scroll + 1).min(max),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE).min(max),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = max,
            _ => {}
        }
    }

    /// Back to a blank welcome screen; any in-flight analysis is abandoned.
    pub fn restart(&mut self) {
        self.session.restart();
        self.generation += 1;
        self.ticker = None;
        self.cursor = 0;
        self.dashboard = None;
        self.max_scroll = 0;
        self.scroll = 0;
    }
}

/// `'1'..='9'` map to 1-9 and `'0'` to 10.
fn digit_value(c: char) -> Option<u8> {
    match c.to_digit(10)? {
        0 => Some(10),
        d => u8::try_from(d).ok(),
    }
}

/// Rejected transitions are not fatal in the UI loop.
fn ignore(error: &CoreError) {
    tracing::debug!(%error, "ignored input");
}
