//! Full-screen terminal front-end.

pub mod app;
mod events;
mod theme;
pub mod view;

use std::io::Stdout;
use std::sync::Arc;

use anyhow::Context;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use mg_config::UiConfig;
use mg_gateway::AnalysisGateway;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use app::App;
use events::{Event, EventHandler};

/// Take over the terminal and run until the user quits.
pub async fn run(gateway: Arc<dyn AnalysisGateway>, ui: &UiConfig) -> anyhow::Result<()> {
    let mut terminal = setup()?;

    let mut app = App::new(gateway, ui.status_interval());
    let events = EventHandler::new(ui.tick_rate());
    let result = run_app(&mut terminal, &mut app, events).await;

    let restored = restore(&mut terminal);
    result?;
    restored
}

fn setup() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    if let Err(error) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(error).context("failed to enter alternate screen");
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to initialize terminal")
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events: EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.fit(frame.area());
            view::draw(frame, app);
        })?;

        match events.next().await? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => {
                app.handle_key(key);
            }
            Event::Resize => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
