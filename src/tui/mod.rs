//! Terminal presentation layer.
//!
//! A synchronous, single-threaded event loop: poll a key event, apply
//! it to the [`App`], redraw. Each handler runs to completion before
//! the next event is read, so no state is ever mutated concurrently.

mod app;
mod input;
mod ui;

pub use app::App;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;

/// Runs the TUI until the player quits.
pub fn run() -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    // Restore the terminal on both the normal and the error path.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(100)).context("polling for input")? {
            continue;
        }

        if let Event::Key(key) = event::read().context("reading input")? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("player quit");
                    return Ok(());
                }
                KeyCode::Char('r') => app.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => app.mark_cursor(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(digit) = c.to_digit(10)
                        && (1..=9).contains(&digit)
                    {
                        app.mark(digit as usize - 1);
                    }
                }
                code => app.move_cursor(code),
            }
        }
    }
}
