//! termfolio desktop entry point.
//!
//! Runs the portfolio terminal in the alternate screen of the current
//! terminal emulator. Type `help` for commands; Escape or Ctrl-C quits.

mod input;
mod render;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use termfolio_platform::DesktopPlatform;
use termfolio_terminal::{InputResult, Session};
use termfolio_types::config::TermfolioConfig;
use termfolio_types::input::InputEvent;

/// Longest wait for a key before redrawing with nothing pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the terminal on every exit path, including `?` and panics.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// Config path from the first CLI arg or `TERMFOLIO_CONFIG`, else defaults.
fn load_config() -> Result<TermfolioConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok());
    match path {
        Some(path) => TermfolioConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}")),
        None => Ok(TermfolioConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    log::info!(
        "Starting termfolio (theme {}, prompt {:?})",
        config.default_theme,
        config.prompt
    );

    let mut session = Session::new(&config).with_platform(DesktopPlatform::new());

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let _guard = TerminalGuard;
    execute!(stdout, EnterAlternateScreen)?;

    let mut size = terminal::size()?;
    session.set_viewport(render::transcript_rows(size.1));
    session.start();

    loop {
        render::draw(&mut stdout, &session, size)?;

        let timeout = session
            .next_due_in(Instant::now())
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(ev) = input::map_key(&key)
                        && session.handle_input(&ev, Instant::now()) == InputResult::Quit
                    {
                        break;
                    }
                },
                Event::Resize(cols, rows) => {
                    size = (cols, rows);
                    session.set_viewport(render::transcript_rows(rows));
                },
                Event::FocusGained => {
                    session.handle_input(&InputEvent::FocusGained, Instant::now());
                },
                _ => {},
            }
        }
        session.tick(Instant::now());
    }

    log::info!("Shutting down");
    Ok(())
}
