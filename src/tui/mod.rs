// TUI module - terminal front end for the board
//
// Owns the terminal for the session: raw mode and the alternate screen on
// the way in, restored on the way out. The event loop multiplexes key
// polling, a redraw tick for toast expiry, and reports from the clipboard
// worker.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod modal;
pub mod views;

use crate::board::BitState;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::App;
use clipboard::{ClipboardStatus, ClipboardWorker};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the board editor until the user quits
pub async fn run_tui(state: BitState, config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (status_tx, mut status_rx) = mpsc::unbounded_channel();
    let worker = if config.clipboard {
        Some(ClipboardWorker::spawn(status_tx))
    } else {
        tracing::warn!("Clipboard disabled by config: y/p will not work");
        None
    };

    let theme = Theme::by_name(&config.theme, config.use_theme_background);
    let mut app = App::new(state, theme, log_buffer, worker);

    let result = run_event_loop(&mut terminal, &mut app, &mut status_rx).await;

    // Restore terminal even if the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    status_rx: &mut mpsc::UnboundedReceiver<ClipboardStatus>,
) -> Result<()> {
    // Keeps the toast timer moving when no keys arrive
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            polled = poll_key() => {
                if let Some(key_event) = polled? {
                    if input::is_interrupt(&key_event) {
                        tracing::debug!("Interrupted");
                        app.should_quit = true;
                    } else if let Some(key) = input::translate(&key_event) {
                        app.handle_key(key);
                    }
                }
            }

            _ = tick_interval.tick() => {}

            Some(status) = status_rx.recv() => {
                app.on_clipboard_status(status);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Short non-blocking poll so the select can service the other branches
async fn poll_key() -> Result<Option<event::KeyEvent>> {
    if !event::poll(Duration::from_millis(10)).context("Failed to poll terminal")? {
        return Ok(None);
    }
    match event::read().context("Failed to read terminal event")? {
        Event::Key(key_event) => Ok(Some(key_event)),
        _ => Ok(None),
    }
}
