// Views module - screen-level rendering logic
//
// One screen: title bar, the board panel and the status bar, with the
// modal overlay and toast drawn on top.

mod modal;

use super::app::App;
use crate::tui::components::{board_panel, status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    board_panel::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    // Toast goes on top of the modal too
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}
