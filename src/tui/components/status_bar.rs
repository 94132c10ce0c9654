// Status bar component
//
// Cursor square, population count and output base along the bottom.

use crate::board::BitState;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Text of the status line
pub fn status_text(state: &BitState, clipboard_enabled: bool) -> String {
    let mut text = format!(
        " {} │ {} set │ {}",
        state.cursor,
        state.bits.count_ones(),
        state.output_base
    );
    if state.pending_diagonal() {
        text.push_str(" │ DIAGONAL");
    }
    if !clipboard_enabled {
        text.push_str(" │ clipboard off");
    }
    text
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(&app.state, app.clipboard_enabled()))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
