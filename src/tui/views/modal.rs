// Modal overlay rendering
//
// - Help modal: keyboard shortcuts and current theme
// - Logs modal: the newest entries from the in-memory log buffer
// - Prompt: one-line numeric entry

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::modal::{Modal, Prompt};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
        Modal::Prompt(prompt) => render_prompt(f, prompt, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn overlay_block<'a>(app: &App, title: &'a str, footer: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .border_type(app.theme.border_type)
        .title(title)
        .title_bottom(Line::from(footer).centered())
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.key);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Movement", header_style)),
        kb("h/j/k/l", "Left / down / up / right"),
        kb("arrows", "Same as h/j/k/l"),
        Line::raw(""),
        Line::from(Span::styled("  Toggle", header_style)),
        kb("Space/Enter", "Bit under cursor"),
        kb("r", "Rank (row)"),
        kb("f", "File (column)"),
        kb("dr", "Rising diagonal"),
        kb("df", "Falling diagonal"),
        kb("dd", "Both diagonals"),
        kb("n", "Knight targets"),
        kb("F", "Every bit"),
        kb("c", "Clear board"),
        Line::raw(""),
        Line::from(Span::styled("  Value", header_style)),
        kb("o", "Cycle hex / binary / decimal"),
        kb("y", "Copy value to clipboard"),
        kb("p", "Paste value from clipboard"),
        kb("i", "Enter a value (0x, 0b, decimal)"),
        kb("I", "Enter a binary value"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("H, ?", "This help"),
        kb("L", "Recent logs"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(48, 33, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(overlay_block(app, " Help ", " Press any key to close "));

    f.render_widget(paragraph, area);
}

fn level_color(level: LogLevel, app: &App) -> Color {
    match level {
        LogLevel::Error => app.theme.error,
        LogLevel::Warn => app.theme.highlight,
        LogLevel::Info => app.theme.foreground,
        LogLevel::Debug | LogLevel::Trace => app.theme.labels,
    }
}

fn render_logs(f: &mut Frame, app: &App) {
    let frame_area = f.area();
    let width = (frame_area.width * 90 / 100).max(40);
    let height = (frame_area.height * 80 / 100).max(10);
    let area = centered_rect(width, height, frame_area);

    let viewport_height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(viewport_height);

    let lines: Vec<Line> = if app.log_buffer.is_empty() {
        vec![Line::from(Span::styled(
            "No log entries yet",
            Style::default().fg(app.theme.labels),
        ))]
    } else {
        entries
            .iter()
            .map(|entry| {
                Line::from(Span::styled(
                    entry.format_line(),
                    Style::default().fg(level_color(entry.level, app)),
                ))
            })
            .collect()
    };

    f.render_widget(Clear, area);

    let title = format!(" Logs ({}) ", app.log_buffer.len());
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(app.theme.background))
        .block(overlay_block(app, &title, " Press any key to close "));

    f.render_widget(paragraph, area);
}

fn render_prompt(f: &mut Frame, prompt: &Prompt, app: &App) {
    // Label, the longest allowed input, the cursor, borders
    let width = (prompt.kind.label().len() + prompt.kind.max_len() + 4) as u16;
    let area = centered_rect(width, 3, f.area());

    let line = Line::from(vec![
        Span::styled(prompt.kind.label(), Style::default().fg(app.theme.key)),
        Span::styled(
            prompt.input.as_str(),
            Style::default().fg(app.theme.foreground),
        ),
        Span::styled(
            " ",
            Style::default()
                .fg(app.theme.foreground)
                .add_modifier(Modifier::REVERSED),
        ),
    ]);

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(line)
        .style(Style::default().bg(app.theme.background))
        .block(overlay_block(app, " Load value ", " Enter load │ Esc cancel "));

    f.render_widget(paragraph, area);
}
