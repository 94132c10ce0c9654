// Board panel
//
// The 8×8 grid with file letters above and below, rank numbers at each
// side, then the value line and the key hint. Row 0 of the bitboard is
// drawn at the top as rank 8.

use crate::board::transform::{falling_diagonal_mask, rising_diagonal_mask};
use crate::board::{BitState, Square};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Padded to the width of a grid row so centering keeps columns aligned
const FILE_LABELS: &str = "    A B C D E F G H    ";

const HELP_HINT: &str = "type H for help";
const DIAGONAL_HINT: &str = "toggle diagonal  r rising / f falling / d double";

/// Squares to highlight while the diagonal command waits for its direction
fn preview_mask(state: &BitState) -> u64 {
    if state.pending_diagonal() {
        rising_diagonal_mask(state.cursor) | falling_diagonal_mask(state.cursor)
    } else {
        0
    }
}

fn border_line(left: char, right: char, style: Style) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}{}{}  ", left, "─".repeat(17), right),
        style,
    ))
}

/// Lines of the grid, labels included
pub fn grid_lines(state: &BitState, theme: &Theme) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(theme.labels);
    let border_style = Style::default().fg(theme.border);
    let preview = preview_mask(state);

    let mut lines = Vec::with_capacity(12);
    lines.push(Line::from(Span::styled(FILE_LABELS, label_style)));
    lines.push(border_line('┌', '┐', border_style));

    for row in 0..8u8 {
        let rank = 8 - row;
        let mut spans = vec![
            Span::styled(format!("{} ", rank), label_style),
            Span::styled("│", border_style),
        ];
        for col in 0..8u8 {
            let Some(sq) = Square::at(row, col) else {
                continue;
            };
            let (glyph, mut style) = if state.is_set(sq) {
                ("1", Style::default().fg(theme.bit_set).add_modifier(Modifier::BOLD))
            } else {
                (".", Style::default().fg(theme.bit_clear))
            };
            if preview & sq.bit() != 0 {
                style = style.fg(theme.preview);
            }
            if sq == state.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(glyph, style));
        }
        spans.push(Span::styled(" │", border_style));
        spans.push(Span::styled(format!(" {}", rank), label_style));
        lines.push(Line::from(spans));
    }

    lines.push(border_line('└', '┘', border_style));
    lines.push(Line::from(Span::styled(FILE_LABELS, label_style)));
    lines
}

/// The value in the current base, prefixed with the base name
pub fn value_line(state: &BitState) -> String {
    format!("{}: {}", state.output_base, state.formatted())
}

pub fn hint(state: &BitState) -> &'static str {
    if state.pending_diagonal() {
        DIAGONAL_HINT
    } else {
        HELP_HINT
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.state;

    let mut lines = grid_lines(state, theme);
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        value_line(state),
        Style::default().fg(theme.value),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        hint(state),
        Style::default().fg(if state.pending_diagonal() {
            theme.preview
        } else {
            theme.key
        }),
    )));

    // Pad from the top so the board sits in the middle of the panel
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(lines.len()) / 2;
    let mut content = vec![Line::raw(""); pad];
    content.extend(lines);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Board "),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::machine::Mode;
    use crate::codec::OutputBase;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_grid_layout() {
        let state = BitState::new(0x8000_0000_0000_0001, OutputBase::Hex);
        let lines = grid_lines(&state, &Theme::auto());
        assert_eq!(lines.len(), 12);
        assert_eq!(text(&lines[0]), "    A B C D E F G H    ");
        assert_eq!(text(&lines[1]), "  ┌─────────────────┐  ");
        assert_eq!(text(&lines[2]), "8 │ 1 . . . . . . . │ 8");
        assert_eq!(text(&lines[9]), "1 │ . . . . . . . 1 │ 1");
        assert_eq!(text(&lines[11]), text(&lines[0]));
    }

    #[test]
    fn test_cursor_is_reversed() {
        let mut state = BitState::default();
        state.cursor = Square::new(19).unwrap();
        let lines = grid_lines(&state, &Theme::auto());
        // Row 2 is rank 6; cell spans start after the label and border
        let cell = &lines[4].spans[2 + 2 * 3 + 1];
        assert_eq!(cell.content, ".");
        assert!(cell.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_preview_only_while_pending() {
        let mut state = BitState::default();
        state.cursor = Square::new(19).unwrap();
        assert_eq!(preview_mask(&state), 0);
        assert_eq!(hint(&state), HELP_HINT);

        state.mode = Mode::AwaitingDiagonal;
        let expected = rising_diagonal_mask(state.cursor) | falling_diagonal_mask(state.cursor);
        assert_eq!(preview_mask(&state), expected);
        assert_eq!(hint(&state), DIAGONAL_HINT);
    }

    #[test]
    fn test_value_line_names_base() {
        let state = BitState::new(255, OutputBase::Decimal);
        assert_eq!(value_line(&state), "decimal: 255");
    }
}
