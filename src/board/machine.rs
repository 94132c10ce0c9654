// Key state machine
//
// Turns one key at a time into board edits. Most keys act immediately; `d`
// arms a diagonal command that the next key completes or cancels. Anything
// the board cannot do by itself (clipboard, prompts, help, quitting) comes
// back as an Effect for the caller to carry out.

use super::square::Square;
use super::state::BitState;
use super::transform;

/// Keys the state machine understands, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Other,
}

/// State machine mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// `d` was pressed; the next key picks the diagonal
    AwaitingDiagonal,
}

/// Which diagonal(s) the second key of `d` selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// Bottom-left to top-right (`r`)
    Rising,
    /// Top-left to bottom-right (`f`)
    Falling,
    /// Both (`d`)
    Double,
}

impl Diagonal {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('r') => Some(Diagonal::Rising),
            Key::Char('f') => Some(Diagonal::Falling),
            Key::Char('d') => Some(Diagonal::Double),
            _ => None,
        }
    }

    fn apply(self, bits: u64, sq: Square) -> u64 {
        match self {
            Diagonal::Rising => transform::toggle_rising_diagonal(bits, sq),
            Diagonal::Falling => transform::toggle_falling_diagonal(bits, sq),
            Diagonal::Double => {
                transform::toggle_falling_diagonal(transform::toggle_rising_diagonal(bits, sq), sq)
            }
        }
    }
}

/// Text entry flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Hex, binary or decimal with prefix detection
    Any,
    /// Bare binary digits
    Binary,
}

impl PromptKind {
    /// Longest input accepted: a prefixed 64-bit literal, or 64 binary digits
    pub fn max_len(self) -> usize {
        match self {
            PromptKind::Any => 19,
            PromptKind::Binary => 64,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Any => "bitboard: ",
            PromptKind::Binary => "bitboard: 0b",
        }
    }
}

/// One-shot commands available in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleBit,
    ClearAll,
    InvertAll,
    ToggleRank,
    ToggleFile,
    ToggleKnight,
    DiagonalPrefix,
    CycleBase,
    Export,
    Import,
    Enter(PromptKind),
    Help,
    Logs,
    Quit,
}

impl Command {
    /// Default key map
    pub fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Up | Key::Char('k') => Command::MoveUp,
            Key::Down | Key::Char('j') => Command::MoveDown,
            Key::Left | Key::Char('h') => Command::MoveLeft,
            Key::Right | Key::Char('l') => Command::MoveRight,
            Key::Enter | Key::Char(' ') => Command::ToggleBit,
            Key::Char('c') => Command::ClearAll,
            Key::Char('F') => Command::InvertAll,
            Key::Char('r') => Command::ToggleRank,
            Key::Char('f') => Command::ToggleFile,
            Key::Char('n') => Command::ToggleKnight,
            Key::Char('d') => Command::DiagonalPrefix,
            Key::Char('o') => Command::CycleBase,
            Key::Char('y') => Command::Export,
            Key::Char('p') => Command::Import,
            Key::Char('i') => Command::Enter(PromptKind::Any),
            Key::Char('I') => Command::Enter(PromptKind::Binary),
            Key::Char('H') | Key::Char('?') => Command::Help,
            Key::Char('L') => Command::Logs,
            Key::Char('q') => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Work left for the caller after a key was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the state change (if any)
    None,
    /// Put this text on the system clipboard
    Publish(String),
    /// Read the system clipboard and import it
    FetchClipboard,
    /// Ask the user for a value
    Prompt(PromptKind),
    ShowHelp,
    ShowLogs,
    Quit,
}

/// Feed one key into the machine
pub fn handle_key(state: &mut BitState, key: Key) -> Effect {
    match state.mode {
        Mode::AwaitingDiagonal => {
            state.mode = Mode::Normal;
            match Diagonal::from_key(key) {
                Some(diagonal) => {
                    state.bits = diagonal.apply(state.bits, state.cursor);
                    tracing::debug!("Flipped {:?} diagonal at {}", diagonal, state.cursor);
                }
                None => tracing::debug!("Diagonal command cancelled by {:?}", key),
            }
            Effect::None
        }
        Mode::Normal => match Command::from_key(key) {
            Some(command) => apply(state, command),
            None => Effect::None,
        },
    }
}

/// Run a normal-mode command
pub fn apply(state: &mut BitState, command: Command) -> Effect {
    let cursor = state.cursor;
    match command {
        Command::MoveUp => state.cursor = cursor.clamped_offset(-1, 0),
        Command::MoveDown => state.cursor = cursor.clamped_offset(1, 0),
        Command::MoveLeft => state.cursor = cursor.clamped_offset(0, -1),
        Command::MoveRight => state.cursor = cursor.clamped_offset(0, 1),
        Command::ToggleBit => state.bits = transform::toggle_bit(state.bits, cursor),
        Command::ClearAll => state.bits = 0,
        Command::InvertAll => state.bits = transform::toggle_all(state.bits),
        Command::ToggleRank => state.bits = transform::toggle_rank(state.bits, cursor),
        Command::ToggleFile => state.bits = transform::toggle_file(state.bits, cursor),
        Command::ToggleKnight => state.bits = transform::toggle_knight_targets(state.bits, cursor),
        Command::DiagonalPrefix => state.mode = Mode::AwaitingDiagonal,
        Command::CycleBase => state.output_base = state.output_base.next(),
        Command::Export => return Effect::Publish(state.formatted()),
        Command::Import => return Effect::FetchClipboard,
        Command::Enter(kind) => return Effect::Prompt(kind),
        Command::Help => return Effect::ShowHelp,
        Command::Logs => return Effect::ShowLogs,
        Command::Quit => return Effect::Quit,
    }
    tracing::debug!("{:?} at {} -> {:#018x}", command, cursor, state.bits);
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::OutputBase;

    fn press(state: &mut BitState, keys: &[Key]) -> Vec<Effect> {
        keys.iter().map(|&k| handle_key(state, k)).collect()
    }

    #[test]
    fn test_toggle_move_and_flip_rank() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Char(' ')]);
        assert_eq!(state.bits, 1);

        press(
            &mut state,
            &[Key::Right, Key::Right, Key::Right, Key::Down, Key::Down],
        );
        assert_eq!(state.cursor.index(), 19);

        press(&mut state, &[Key::Char('r')]);
        assert_eq!(state.bits, 1 | 0x0000_0000_00FF_0000);
    }

    #[test]
    fn test_vim_keys_match_arrows() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Char('l'), Key::Char('j'), Key::Char('j')]);
        assert_eq!(state.cursor.index(), 17);
        press(&mut state, &[Key::Char('h'), Key::Char('k')]);
        assert_eq!(state.cursor.index(), 8);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Up, Key::Left]);
        assert_eq!(state.cursor, Square::TOP_LEFT);

        press(&mut state, &[Key::Right; 10]);
        assert_eq!(state.cursor.index(), 7);
        press(&mut state, &[Key::Down; 10]);
        assert_eq!(state.cursor.index(), 63);
    }

    #[test]
    fn test_diagonal_prefix_then_direction() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Char('d')]);
        assert!(state.pending_diagonal());
        assert_eq!(state.bits, 0);

        press(&mut state, &[Key::Char('f')]);
        assert!(!state.pending_diagonal());
        assert_eq!(state.bits, 0x8040_2010_0804_0201);
    }

    #[test]
    fn test_rising_diagonal_from_top_right() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Right; 7]);
        press(&mut state, &[Key::Char('d'), Key::Char('r')]);
        assert_eq!(state.bits, 0x0102_0408_1020_4080);
    }

    #[test]
    fn test_double_diagonal_shares_center_square() {
        let mut state = BitState::default();
        state.cursor = Square::new(27).unwrap();
        press(&mut state, &[Key::Char('d'), Key::Char('d')]);
        let expected = transform::rising_diagonal_mask(state.cursor)
            ^ transform::falling_diagonal_mask(state.cursor);
        assert_eq!(state.bits, expected);
        // The square under the cursor was flipped twice
        assert!(!state.is_set(state.cursor));
    }

    #[test]
    fn test_unrelated_key_cancels_diagonal() {
        let mut state = BitState::new(0x1234, OutputBase::Hex);
        press(&mut state, &[Key::Char('d')]);
        let effects = press(&mut state, &[Key::Char('q')]);
        assert_eq!(effects, vec![Effect::None]);
        assert!(!state.pending_diagonal());
        assert_eq!(state.bits, 0x1234);
        assert_eq!(state.cursor, Square::TOP_LEFT);

        // Back in normal mode, q quits again
        assert_eq!(handle_key(&mut state, Key::Char('q')), Effect::Quit);
    }

    #[test]
    fn test_arrow_cancels_diagonal_without_moving() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Char('d'), Key::Down]);
        assert_eq!(state.cursor, Square::TOP_LEFT);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_clear_and_invert() {
        let mut state = BitState::new(0xF0F0, OutputBase::Hex);
        press(&mut state, &[Key::Char('F')]);
        assert_eq!(state.bits, !0xF0F0u64);
        press(&mut state, &[Key::Char('c')]);
        assert_eq!(state.bits, 0);
    }

    #[test]
    fn test_file_and_knight() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Char('f')]);
        assert_eq!(state.bits, 0x0101_0101_0101_0101);
        press(&mut state, &[Key::Char('c'), Key::Char('n')]);
        assert_eq!(state.bits, (1 << 10) | (1 << 17));
    }

    #[test]
    fn test_cycle_base_three_times_returns() {
        let mut state = BitState::default();
        press(&mut state, &[Key::Char('o')]);
        assert_eq!(state.output_base, OutputBase::Binary);
        press(&mut state, &[Key::Char('o'), Key::Char('o')]);
        assert_eq!(state.output_base, OutputBase::Hex);
    }

    #[test]
    fn test_export_uses_output_base() {
        let mut state = BitState::new(u64::MAX, OutputBase::Decimal);
        assert_eq!(
            handle_key(&mut state, Key::Char('y')),
            Effect::Publish("18446744073709551615".to_string())
        );
        state.output_base = OutputBase::Hex;
        assert_eq!(
            handle_key(&mut state, Key::Char('y')),
            Effect::Publish("0xffffffffffffffff".to_string())
        );
    }

    #[test]
    fn test_effects_for_adapter_keys() {
        let mut state = BitState::default();
        assert_eq!(handle_key(&mut state, Key::Char('p')), Effect::FetchClipboard);
        assert_eq!(
            handle_key(&mut state, Key::Char('i')),
            Effect::Prompt(PromptKind::Any)
        );
        assert_eq!(
            handle_key(&mut state, Key::Char('I')),
            Effect::Prompt(PromptKind::Binary)
        );
        assert_eq!(handle_key(&mut state, Key::Char('H')), Effect::ShowHelp);
        assert_eq!(handle_key(&mut state, Key::Char('L')), Effect::ShowLogs);
    }

    #[test]
    fn test_applied_commands_log_at_debug() {
        use crate::logging::{LogBuffer, LogLevel, TuiLogLayer};
        use tracing_subscriber::layer::SubscriberExt;

        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));
        tracing::subscriber::with_default(subscriber, || {
            handle_key(&mut BitState::default(), Key::Char('r'));
        });

        let entries = buffer.recent(10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Debug);
        assert!(entries[0].message.starts_with("ToggleRank at a8"));
    }

    #[test]
    fn test_unknown_keys_are_no_ops() {
        let mut state = BitState::new(42, OutputBase::Hex);
        for key in [Key::Char('z'), Key::Esc, Key::Backspace, Key::Other] {
            assert_eq!(handle_key(&mut state, key), Effect::None);
        }
        assert_eq!(state.bits, 42);
        assert_eq!(state.mode, Mode::Normal);
    }
}
