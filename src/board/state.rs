// Board state
//
// One owned value for the whole session: the bits, the cursor, the input
// mode of the key state machine and the output base. The TUI holds it and
// lends it to the state machine one key at a time.

use super::machine::Mode;
use super::square::Square;
use crate::codec::{self, OutputBase};

/// What happened when text was loaded into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Digits were found and the board now holds this value
    Loaded(u64),
    /// No digits were found; the board was reset to zero
    Defaulted,
}

/// The board being edited
#[derive(Debug, Clone, Default)]
pub struct BitState {
    /// Board value, bit `i` is square `i`
    pub bits: u64,

    /// Currently selected square
    pub cursor: Square,

    /// Key state machine mode
    pub mode: Mode,

    /// Base for the value line and clipboard export
    pub output_base: OutputBase,
}

impl BitState {
    pub fn new(bits: u64, output_base: OutputBase) -> Self {
        Self {
            bits,
            output_base,
            ..Default::default()
        }
    }

    /// True while the diagonal prefix waits for its direction key
    pub fn pending_diagonal(&self) -> bool {
        self.mode == Mode::AwaitingDiagonal
    }

    /// Whether the square is set
    pub fn is_set(&self, sq: Square) -> bool {
        self.bits & sq.bit() != 0
    }

    /// The value in the current output base
    pub fn formatted(&self) -> String {
        codec::format(self.bits, self.output_base)
    }

    /// Load text with prefix detection; no digits resets the board to zero
    pub fn import(&mut self, text: &str) -> ImportOutcome {
        self.load(codec::parse(text))
    }

    /// Load bare binary digits; no digits resets the board to zero
    pub fn import_binary(&mut self, text: &str) -> ImportOutcome {
        self.load(codec::parse_radix(text, 2))
    }

    fn load(&mut self, parsed: Option<u64>) -> ImportOutcome {
        match parsed {
            Some(value) => {
                self.bits = value;
                ImportOutcome::Loaded(value)
            }
            None => {
                self.bits = 0;
                ImportOutcome::Defaulted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_at_top_left() {
        let state = BitState::default();
        assert_eq!(state.bits, 0);
        assert_eq!(state.cursor, Square::TOP_LEFT);
        assert_eq!(state.output_base, OutputBase::Hex);
        assert!(!state.pending_diagonal());
    }

    #[test]
    fn test_import_detects_base() {
        let mut state = BitState::default();
        assert_eq!(state.import("0xff00"), ImportOutcome::Loaded(0xff00));
        assert_eq!(state.bits, 0xff00);
        assert_eq!(state.import("0b11"), ImportOutcome::Loaded(3));
        assert_eq!(state.import("100"), ImportOutcome::Loaded(100));
    }

    #[test]
    fn test_import_without_digits_resets_to_zero() {
        let mut state = BitState::new(0xdead_beef, OutputBase::Hex);
        assert_eq!(state.import("not a number"), ImportOutcome::Defaulted);
        assert_eq!(state.bits, 0);
    }

    #[test]
    fn test_import_binary_ignores_prefixes() {
        let mut state = BitState::default();
        assert_eq!(state.import_binary("1111"), ImportOutcome::Loaded(15));
        assert_eq!(state.import_binary("x1"), ImportOutcome::Defaulted);
    }

    #[test]
    fn test_formatted_follows_output_base() {
        let mut state = BitState::new(255, OutputBase::Decimal);
        assert_eq!(state.formatted(), "255");
        state.output_base = OutputBase::Hex;
        assert_eq!(state.formatted(), "0x00000000000000ff");
    }
}
