//! Bitboard editing core
//!
//! - `square`: grid addressing with row/column bounds
//! - `transform`: involutive bit flips (rank, file, diagonals, knight)
//! - `state`: the owned session state
//! - `machine`: the key state machine that drives edits
//!
//! Nothing in here touches the terminal or the clipboard.

pub mod machine;
pub mod square;
pub mod state;
pub mod transform;

pub use machine::{handle_key, Effect, Key, PromptKind};
pub use square::Square;
pub use state::{BitState, ImportOutcome};
