// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::board::{Key, PromptKind};

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Close the prompt and load the typed text
    Submit(PromptKind, String),
}

/// Single-line text entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    fn handle_input(&mut self, key: Key) -> ModalAction {
        match key {
            Key::Esc => ModalAction::Close,
            Key::Enter => ModalAction::Submit(self.kind, std::mem::take(&mut self.input)),
            Key::Backspace => {
                self.input.pop();
                ModalAction::None
            }
            Key::Char(c) if !c.is_control() && self.input.chars().count() < self.kind.max_len() => {
                self.input.push(c);
                ModalAction::None
            }
            _ => ModalAction::None,
        }
    }
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Recent log entries
    Logs,
    /// Numeric entry
    Prompt(Prompt),
}

impl Modal {
    pub fn prompt(kind: PromptKind) -> Self {
        Modal::Prompt(Prompt::new(kind))
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: Key) -> ModalAction {
        match self {
            // Any key dismisses the read-only overlays
            Modal::Help | Modal::Logs => ModalAction::Close,
            Modal::Prompt(prompt) => prompt.handle_input(key),
        }
    }
}
