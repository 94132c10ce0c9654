// TUI application state
//
// Wraps the board state with everything the terminal front end needs:
// theme, overlays, the toast line and the clipboard worker. Keys arrive
// here already translated; the board state machine decides what they mean
// and App carries out the effects it returns.

use super::clipboard::{self, ClipboardStatus, ClipboardWorker};
use super::components::Toast;
use super::modal::{Modal, ModalAction};
use crate::board::{self, BitState, Effect, ImportOutcome, Key, PromptKind};
use crate::logging::LogBuffer;
use crate::theme::Theme;

/// Main application state for the TUI
pub struct App {
    /// The board being edited
    pub state: BitState,

    /// Current color theme
    pub theme: Theme,

    /// Active overlay (help, logs, prompt)
    pub modal: Option<Modal>,

    /// Transient message in the corner
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the logs overlay
    pub log_buffer: LogBuffer,

    /// Clipboard owner, `None` when clipboard support is off
    clipboard: Option<ClipboardWorker>,
}

impl App {
    pub fn new(
        state: BitState,
        theme: Theme,
        log_buffer: LogBuffer,
        clipboard: Option<ClipboardWorker>,
    ) -> Self {
        Self {
            state,
            theme,
            modal: None,
            toast: None,
            should_quit: false,
            log_buffer,
            clipboard,
        }
    }

    pub fn clipboard_enabled(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Route a key to the open overlay, or to the board
    pub fn handle_key(&mut self, key: Key) {
        if let Some(modal) = self.modal.as_mut() {
            match modal.handle_input(key) {
                ModalAction::None => {}
                ModalAction::Close => self.modal = None,
                ModalAction::Submit(kind, text) => {
                    self.modal = None;
                    self.submit_prompt(kind, &text);
                }
            }
            return;
        }

        let effect = board::handle_key(&mut self.state, key);
        self.run_effect(effect);
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Publish(text) => self.publish(text),
            Effect::FetchClipboard => self.paste(),
            Effect::Prompt(kind) => self.modal = Some(Modal::prompt(kind)),
            Effect::ShowHelp => self.modal = Some(Modal::Help),
            Effect::ShowLogs => self.modal = Some(Modal::Logs),
            Effect::Quit => self.should_quit = true,
        }
    }

    fn publish(&mut self, text: String) {
        let Some(worker) = &self.clipboard else {
            self.show_toast("✗ Clipboard disabled");
            return;
        };
        if let Err(e) = worker.publish(text) {
            tracing::warn!("Yank failed: {:#}", e);
            self.show_toast("✗ Failed to copy");
        }
    }

    fn paste(&mut self) {
        if self.clipboard.is_none() {
            self.show_toast("✗ Clipboard disabled");
            return;
        }
        match clipboard::fetch_text() {
            Ok(Some(text)) => {
                tracing::info!("Pasted {:?} from clipboard", text);
                let outcome = self.state.import(&text);
                self.report_import(outcome);
            }
            Ok(None) => self.show_toast("✗ Clipboard content unavailable"),
            Err(e) => {
                tracing::warn!("Paste failed: {:#}", e);
                self.show_toast("✗ Clipboard unavailable");
            }
        }
    }

    fn submit_prompt(&mut self, kind: PromptKind, text: &str) {
        let outcome = match kind {
            PromptKind::Any => self.state.import(text),
            PromptKind::Binary => self.state.import_binary(text),
        };
        self.report_import(outcome);
    }

    fn report_import(&mut self, outcome: ImportOutcome) {
        match outcome {
            ImportOutcome::Loaded(value) => {
                tracing::debug!("Loaded {:#018x}", value);
            }
            ImportOutcome::Defaulted => {
                tracing::info!("Input had no digits, board cleared");
                self.show_toast("No digits found, board cleared");
            }
        }
    }

    /// Called by the event loop when the clipboard worker reports back
    pub fn on_clipboard_status(&mut self, status: ClipboardStatus) {
        match status {
            ClipboardStatus::Published(text) => {
                tracing::info!("Yanked {} to clipboard", text);
                self.show_toast("✓ Copied to clipboard");
            }
            ClipboardStatus::Failed(reason) => {
                tracing::warn!("Yank failed: {}", reason);
                self.show_toast("✗ Failed to copy");
            }
            ClipboardStatus::Unavailable(reason) => {
                tracing::warn!("Clipboard unavailable, y/p will not work: {}", reason);
                // Dropping the handle stops the worker
                self.clipboard = None;
                self.show_toast("✗ Clipboard unavailable: y/p disabled");
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once its time is up
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::OutputBase;
    use crate::tui::components::status_bar;
    use tokio::sync::mpsc;

    fn app() -> App {
        App::new(BitState::default(), Theme::auto(), LogBuffer::new(), None)
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(Key::Char(c));
        }
    }

    #[test]
    fn test_prompt_loads_value() {
        let mut app = app();
        press(&mut app, "i");
        assert!(matches!(app.modal, Some(Modal::Prompt(_))));

        // Keys go to the prompt, not the board
        press(&mut app, "0xff");
        assert_eq!(app.state.bits, 0);

        app.handle_key(Key::Enter);
        assert!(app.modal.is_none());
        assert_eq!(app.state.bits, 0xff);
    }

    #[test]
    fn test_binary_prompt() {
        let mut app = app();
        press(&mut app, "I1010");
        app.handle_key(Key::Enter);
        assert_eq!(app.state.bits, 0b1010);
    }

    #[test]
    fn test_prompt_without_digits_clears_and_warns() {
        let mut app = App::new(
            BitState::new(7, OutputBase::Hex),
            Theme::auto(),
            LogBuffer::new(),
            None,
        );
        press(&mut app, "ixyz");
        app.handle_key(Key::Enter);
        assert_eq!(app.state.bits, 0);
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_cancelled_prompt_keeps_board() {
        let mut app = App::new(
            BitState::new(7, OutputBase::Hex),
            Theme::auto(),
            LogBuffer::new(),
            None,
        );
        press(&mut app, "i12");
        app.handle_key(Key::Esc);
        assert!(app.modal.is_none());
        assert_eq!(app.state.bits, 7);
    }

    #[test]
    fn test_clipboard_keys_degrade_when_disabled() {
        let mut app = app();
        press(&mut app, " y");
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("✗ Clipboard disabled")
        );
        app.toast = None;
        press(&mut app, "p");
        assert!(app.toast.is_some());
        assert_eq!(app.state.bits, 1);
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app();
        press(&mut app, "H");
        assert_eq!(app.modal, Some(Modal::Help));
        press(&mut app, " ");
        assert!(app.modal.is_none());
        assert_eq!(app.state.bits, 0);
    }

    fn toast_text(app: &App) -> Option<&str> {
        app.toast.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn test_unavailable_clipboard_disables_yank_and_paste() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(
            BitState::default(),
            Theme::auto(),
            LogBuffer::new(),
            Some(ClipboardWorker::from_sender(tx)),
        );
        assert!(app.clipboard_enabled());

        app.on_clipboard_status(ClipboardStatus::Unavailable("no display".to_string()));
        assert!(!app.clipboard_enabled());
        assert_eq!(toast_text(&app), Some("✗ Clipboard unavailable: y/p disabled"));
        assert!(status_bar::status_text(&app.state, app.clipboard_enabled())
            .ends_with("clipboard off"));

        app.toast = None;
        press(&mut app, "y");
        assert_eq!(toast_text(&app), Some("✗ Clipboard disabled"));
    }

    #[test]
    fn test_publish_reaches_worker_and_reports_back() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(
            BitState::new(0xff, OutputBase::Hex),
            Theme::auto(),
            LogBuffer::new(),
            Some(ClipboardWorker::from_sender(tx)),
        );
        press(&mut app, "y");
        assert_eq!(rx.try_recv().ok().as_deref(), Some("0x00000000000000ff"));
        assert!(app.toast.is_none());

        app.on_clipboard_status(ClipboardStatus::Published("0x00000000000000ff".to_string()));
        assert_eq!(toast_text(&app), Some("✓ Copied to clipboard"));

        app.on_clipboard_status(ClipboardStatus::Failed("lost owner".to_string()));
        assert_eq!(toast_text(&app), Some("✗ Failed to copy"));
        assert!(app.clipboard_enabled());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, "q");
        assert!(app.should_quit);
    }
}
